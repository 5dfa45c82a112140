mod doc;
mod provenance;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::json;
use starcut::geom2::rand::ReplayToken;
use starcut::geom2::Segment;
use starcut::level::{
    generate_level, DifficultyPolicy, EndlessPolicy, Level, LevelCfg, StandardPolicy,
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH,
};
use starcut::moves::{Game, MoveCfg};
use starcut::Vec2;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use doc::{outcome_str, LevelDoc, MoveDoc, SessionDoc};

#[derive(Parser)]
#[command(name = "starcut")]
#[command(about = "Generate starcut levels and replay moves against them")]
struct Cmd {
    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct LevelArgs {
    #[arg(long, default_value_t = 1)]
    level: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Endless mode: standard layout, 999 moves
    #[arg(long)]
    endless: bool,
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: f64,
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: f64,
}

impl LevelArgs {
    fn params(&self) -> serde_json::Value {
        json!({
            "level": self.level,
            "seed": self.seed,
            "policy": if self.endless { "endless" } else { "standard" },
            "board": [self.width, self.height],
        })
    }

    fn generate(&self) -> Result<Level> {
        let policy: Box<dyn DifficultyPolicy> = if self.endless {
            Box::new(EndlessPolicy::default())
        } else {
            Box::new(StandardPolicy)
        };
        generate_level(
            (self.width, self.height),
            &*policy,
            self.level,
            &LevelCfg::default(),
            ReplayToken::new(self.seed, self.level as u64),
        )
        .with_context(|| format!("generating level {} (seed {})", self.level, self.seed))
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate a level and print it as JSON
    Generate {
        #[command(flatten)]
        level: LevelArgs,
        /// Write the level here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay drags against a generated level and print the session
    Play {
        #[command(flatten)]
        level: LevelArgs,
        /// Drag from (x0, y0) to (x1, y1); repeat for several moves
        #[arg(long = "chord", value_name = "X0,Y0,X1,Y1", value_parser = parse_drag)]
        chords: Vec<Segment>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let max_level = match cmd.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Generate { level, out } => generate(&level, out.as_deref()),
        Action::Play { level, chords } => play(&level, &chords),
        Action::Report => report(),
    }
}

fn parse_drag(s: &str) -> Result<Segment, String> {
    let nums = s
        .split(',')
        .map(|t| t.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad coordinate in {s:?}: {e}"))?;
    match nums[..] {
        [x0, y0, x1, y1] => Ok(Segment::new(Vec2::new(x0, y0), Vec2::new(x1, y1))),
        _ => Err(format!("expected 4 comma-separated numbers, got {}", nums.len())),
    }
}

fn generate(args: &LevelArgs, out: Option<&Path>) -> Result<()> {
    let level = args.generate()?;
    let body = serde_json::to_vec_pretty(&LevelDoc::from(&level))?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, args.params())?;
    tracing::info!(
        out = %out.display(),
        provenance = %sidecar.display(),
        "level written"
    );
    Ok(())
}

/// Feed each drag through the full begin/update/end protocol.
fn replay(level: Level, drags: &[Segment]) -> SessionDoc {
    let index = level.index;
    let mut game = Game::new(level, MoveCfg::default());
    let moves = drags
        .iter()
        .map(|d| {
            game.begin_drag(d.start);
            game.update_drag(d.end);
            let result = game.end_drag(d.end);
            MoveDoc::new(d, &result, &game)
        })
        .collect();
    SessionDoc {
        level: index,
        moves,
        outcome: outcome_str(game.outcome()),
        blocking_pairs: game.blocking_pairs(),
    }
}

fn play(args: &LevelArgs, drags: &[Segment]) -> Result<()> {
    let session = replay(args.generate()?, drags);
    tracing::info!(
        level = session.level,
        moves = session.moves.len(),
        outcome = session.outcome,
        "session replayed"
    );
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "starcut_version": starcut::VERSION,
        "defaults": {
            "board": [DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT],
            "min_drag_distance": MoveCfg::default().min_drag_distance,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
