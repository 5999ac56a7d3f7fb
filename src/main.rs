//! Caro GUI
//!
//! A graphical interface for playing Caro against the AI or another player.

use std::time::Duration;

use caro::ui::{CaroApp, GameMode, GameSettings};
use caro::{Difficulty, Mark};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Play against the AI
    Pve,
    /// Two players on one device
    Pvp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MarkArg {
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Starting settings for the menu; everything can still be changed there
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board side length
    #[arg(short, long, default_value_t = caro::DEFAULT_BOARD_SIZE)]
    size: usize,

    #[arg(short, long, value_enum, default_value_t = ModeArg::Pve)]
    mode: ModeArg,

    /// Mark played by the human in PvE
    #[arg(long, value_enum, default_value_t = MarkArg::X)]
    human: MarkArg,

    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Medium)]
    difficulty: DifficultyArg,

    /// Pause before each AI move
    #[arg(long, default_value_t = 300)]
    ai_delay_ms: u64,

    /// Fixed seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn settings(&self) -> GameSettings {
        let human_mark = match self.human {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        };
        GameSettings {
            board_size: self.size,
            mode: match self.mode {
                ModeArg::Pve => GameMode::PvE { human_mark },
                ModeArg::Pvp => GameMode::PvP,
            },
            difficulty: self.difficulty.into(),
            ai_delay: Duration::from_millis(self.ai_delay_ms),
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("caro=info")))
        .init();

    let settings = args.settings();
    tracing::info!(?settings, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Caro"),
        ..Default::default()
    };

    eframe::run_native(
        "Caro",
        options,
        Box::new(move |cc| Ok(Box::new(CaroApp::new(cc, settings)))),
    )
}
