use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use readsmart::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "readsmart")]
#[command(about = "ReadSmart - quizzes with XP, streaks, ranks and daily quests")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.readsmart/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding progress.json (overrides the config)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep progress in memory only; no progress or config file is written
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show XP, level, rank, streak and totals
    Status,

    /// Record a finished quiz
    Play {
        /// Subject the quiz was about (must be in the question bank)
        subject: String,
        /// Questions answered correctly
        correct: u32,
        /// Questions asked
        total: u32,
    },

    /// Take a quiz from the question bank
    Quiz {
        /// Subject to quiz on (case-insensitive)
        subject: String,
    },

    /// List subjects in the question bank
    Subjects,

    /// Show today's daily quests
    Quests,

    /// Show the leaderboard against rivals
    Leaderboard,

    /// Show unlocked and locked achievements
    Achievements,

    /// Erase all progress
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Init { force } => cli::init::init_command(cli.config, force),
        command => run(
            command,
            cli.config.as_deref(),
            cli.data_dir.as_deref(),
            cli.ephemeral,
        ),
    }
}

fn run(
    command: Commands,
    config_path: Option<&Path>,
    data_dir: Option<&Path>,
    ephemeral: bool,
) -> Result<()> {
    let config = if ephemeral {
        Config::load_or_default(config_path)?
    } else {
        Config::load(config_path)?
    };
    let mut engine = cli::open_engine(&config, data_dir, ephemeral);

    match command {
        Commands::Status => cli::status::status_command(&engine),
        Commands::Play {
            subject,
            correct,
            total,
        } => {
            let bank = config.question_bank()?;
            cli::play::play_command(&mut engine, &bank, &subject, correct, total)?
        }
        Commands::Quiz { subject } => {
            let bank = config.question_bank()?;
            cli::quiz::quiz_command(&mut engine, &bank, &subject)?;
        }
        Commands::Subjects => {
            let bank = config.question_bank()?;
            cli::subjects::subjects_command(&bank, engine.record());
        }
        Commands::Quests => cli::quests::quests_command(&engine),
        Commands::Leaderboard => cli::leaderboard::leaderboard_command(&engine),
        Commands::Achievements => cli::achievements::achievements_command(&engine),
        Commands::Reset { yes } => cli::reset::reset_command(&mut engine, yes)?,
        Commands::Init { force } => {
            cli::init::init_command(config_path.map(Path::to_path_buf), force)?
        }
    }

    Ok(())
}
