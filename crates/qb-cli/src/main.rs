//! CLI frontend for the Quizboard party-game board events.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "qb",
    about = "Quizboard: trivia quizzes and board events for party games",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play trivia quiz rounds, answering on stdin
    Play {
        /// Question bank JSON file (default: bundled sample bank)
        #[arg(short, long)]
        bank: Option<PathBuf>,

        /// Board RAM file, loaded before and saved after the rounds
        #[arg(long)]
        state: Option<PathBuf>,

        /// Session config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of questions to ask
        #[arg(short, long, default_value = "4")]
        rounds: usize,

        /// Let a CPU player answer instead of reading stdin
        #[arg(long)]
        cpu: bool,

        /// CPU difficulty: easy, normal, hard
        #[arg(short, long, default_value = "normal")]
        difficulty: String,

        /// Draw every question independently (repeats possible)
        #[arg(long)]
        no_board_ram: bool,

        /// Player name
        #[arg(short, long, default_value = "Player")]
        name: String,
    },

    /// Print the question indices the scheduler would produce
    Schedule {
        /// Number of active questions
        #[arg(short = 'n', long, default_value = "16")]
        count: usize,

        /// Number of selections (default: two full cycles)
        #[arg(long)]
        calls: Option<usize>,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Use independent draws instead of the no-repeat schedule
        #[arg(long)]
        random: bool,
    },

    /// Validate a question bank
    Check {
        /// Question bank JSON file (default: bundled sample bank)
        #[arg(short, long)]
        bank: Option<PathBuf>,
    },

    /// Run quiz rounds between four CPU players and tabulate the results
    Simulate {
        /// Quiz rounds per player
        #[arg(short, long, default_value = "16")]
        rounds: usize,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Question bank JSON file (default: bundled sample bank)
        #[arg(short, long)]
        bank: Option<PathBuf>,

        /// Session config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            bank,
            state,
            config,
            seed,
            rounds,
            cpu,
            difficulty,
            no_board_ram,
            name,
        } => commands::play::run(commands::play::PlayArgs {
            bank,
            state,
            config,
            seed,
            rounds,
            cpu,
            difficulty,
            no_board_ram,
            name,
        }),
        Commands::Schedule {
            count,
            calls,
            seed,
            random,
        } => commands::schedule::run(count, calls, seed, random),
        Commands::Check { bank } => commands::check::run(bank.as_deref()),
        Commands::Simulate {
            rounds,
            seed,
            bank,
            config,
        } => commands::simulate::run(rounds, seed, bank.as_deref(), config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
