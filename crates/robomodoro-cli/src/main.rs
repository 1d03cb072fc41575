use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod host;

#[derive(Parser)]
#[command(name = "robomodoro", version, about = "Robomodoro status-bar Pomodoro timer")]
struct Cli {
    /// Log engine transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive status-bar timer
    Run {
        /// Show MM:SS instead of rounded minutes
        #[arg(long)]
        show_seconds: bool,
    },
    /// Render a remaining time the way the status label does
    Format {
        /// Remaining time in seconds (fractions allowed)
        seconds: f64,
        /// Show MM:SS instead of rounded minutes
        #[arg(long)]
        show_seconds: bool,
    },
    /// Print the status-bar menu
    Menu {
        /// Value for the completed-pomodoros entry
        #[arg(long, default_value = "0")]
        completed: u64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the engine on a simulated clock through several expiries
    Simulate {
        /// Number of countdowns to let expire
        #[arg(long, default_value = "8")]
        cycles: u32,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run { show_seconds } => commands::run::run(show_seconds),
        Commands::Format {
            seconds,
            show_seconds,
        } => commands::format::run(seconds, show_seconds),
        Commands::Menu { completed, json } => commands::menu::run(completed, json),
        Commands::Simulate { cycles } => commands::simulate::run(cycles),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
