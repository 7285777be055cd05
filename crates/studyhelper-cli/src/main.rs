use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyhelper", version, about = "Student Helper CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Semester marks and averages
    Grades {
        #[command(subcommand)]
        action: commands::grades::GradesAction,
    },
    /// Free-text study notes
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Pomodoro timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Habit tracker
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Short multiple-choice quiz
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Dhikr counter
    Counter {
        #[command(subcommand)]
        action: commands::counter::CounterAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("studyhelper=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Grades { action } => commands::grades::run(action),
        Commands::Notes { action } => commands::notes::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Counter { action } => commands::counter::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
