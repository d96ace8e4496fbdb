use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use msolve::render::{render_history_entry, render_steps, render_value, NO_INVERSE};
use msolve::{
    parse_matrix, Config, FileStore, KeyValueStore, Matrix, MemoryStore, Operation, Session,
    ThemeKey,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "msolve - step-by-step matrix solver (matrices up to 6x6)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for history and settings (default: $MSOLVE_DATA_DIR or ~/.msolve)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep history and settings in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Maximum number of history entries kept
    #[arg(long, global = true, default_value_t = msolve::history::DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// A + B
    Add(BinaryArgs),
    /// A - B
    Sub(BinaryArgs),
    /// A x B
    Mul(BinaryArgs),
    /// A^T
    Transpose(UnaryArgs),
    /// det(A) by cofactor expansion
    Det(UnaryArgs),
    /// A^-1 by the adjugate method
    Inverse(UnaryArgs),
    /// Show or clear the operation history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

/// Matrices are written as rows separated by ';', cells by ',' (e.g. "1,2;3,4")
#[derive(Args)]
struct UnaryArgs {
    /// Matrix A
    #[arg(short, long)]
    a: String,

    /// Print the step-by-step derivation
    #[arg(short, long)]
    steps: bool,
}

#[derive(Args)]
struct BinaryArgs {
    /// Matrix A
    #[arg(short, long)]
    a: String,

    /// Matrix B
    #[arg(short, long)]
    b: String,

    /// Print the step-by-step derivation
    #[arg(short, long)]
    steps: bool,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Remove all entries
    Clear,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the selected theme
    Get,
    /// Select a theme
    Set { theme: String },
    /// List available themes
    List,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::with_data_dir(Config::resolve_data_dir(cli.data_dir.clone()))
        .with_history_limit(cli.history_limit);

    if cli.ephemeral {
        let session = Session::new(MemoryStore::new(), config)?;
        execute(cli.command, session)
    } else {
        let store = FileStore::new(&config.data_dir);
        let session = Session::new(store, config)?;
        execute(cli.command, session)
    }
}

fn execute<S: KeyValueStore>(command: Commands, mut session: Session<S>) -> Result<()> {
    match command {
        Commands::Add(args) => solve_binary(&mut session, Operation::Add, args),
        Commands::Sub(args) => solve_binary(&mut session, Operation::Subtract, args),
        Commands::Mul(args) => solve_binary(&mut session, Operation::Multiply, args),
        Commands::Transpose(args) => solve_unary(&mut session, Operation::Transpose, args),
        Commands::Det(args) => solve_unary(&mut session, Operation::Determinant, args),
        Commands::Inverse(args) => solve_unary(&mut session, Operation::Inverse, args),
        Commands::History { action } => handle_history(&mut session, action),
        Commands::Theme { action } => handle_theme(&mut session, action),
    }
}

fn parse_operand(name: &str, text: &str) -> Result<Matrix> {
    parse_matrix(text).with_context(|| format!("invalid matrix {name}: '{text}'"))
}

fn solve_unary<S: KeyValueStore>(
    session: &mut Session<S>,
    op: Operation,
    args: UnaryArgs,
) -> Result<()> {
    let a = parse_operand("A", &args.a)?;
    solve(session, op, &a, None, args.steps)
}

fn solve_binary<S: KeyValueStore>(
    session: &mut Session<S>,
    op: Operation,
    args: BinaryArgs,
) -> Result<()> {
    let a = parse_operand("A", &args.a)?;
    let b = parse_operand("B", &args.b)?;
    solve(session, op, &a, Some(&b), args.steps)
}

fn solve<S: KeyValueStore>(
    session: &mut Session<S>,
    op: Operation,
    a: &Matrix,
    b: Option<&Matrix>,
    show_steps: bool,
) -> Result<()> {
    let outcome = session
        .run(op, a, b)
        .with_context(|| format!("{} failed", op.name()))?;

    // A singular matrix always shows how the determinant came out zero
    let show_steps = show_steps || session.config().show_steps;
    if show_steps || outcome.result.is_none() {
        println!("{}\n", render_steps(&outcome.steps));
    }

    if outcome.result.is_none() {
        println!("{NO_INVERSE}");
    } else {
        println!("{}:\n{}", op.name(), render_value(&outcome.result));
    }
    Ok(())
}

fn handle_history<S: KeyValueStore>(
    session: &mut Session<S>,
    action: Option<HistoryAction>,
) -> Result<()> {
    match action.unwrap_or(HistoryAction::List { limit: None }) {
        HistoryAction::List { limit } => {
            let entries = session.history().entries();
            if entries.is_empty() {
                println!("No history yet");
                return Ok(());
            }
            let shown = limit.unwrap_or(entries.len());
            for entry in entries.iter().take(shown) {
                println!("{}\n", render_history_entry(entry));
            }
        }
        HistoryAction::Clear => {
            session.history().clear().context("failed to clear history")?;
            println!("History cleared");
        }
    }
    Ok(())
}

fn handle_theme<S: KeyValueStore>(
    session: &mut Session<S>,
    action: Option<ThemeAction>,
) -> Result<()> {
    match action.unwrap_or(ThemeAction::Get) {
        ThemeAction::Get => {
            let theme = session.settings().theme();
            println!("{} ({})", theme.label(), theme.key());
        }
        ThemeAction::Set { theme } => {
            let theme: ThemeKey = theme.parse()?;
            session.settings().set_theme(theme)?;
            println!("Theme set to {}", theme.label());
        }
        ThemeAction::List => {
            let current = session.settings().theme();
            for theme in ThemeKey::ALL {
                let marker = if theme == current { "*" } else { " " };
                println!(
                    "{marker} {:<8} {:<14} {}",
                    theme.key(),
                    theme.label(),
                    theme.description()
                );
            }
        }
    }
    Ok(())
}
