use anyhow::Context;
use clap::Parser;
use scical::calculator::{AngleMode, Calculator};
use scical::config::Config;
use scical::history::History;
use scical::ui::Repl;
use scical::{keymap, logging};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "scical")]
#[command(about = "A scientific calculator for the terminal")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: ~/.config/scical/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in degrees mode
    #[arg(long, conflicts_with = "radians")]
    degrees: bool,

    /// Start in radians mode
    #[arg(long)]
    radians: bool,

    /// Maximum number of history entries to keep
    #[arg(long)]
    history_limit: Option<usize>,

    /// Show the display with thousand separators
    #[arg(long)]
    group_digits: bool,

    /// Log filter, e.g. "debug" or "scical=trace" (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Apply these keys and buttons, print the display and exit
    #[arg(long, value_name = "TOKENS")]
    eval: Option<String>,
}

impl Cli {
    /// Command line flags override values from the config file.
    fn apply(&self, config: &mut Config) {
        if self.degrees {
            config.angle_mode = AngleMode::Degrees;
        }
        if self.radians {
            config.angle_mode = AngleMode::Radians;
        }
        if let Some(limit) = self.history_limit {
            config.history_limit = limit;
        }
        if self.group_digits {
            config.group_digits = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);

    logging::init(&config.logging.level);
    config.sanitize();
    info!(
        angle_mode = ?config.angle_mode,
        history_limit = config.history_limit,
        "starting scical"
    );

    let history = History::new(config.history_limit).with_time_format(config.time_format.clone());
    let mut calculator = Calculator::with_history(config.angle_mode, history);

    if let Some(tokens) = &cli.eval {
        let unknown =
            keymap::apply_line(&mut calculator, tokens).context("Failed to evaluate input")?;
        if !unknown.is_empty() {
            warn!(?unknown, "skipped unknown tokens");
            eprintln!("unknown: {}", unknown.join(" "));
        }
        println!("{}", calculator.display());
        return Ok(());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("scical - type :help for keys and commands");
        io::stdout().flush()?;
    }

    let mut repl = Repl::new(calculator, config.group_digits, io::stdout().lock());
    repl.run(stdin.lock()).context("Terminal session failed")?;

    Ok(())
}
