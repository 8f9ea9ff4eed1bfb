mod repl;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dee_core::{ConfigFile, DeeConfig, Interpreter, Persona, UnlockPolicy};

#[derive(Parser)]
#[command(name = "dee", about = "Dee: keyword-driven responder with an ethical power ledger")]
struct Cli {
    /// Voice to speak in (overrides the config file)
    #[arg(long, value_enum)]
    persona: Option<PersonaArg>,

    /// TOML config file (falls back to $DEE_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Honor "power down" requests
    #[arg(long, conflicts_with = "no_decrease")]
    allow_decrease: bool,

    /// Ignore "power down" requests
    #[arg(long)]
    no_decrease: bool,

    /// What a repeated "break the jar" does
    #[arg(long, value_enum)]
    unlock_policy: Option<UnlockPolicyArg>,

    /// Enable verbose debug output
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PersonaArg {
    Wyoming,
    Frontier,
}

impl From<PersonaArg> for Persona {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::Wyoming => Persona::Wyoming,
            PersonaArg::Frontier => Persona::Frontier,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnlockPolicyArg {
    Idempotent,
    Repeatable,
}

impl From<UnlockPolicyArg> for UnlockPolicy {
    fn from(arg: UnlockPolicyArg) -> Self {
        match arg {
            UnlockPolicyArg::Idempotent => UnlockPolicy::Idempotent,
            UnlockPolicyArg::Repeatable => UnlockPolicy::Repeatable,
        }
    }
}

/// Diagnostics go to stderr without ANSI so stdout carries only the conversation.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ConfigFile::parse(&content).with_context(|| format!("invalid config {}", path.display()))
}

/// Persona defaults, then the config file, then command-line flags.
fn load_config(cli: &Cli) -> Result<DeeConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var("DEE_CONFIG").ok().map(PathBuf::from));

    let mut file = match &path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            read_config_file(path)?
        }
        None => ConfigFile::default(),
    };
    if let Some(persona) = cli.persona {
        file.persona = Some(persona.into());
    }

    let mut config = file.resolve();
    if cli.allow_decrease {
        config.allow_decrease = true;
    }
    if cli.no_decrease {
        config.allow_decrease = false;
    }
    if let Some(policy) = cli.unlock_policy {
        config.unlock_policy = policy.into();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let dee = Interpreter::new(config).context("invalid configuration")?;
    tracing::info!(
        persona = dee.config().persona.name(),
        allow_decrease = dee.config().allow_decrease,
        unlock_policy = ?dee.config().unlock_policy,
        "starting session"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = repl::run(&dee, stdin.lock(), stdout.lock()).context("terminal I/O failed")?;

    tracing::info!(
        ending = ?summary.ending,
        turns = summary.turns,
        power = %summary.state.power(),
        "session over"
    );
    Ok(())
}
