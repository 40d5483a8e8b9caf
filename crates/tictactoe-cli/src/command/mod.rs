use std::{fs::File, path::PathBuf, sync::Arc};

use anyhow::{Context as _, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    play: PlayArg,
    #[clap(flatten)]
    log: LogArg,
}

#[derive(Debug, Clone, clap::Args)]
struct LogArg {
    /// Write logs to this file (logging is off without it)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Log filter directive, overridden by `RUST_LOG`
    #[clap(long, default_value = "info")]
    log_level: String,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(&args.log)?;
    play::run(&args.play)
}

fn init_logging(arg: &LogArg) -> anyhow::Result<()> {
    let LogArg {
        log_file,
        log_level,
    } = arg;

    // The terminal belongs to the UI, so logs only ever go to a file.
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level {log_level:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;
    Ok(())
}
