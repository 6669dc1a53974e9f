use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tintlog::{ErrorReport, LogEvent, Logger, LoggerConfig};

#[derive(Parser)]
#[command(name = "tintlog", about = "Leveled, colored logging demo and log reader")]
struct Cli {
    /// TOML file layered over the built-in configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Persist every level to <logs_dir>/<level>.log.
    #[arg(long, global = true)]
    write_to_file: bool,

    /// Human-readable console lines instead of JSON.
    #[arg(long, global = true)]
    plain: bool,

    #[arg(long, global = true)]
    no_color: bool,

    /// Write internal diagnostics to /tmp/tintlog-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit one event through each call style.
    Demo,
    /// Print the entries of a level file.
    Read {
        /// Level name (`info`) or file name under the log directory.
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/tintlog-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
            )
            .init();
        tracing::info!("tintlog debug log started — tail -f /tmp/tintlog-debug.log");
    }

    let mut config = match &cli.config {
        Some(path) => LoggerConfig::load(path)?,
        None => LoggerConfig::defaults(),
    };
    if cli.write_to_file {
        config = config.with_write_to_file(true);
    }
    if cli.plain {
        config = config.with_json(false);
    }
    if cli.no_color {
        config = config.with_colored(false);
    }

    let logger = Logger::new(config)?;

    match cli.command {
        Command::Demo => {
            logger.log(LogEvent::new("info").message("Hello World!"))?;
            logger.log(LogEvent::new("warn").message("This is a warning!"))?;
            logger.access("This an access message!")?;
            let issue = ErrorReport::new(
                "There was an error!",
                "Error: There was an error!\n    at tintlog::demo",
            );
            logger.log(LogEvent::new("error").error(issue.clone()))?;
            logger.error(issue)?;
        }
        Command::Read { name } => {
            logger.read_log(&name).await?;
        }
    }

    Ok(())
}
