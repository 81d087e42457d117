use clap::Parser;
use tracing_subscriber::EnvFilter;

use emoji_catalog::cli::commands::build::BuildCommand;
#[cfg(feature = "fetch")]
use emoji_catalog::cli::commands::{fetch::FetchCommand, run::RunCommand};
use emoji_catalog::cli::commands::{languages::LanguagesCommand, CommandHandler, ConfigOverrides};
use emoji_catalog::cli::{Cli, Commands, LogFormat, LogLevel};
use emoji_catalog::Result;

/// Initialize tracing from the --log-level and --log-format flags.
///
/// RUST_LOG takes precedence over --log-level when set. Logs go to stderr.
fn initialize_tracing(log_level: LogLevel, log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    match log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_names(true)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level, cli.log_format);

    if cli.command.requires_network() {
        tracing::info!("{} downloads CLDR data over the network", cli.command.name());
    }
    if cli.command.writes_catalogs() {
        tracing::debug!("{} will overwrite existing catalogs", cli.command.name());
    }

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Build {
            cldr,
            output,
            previous,
            config,
            languages,
            isolate_failures,
            workers,
            release,
        } => Box::new(BuildCommand::new(
            cldr,
            ConfigOverrides {
                config,
                release,
                output,
                previous,
                languages,
                isolate_failures,
                workers,
            },
        )),
        #[cfg(feature = "fetch")]
        Commands::Fetch {
            release,
            dest,
            config,
        } => Box::new(FetchCommand::new(
            dest,
            ConfigOverrides {
                config,
                release,
                ..Default::default()
            },
        )),
        #[cfg(feature = "fetch")]
        Commands::Run {
            release,
            output,
            previous,
            config,
            keep_source,
        } => Box::new(RunCommand::new(
            keep_source,
            ConfigOverrides {
                config,
                release,
                output,
                previous,
                ..Default::default()
            },
        )),
        Commands::Languages { format } => Box::new(LanguagesCommand::new(format)),
    };

    tracing::debug!("Running {} command", handler.name());
    if let Err(e) = handler.execute().await {
        tracing::error!("{} failed: {}", handler.name(), e);
        return Err(e);
    }

    Ok(())
}
