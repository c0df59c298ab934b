use clap::Parser;
use sombra::cli::{chat, commands, interactive, Cli, Commands};
use sombra::types::config::Config;
use sombra::SombraResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> SombraResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        // Use config value if no flag was specified
        config.general.log_level.clone()
    };

    // Initialize logging with appropriate level
    let filter = EnvFilter::from_default_env().add_directive(
        format!("sombra={}", log_level)
            .parse()
            .unwrap_or_else(|_| "sombra=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuração carregada de: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => commands::init(path)?,
        Commands::Chat => chat::run(&config)?,
        Commands::Ask { question } => commands::ask(&question, &config)?,
        Commands::Import { file } => commands::import(&file, &config)?,
        Commands::Entries { limit } => commands::entries(limit, &config)?,
        Commands::Config => interactive::run_interactive_config(&cli.config)?,
        Commands::Doctor => commands::doctor(&cli.config, &config)?,
        Commands::Version => commands::version(),
    }

    Ok(())
}
