use clap::Parser;
use eyre::Result;

use bicams_cli::cli::{Cli, Command, ConfigAction};
use bicams_cli::{commands, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Config {
            action: ConfigAction::Init { force },
        } => commands::init_config(&config_path, force, &mut stdout),
        Command::Config {
            action: ConfigAction::Show,
        } => {
            let config = config::load_config(&config_path)?;
            commands::show_config(&config, &mut stdout)
        }
        Command::Norms => {
            let config = config::load_config(&config_path)?;
            let norms = commands::active_norms(cli.norms.as_deref(), &config)?;
            commands::print_norms(&norms, &mut stdout)
        }
        Command::Score(args) => {
            let config = config::load_config(&config_path)?;
            let norms = commands::active_norms(cli.norms.as_deref(), &config)?;
            commands::score(&args, &norms, &config, &mut stdout)
        }
        Command::Report(args) => {
            let config = config::load_config(&config_path)?;
            let norms = commands::active_norms(cli.norms.as_deref(), &config)?;
            commands::report(&args, &norms, &config, &mut stdout).map(|_| ())
        }
    }
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
