use clap::{ArgMatches, CommandFactory, FromArgMatches};
use statusof::config::{self, Config};
use statusof::core::StatusOfError;
use statusof::core::constants::{exit_codes, messages};
use statusof::reporting::logging;
use statusof::ui::{Cli, cli_to_config, collect_sources, load_urls};

#[tokio::main]
async fn main() {
    // Usage errors exit with 2, --help and --version with 0
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    std::process::exit(run_statusof_logic(&cli, &matches).await);
}

/// Main logic extracted from main() for testing
pub async fn run_statusof_logic(cli: &Cli, matches: &ArgMatches) -> i32 {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => return report_error(&e),
    };

    logging::init_logger(config.is_verbose());
    logging::log_config_info(&config);

    let urls = match load_urls(&collect_sources(cli, matches)) {
        Ok(urls) => urls,
        Err(e) => return report_error(&e),
    };

    if urls.is_empty() {
        println!("{}", messages::INVALID_ARGUMENTS);
        return exit_codes::INVALID_INPUT;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match statusof::run(&urls, &config, &mut out).await {
        Ok(_) => exit_codes::SUCCESS,
        // The invalid entries were already listed on stdout
        Err(e @ StatusOfError::Cancelled { .. }) => e.exit_code(),
        Err(e) => report_error(&e),
    }
}

fn load_config(cli: &Cli) -> statusof::Result<Config> {
    let cli_config = cli_to_config(cli);
    config::load_and_merge(&cli_config)
}

fn report_error(e: &StatusOfError) -> i32 {
    logging::log_error("Aborting", Some(e));
    eprintln!("Error: {e}");
    e.exit_code()
}
