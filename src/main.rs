use std::process::ExitCode;

use tracing::{error, info};

use mailsim::config::DEFAULT_CONFIG_FILE;
use mailsim::{Application, Config};

fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env(DEFAULT_CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {DEFAULT_CONFIG_FILE}: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = mailsim::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        mailsim::logging::init_console_only(&config.logging.level);
    }

    info!(policy = ?config.registry.usernames, "mailsim starting");

    let mut app = Application::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match app.run(stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Session aborted");
            eprintln!("mailsim: {e}");
            ExitCode::FAILURE
        }
    }
}
