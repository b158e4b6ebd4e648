use clap::Parser;
use vhs_rental_client::app::commands;
use vhs_rental_client::utils::error::ErrorSeverity;
use vhs_rental_client::utils::{logger, validation::Validate};
use vhs_rental_client::{CliConfig, RentalError, RentalServices};

fn exit_code(error: &RentalError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // transient, worth retrying
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3, // configuration
    }
}

fn fail(error: &RentalError) -> ! {
    tracing::error!(
        "❌ {} (kind: {:?}, status: {:?}, detail: {})",
        error,
        error.kind(),
        error.status(),
        error.detail().unwrap_or("-")
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(error));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // The config file may carry the log settings, so it is read before the logger exists.
    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    let level = file.as_ref().and_then(|f| f.log_level());
    if cli.json_logs || file.as_ref().is_some_and(|f| f.json_logs()) {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Some(file) = &file {
        if let Err(e) = file.validate() {
            fail(&e);
        }
    }

    let settings = cli.settings(file.as_ref());
    if let Err(e) = settings.validate() {
        fail(&e);
    }
    tracing::info!("Using backend {}", settings.api_url);

    let services = match RentalServices::connect(&settings) {
        Ok(services) => services,
        Err(e) => fail(&e),
    };

    match commands::execute(&services, cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}
