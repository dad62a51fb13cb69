use colored::Colorize;
use std::process::ExitCode;
use subnet_mask::cli::USAGE;
use subnet_mask::config::Settings;
use subnet_mask::logging::init_logging;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    settings.apply_color();
    if let Err(e) = init_logging(&settings.log_config) {
        eprintln!("{} logging not initialized: {e}", "Warning:".yellow());
    }
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    match subnet_mask::run(&args, settings.show_banner) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_usage() => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::debug!("Aborting: {e:?}");
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
