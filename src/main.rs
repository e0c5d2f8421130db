use std::env;
use std::path::PathBuf;
use std::process;

use log::{error, info};
use style_hover::css::server::start_style_language_server;
use style_hover::logging;

fn print_usage(program: &str) {
    // Use eprintln for usage info since logger isn't initialized yet
    eprintln!("Usage: {} [--log <file>]", program);
    eprintln!("  Starts the stylesheet hover language server on stdin/stdout.");
    eprintln!("  --log <file>: Write the log to <file> instead of the local app data directory");
}

/// Log file path from the command line, `Err` when the arguments are unusable
fn parse_log_path(args: &[String]) -> Result<Option<PathBuf>, String> {
    let mut log_path = None;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--log" => match rest.next() {
                Some(path) => log_path = Some(PathBuf::from(path)),
                None => return Err("--log requires a file path".to_string()),
            },
            // Editors commonly pass this to language servers
            "--stdio" => {}
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(log_path)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("style_hover");

    let log_path = match parse_log_path(&args) {
        Ok(log_path) => log_path,
        Err(message) => {
            eprintln!("{}", message);
            print_usage(program);
            process::exit(1);
        }
    };

    let log_file = match logging::init_logger(log_path.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            process::exit(1);
        }
    };

    info!("Style Hover starting, logging to {}", log_file.display());
    info!("Command line arguments: {:?}", args);

    if let Err(e) = start_style_language_server().await {
        error!("Language server error: {}", e);
        process::exit(1);
    }

    info!("Style Hover shutting down");
}
