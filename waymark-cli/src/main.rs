//! Entry point for the Waymark command-line interface.
#![forbid(unsafe_code)]

use waymark_cli::CliError;

#[tokio::main]
async fn main() {
    env_logger::init();
    match waymark_cli::run().await {
        Ok(()) => {}
        // Clap renders help, version, and usage errors with its own
        // exit codes and output streams.
        Err(CliError::ArgumentParsing(error)) => error.exit(),
        Err(error) => {
            eprintln!("waymark: {error}");
            std::process::exit(1);
        }
    }
}
