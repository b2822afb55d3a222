use bookgrab_core::logging;

mod cli;

use crate::cli::CliCommand;

// Current-thread runtime: windows and file fan-out are joined on one task.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("bookgrab error: {:#}", err);
        std::process::exit(1);
    }
}
