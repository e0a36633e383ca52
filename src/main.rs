use ankipix::{
    cli::CliCommand,
    logging,
};

#[tokio::main]
async fn main() {
    // File logging when the data dir is writable, stderr otherwise.
    if logging::init().is_err() {
        logging::init_stderr();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("ankipix error: {:#}", err);
        std::process::exit(1);
    }
}
