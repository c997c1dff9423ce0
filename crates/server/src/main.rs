use clap::Parser;
use seatcheck_server::cli::Cli;
use seatcheck_server::logging;
use tracing::error;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = seatcheck_server::run(cli).await {
		error!(target = "seatcheck", error = %err, "server failed");
		std::process::exit(1);
	}
}
