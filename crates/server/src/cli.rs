//! Command-line surface.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "seatcheck")]
#[command(about = "Course enrollment vacancy checker")]
#[command(version)]
pub struct Cli {
	/// Listen port
	#[arg(short, long, env = "PORT", default_value_t = 5000)]
	pub port: u16,

	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}
