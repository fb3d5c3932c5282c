use crate::commandline::Commandline;
use crate::error::RoombookError;
use clap::Parser;

mod commandline;
mod configuration;
mod context;
mod database;
mod error;
mod reservation;
mod room;
mod server;

#[tokio::main]
async fn main() -> Result<(), RoombookError> {
	let commandline = Commandline::parse();
	commandline.run().await
}
