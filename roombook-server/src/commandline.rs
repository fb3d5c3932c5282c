use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::RoombookError;
use crate::server::run_server;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[clap(version, about)]
pub struct Commandline {
	#[clap(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[clap(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Default)]
pub enum BaseCommand {
	/// Run the room booking server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub async fn run(self) -> Result<(), RoombookError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;

		tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::new(&configuration.log_filters))
			.init();

		let base_command = self.command.unwrap_or_default();
		match base_command {
			BaseCommand::Run => {
				let application_context = ApplicationContext::new(configuration).await?;
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{configuration:#?}"),
		}
		Ok(())
	}
}
