use crate::context::ApplicationContext;
use crate::server::serve;
use reqwest::redirect::Policy;
use reqwest::{Method, RequestBuilder};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct TestClient {
	shutdown_sender: Option<oneshot::Sender<()>>,
	client: reqwest::Client,
	server_address: SocketAddr,
}

impl TestClient {
	pub async fn new(application_context: ApplicationContext) -> anyhow::Result<Self> {
		// NOTE: port 0 assigns a random available port
		let listener = TcpListener::bind(application_context.configuration.address).await?;
		let server_address = listener.local_addr()?;

		let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();
		tokio::spawn(serve(listener, application_context, async move {
			let _ = shutdown_receiver.await;
		}));

		let client = reqwest::Client::builder()
			.connect_timeout(Duration::from_secs(10))
			.timeout(Duration::from_secs(30))
			.redirect(Policy::none())
			.build()?;

		Ok(Self {
			shutdown_sender: Some(shutdown_sender),
			client,
			server_address,
		})
	}

	pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let base_address = self.server_address;
		let path = path.trim_start_matches('/');
		self.client.request(method, format!("http://{base_address}/{path}"))
	}

	pub fn get(&self, path: &str) -> RequestBuilder {
		self.request(Method::GET, path)
	}

	pub fn post(&self, path: &str) -> RequestBuilder {
		self.request(Method::POST, path)
	}

	pub fn delete(&self, path: &str) -> RequestBuilder {
		self.request(Method::DELETE, path)
	}
}

impl Drop for TestClient {
	fn drop(&mut self) {
		if let Some(shutdown_sender) = self.shutdown_sender.take() {
			let _ = shutdown_sender.send(());
		}
	}
}
