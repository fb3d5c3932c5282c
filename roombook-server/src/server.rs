use crate::context::ApplicationContext;
use crate::server::rest_api::rest_api;
use aide::openapi::{Info, OpenApi};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub mod rest_api;

const OPENAPI_PATH: &str = "/openapi.json";

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let listener = TcpListener::bind(application_context.configuration.address).await?;
	let address = listener.local_addr()?;
	info!("Starting server at 'http://{address}', API documentation at 'http://{address}{OPENAPI_PATH}'.");

	serve(listener, application_context, shutdown_signal()).await
}

pub async fn serve(
	listener: TcpListener,
	application_context: ApplicationContext,
	shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
	axum::serve(listener, create_router(application_context))
		.with_graceful_shutdown(shutdown)
		.await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	let mut api = OpenApi {
		info: Info {
			title: "Roombook".to_owned(),
			description: Some("Cadastro de salas e reservas sem sobreposição de horários.".to_owned()),
			version: env!("CARGO_PKG_VERSION").to_owned(),
			..Info::default()
		},
		..OpenApi::default()
	};

	rest_api()
		.finish_api(&mut api)
		.route("/", get(|| async { Redirect::to(OPENAPI_PATH) }))
		.route(OPENAPI_PATH, get(openapi_json))
		.layer(Extension(Arc::new(api)))
		.layer(CorsLayer::permissive())
		.with_state(application_context)
}

async fn openapi_json(Extension(api): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
	Json(OpenApi::clone(&api))
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for shutdown signal, running until killed: {error}");
		std::future::pending::<()>().await;
	}
	info!("Shutting down.");
}
