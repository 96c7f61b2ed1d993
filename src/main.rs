mod route;
mod settings;

use std::{net::SocketAddr, path::PathBuf};

use docs_ui::DocsEndpoint;
use poem::{Server, listener::TcpListener};
use tracing::info;

use crate::settings::Settings;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let subscriber = tracing_subscriber::fmt().finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("docs-ui.toml"), PathBuf::from);
    let settings = Settings::load(&path)?;

    let service = route::v1::service();

    let mut docs = settings.docs;
    if settings.serve_generated_spec {
        docs.doc_json = Some(service.spec().into());
    }
    // Runs the generator, if enabled, before the server accepts connections.
    let docs = tokio::task::spawn_blocking(move || DocsEndpoint::new(docs)).await?;
    info!("Serving API documentation under {}", docs.base_path());

    let app = route::route(service, docs);

    let socket = SocketAddr::new(settings.address, settings.port);
    let server = Server::new(TcpListener::bind(socket));

    server.run(app).await?;

    Ok(())
}
