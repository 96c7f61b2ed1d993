//! The documentation endpoint.
//!
//! Routes every request under the base path to one of three places: the
//! specification document, the UI configuration document, or the selected
//! theme's static assets.

use std::path::PathBuf;

use bytes::Bytes;
use poem::{
    Endpoint, IntoResponse, Request, Response, Route,
    error::MethodNotAllowedError,
    http::{Method, StatusCode},
    web::{Json, Redirect},
};
use serde_json::json;
use tracing::warn;

use crate::{assets::ThemeAssets, config::Config, generate, static_files, theme::Theme, ui_config};

const JSON: &str = "application/json";

enum Document {
    Inline(Bytes),
    /// Read on every request, so regenerated documents show up immediately
    File(PathBuf),
}

/// First `theme` value in a query string. Repeated keys keep the first one.
fn requested_theme(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "theme")
        .map(|(_, value)| value.into_owned())
}

/// Serves the documentation UI.
///
/// Immutable after construction; one instance handles all requests
/// concurrently.
pub struct DocsEndpoint {
    base_path: String,
    document: Document,
    default_theme: Theme,
    ui_config: Bytes,
    assets: ThemeAssets,
}

impl DocsEndpoint {
    /// Creates an endpoint serving the UI bundled into this crate.
    pub fn new(config: Config) -> Self {
        Self::with_assets(config, ThemeAssets::embedded())
    }

    /// Creates an endpoint serving the given asset trees.
    ///
    /// When the generator is enabled it runs here, before the endpoint is
    /// returned. Its failures are logged, never returned.
    pub fn with_assets(config: Config, assets: ThemeAssets) -> Self {
        let mut config = config.resolve();

        if config.generator.enabled {
            generate::refresh(&config.generator);
        }

        let document = match config.doc_json.take() {
            Some(json) => Document::Inline(json),
            None => Document::File(config.doc_path.clone()),
        };

        Self {
            ui_config: ui_config::render(&config),
            default_theme: config.default_theme(),
            base_path: config.base_path,
            document,
            assets,
        }
    }

    /// The resolved prefix this endpoint is served under.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Mounts the endpoint on `route` under its base path, including every
    /// sub-path.
    pub fn register(self, route: Route) -> Route {
        let mount = self.base_path.clone();
        route.nest_no_strip(mount, self)
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base_path == "/" {
            return path;
        }
        path.strip_prefix(self.base_path.as_str()).unwrap_or(path)
    }

    async fn document(&self) -> Response {
        let data = match &self.document {
            Document::Inline(json) => json.clone(),
            Document::File(path) => match tokio::fs::read(path).await {
                Ok(data) => Bytes::from(data),
                Err(e) => {
                    warn!("Error reading specification document `{}`: {e}", path.display());
                    return Json(json!({ "error": "swagger.json not found" }))
                        .with_status(StatusCode::NOT_FOUND)
                        .into_response();
                }
            },
        };

        json_response(data)
    }
}

fn json_response(data: Bytes) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .content_type(JSON)
        .body(data)
}

impl Endpoint for DocsEndpoint {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        if !matches!(*req.method(), Method::GET | Method::HEAD) {
            return Err(MethodNotAllowedError.into());
        }

        let path = match urlencoding::decode(req.uri().path()) {
            Ok(decoded) => self.strip_base(&decoded).to_string(),
            Err(_) => return Err(poem::Error::from_status(StatusCode::BAD_REQUEST)),
        };

        // The UI loads its documents by relative URL, so it must live under a
        // trailing slash.
        if path.is_empty() {
            let location = match req.uri().query() {
                Some(query) => format!("{}/?{query}", self.base_path),
                None => format!("{}/", self.base_path),
            };
            return Ok(Redirect::moved_permanent(location).into_response());
        }

        let requested = requested_theme(req.uri().query());
        let theme = Theme::select(requested.as_deref(), self.default_theme);

        match path.as_str() {
            "/swagger.json" | "/api-docs" => Ok(self.document().await),
            "/config.json" => Ok(json_response(self.ui_config.clone())),
            _ => Ok(static_files::serve(self.assets.get(theme), &path, &req)),
        }
    }
}
