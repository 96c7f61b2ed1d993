//! Embedded API documentation UI for `poem` applications.
//!
//! [`DocsEndpoint`] serves a bundled single-page application that renders an
//! API specification document, alongside the document itself and a small
//! configuration document the UI reads on startup.
//!
//! ```no_run
//! use docs_ui::{Config, DocsEndpoint};
//! use poem::Route;
//!
//! let app = DocsEndpoint::new(Config {
//!     title: "Example API".to_string(),
//!     ..Config::default()
//! })
//! .register(Route::new());
//! ```

pub mod assets;
pub mod config;
mod endpoint;
pub mod generate;
mod static_files;
pub mod theme;
mod ui_config;

pub use assets::{AssetSource, MemoryAssets, ThemeAssets};
pub use config::{Config, Environment, GeneratorConfig, Header};
pub use endpoint::DocsEndpoint;
pub use theme::Theme;
