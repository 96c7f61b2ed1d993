//! The `/config.json` document read by the UI on startup.

use bytes::Bytes;
use serde::Serialize;
use tracing::error;

use crate::{
    config::{Config, Environment, Header},
    theme::Theme,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UiConfig<'a> {
    title: &'a str,
    description: &'a str,
    version: &'a str,
    enable_debug: bool,
    dark_mode: bool,
    global_headers: &'a [Header],
    default_theme: Theme,
    themes: [Theme; 3],
    ui_version: &'static str,
    logo: &'a str,
    logo_link: &'a str,
    environments: &'a [Environment],
}

impl<'a> From<&'a Config> for UiConfig<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            title: &config.title,
            description: &config.description,
            version: &config.version,
            enable_debug: config.enable_debug,
            dark_mode: config.dark_mode,
            global_headers: &config.global_headers,
            default_theme: config.default_theme(),
            themes: Theme::ALL,
            ui_version: env!("CARGO_PKG_VERSION"),
            logo: &config.logo,
            logo_link: &config.logo_link,
            environments: &config.environments,
        }
    }
}

/// Renders the UI configuration document.
///
/// Serialization of this document cannot fail for any `Config`; should it
/// ever do so the UI receives an empty object and runs on its own defaults.
pub(crate) fn render(config: &Config) -> Bytes {
    match serde_json::to_vec(&UiConfig::from(config)) {
        Ok(json) => Bytes::from(json),
        Err(e) => {
            error!("Error rendering UI configuration: {e:?}");
            Bytes::from_static(b"{}")
        }
    }
}
