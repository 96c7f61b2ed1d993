//! Documentation UI configuration.
//!
//! A [`Config`] is built once, resolved with [`Config::resolve`] and then
//! never mutated, so a single endpoint can serve every request without
//! locking.

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub const DEFAULT_BASE_PATH: &str = "/doc";
pub const DEFAULT_DOC_PATH: &str = "./docs/swagger.json";

/// A header preset in the UI's request tooling, sent with every debug request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    /// Header name, e.g. `Authorization`
    pub key: String,
    /// Header value, e.g. `Bearer xxx`
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named API target the UI can switch between.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Environment {
    /// Display name, e.g. `Production`
    pub name: String,
    /// Base URL prepended to every debug request
    #[serde(rename = "baseUrl", alias = "base_url")]
    pub base_url: String,
}

impl Environment {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }
}

/// Settings for the external documentation generator run at startup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Run the generator when the endpoint is constructed
    pub enabled: bool,
    /// Executable name, looked up on `PATH`
    pub program: String,
    /// Directory searched for annotated sources
    pub search_dir: PathBuf,
    /// Directory the generated documents are written to
    pub output_dir: PathBuf,
    /// Extra arguments appended after the fixed ones
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            program: "swag".to_string(),
            search_dir: PathBuf::from("."),
            output_dir: PathBuf::from("./docs"),
            args: Vec::new(),
        }
    }
}

/// Configuration of the documentation endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Title of the API documentation
    pub title: String,
    /// Description of the API
    pub description: String,
    /// Version of the API
    pub version: String,
    /// Prefix the documentation is mounted under
    pub base_path: String,
    /// Path of the specification document, re-read on every request
    pub doc_path: PathBuf,
    /// Inline specification document; takes precedence over `doc_path`
    #[serde(skip)]
    pub doc_json: Option<Bytes>,
    /// Enables the "try it out" request panel
    pub enable_debug: bool,
    /// Starts the UI in dark mode
    pub dark_mode: bool,
    pub global_headers: Vec<Header>,
    pub generator: GeneratorConfig,
    /// Theme served when a request does not pick a known one
    pub ui_theme: Option<Theme>,
    /// URL or data URI of a custom logo
    pub logo: String,
    /// Link opened when the logo is clicked
    pub logo_link: String,
    pub environments: Vec<Environment>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            description: "API Documentation powered by docs-ui".to_string(),
            version: "1.0.0".to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            doc_path: PathBuf::from(DEFAULT_DOC_PATH),
            doc_json: None,
            enable_debug: true,
            dark_mode: false,
            global_headers: Vec::new(),
            generator: GeneratorConfig::default(),
            ui_theme: None,
            logo: String::new(),
            logo_link: String::new(),
            environments: Vec::new(),
        }
    }
}

impl Config {
    /// Parses a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str::<Self>(content)?)
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Substitutes defaults for every unset field.
    ///
    /// The base path is normalized to start with `/` and carry no trailing
    /// slash; the root path stays `/`.
    pub fn resolve(mut self) -> Self {
        self.base_path = normalize_base_path(&self.base_path);

        if self.doc_path.as_os_str().is_empty() {
            self.doc_path = PathBuf::from(DEFAULT_DOC_PATH);
        }

        self.ui_theme = Some(self.ui_theme.unwrap_or_default());

        let defaults = GeneratorConfig::default();
        let generator = &mut self.generator;
        if generator.program.trim().is_empty() {
            generator.program = defaults.program;
        }
        if generator.search_dir.as_os_str().is_empty() {
            generator.search_dir = defaults.search_dir;
        }
        if generator.output_dir.as_os_str().is_empty() {
            generator.output_dir = defaults.output_dir;
        }

        self
    }

    pub fn default_theme(&self) -> Theme {
        self.ui_theme.unwrap_or_default()
    }
}

fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return DEFAULT_BASE_PATH.to_string();
    }

    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_defaults() {
        let config = Config {
            base_path: String::new(),
            doc_path: PathBuf::new(),
            generator: GeneratorConfig {
                program: " ".to_string(),
                search_dir: PathBuf::new(),
                output_dir: PathBuf::new(),
                ..GeneratorConfig::default()
            },
            ..Config::default()
        }
        .resolve();

        assert_eq!(config.base_path, "/doc");
        assert_eq!(config.doc_path, PathBuf::from("./docs/swagger.json"));
        assert_eq!(config.ui_theme, Some(Theme::Default));
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn resolve_normalizes_base_path() {
        let resolve = |base: &str| {
            Config {
                base_path: base.to_string(),
                ..Config::default()
            }
            .resolve()
            .base_path
        };

        assert_eq!(resolve("/"), "/");
        assert_eq!(resolve("//"), "/");
        assert_eq!(resolve("/docs/"), "/docs");
        assert_eq!(resolve("api/docs"), "/api/docs");
    }

    #[test]
    fn resolve_keeps_configured_theme() {
        let config = Config {
            ui_theme: Some(Theme::Modern),
            ..Config::default()
        }
        .resolve();

        assert_eq!(config.default_theme(), Theme::Modern);
    }

    #[test]
    fn parses_toml() {
        let config = Config::from_toml(
            r#"
            title = "Example API"
            base_path = "/reference"
            ui_theme = "minimal"

            [[global_headers]]
            key = "Authorization"
            value = "Bearer token"

            [[environments]]
            name = "Local"
            base_url = "/api/v1"

            [[environments]]
            name = "Production"
            baseUrl = "https://api.example.com/api/v1"

            [generator]
            enabled = true
            args = ["--parseDependency"]
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Example API");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.ui_theme, Some(Theme::Minimal));
        assert_eq!(
            config.global_headers,
            [Header::new("Authorization", "Bearer token")]
        );
        assert_eq!(
            config.environments,
            [
                Environment::new("Local", "/api/v1"),
                Environment::new("Production", "https://api.example.com/api/v1"),
            ]
        );
        assert!(config.generator.enabled);
        assert_eq!(config.generator.program, "swag");
        assert_eq!(config.generator.args, ["--parseDependency"]);
    }

    #[test]
    fn rejects_unknown_keys_and_themes() {
        assert!(matches!(
            Config::from_toml("titel = \"typo\""),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml("ui_theme = \"neon\""),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Config::read_from_file("/nonexistent/docs-ui.toml"),
            Err(Error::Io(_))
        ));
    }
}
