use std::{
    fs::read_to_string,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr},
    path::Path,
};

use docs_ui::{Config, config::Error};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub address: IpAddr,
    pub port: u16,
    /// Serve the document generated from the example API instead of `docs.doc_path`
    pub serve_generated_spec: bool,
    pub docs: Config,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            serve_generated_spec: true,
            docs: Config::default(),
        }
    }
}

impl Settings {
    pub fn read_from_file(path: &Path) -> Result<Self, Error> {
        let content = read_to_string(path)?;
        Ok(toml::from_str::<Self>(&content)?)
    }

    /// Reads `path`, or falls back to the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, Error> {
        match Self::read_from_file(path) {
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                info!("No configuration at `{}`, using defaults", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }
}
