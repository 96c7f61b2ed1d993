//! Asset trees the documentation UI is served from.
//!
//! The endpoint never reaches for a global file tree; it is handed a
//! [`ThemeAssets`] that maps each [`Theme`] to an [`AssetSource`]. The
//! bundled UI is available through [`ThemeAssets::embedded`], tests inject
//! [`MemoryAssets`].

use std::{borrow::Cow, collections::HashMap, marker::PhantomData, sync::Arc};

use bytes::Bytes;
use rust_embed::RustEmbed;

use crate::theme::Theme;

/// A single file in an asset tree.
#[derive(Clone, Debug)]
pub struct Asset {
    pub data: Bytes,
    /// Strong validator for conditional requests, when the source has one
    pub etag: Option<String>,
}

/// A read-only tree of files addressed by relative, `/`-separated paths.
pub trait AssetSource: Send + Sync + 'static {
    fn get(&self, path: &str) -> Option<Asset>;
}

impl<T: AssetSource + ?Sized> AssetSource for Arc<T> {
    fn get(&self, path: &str) -> Option<Asset> {
        (**self).get(path)
    }
}

/// Files compiled into the binary with `rust_embed`.
pub struct EmbeddedAssets<E>(PhantomData<fn() -> E>);

impl<E> EmbeddedAssets<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for EmbeddedAssets<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RustEmbed + 'static> AssetSource for EmbeddedAssets<E> {
    fn get(&self, path: &str) -> Option<Asset> {
        let file = E::get(path)?;
        let etag = hex::encode(file.metadata.sha256_hash());
        let data = match file.data {
            Cow::Borrowed(data) => Bytes::from_static(data),
            Cow::Owned(data) => Bytes::from(data),
        };

        Some(Asset {
            data,
            etag: Some(format!("\"{etag}\"")),
        })
    }
}

/// An in-memory asset tree.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssets {
    files: HashMap<String, Bytes>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.files.insert(path.into(), data.into());
        self
    }
}

impl AssetSource for MemoryAssets {
    fn get(&self, path: &str) -> Option<Asset> {
        self.files.get(path).map(|data| Asset {
            data: data.clone(),
            etag: None,
        })
    }
}

/// Looks a path up in `primary` first, then in `fallback`.
pub struct Overlay<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Overlay<P, F> {
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: AssetSource, F: AssetSource> AssetSource for Overlay<P, F> {
    fn get(&self, path: &str) -> Option<Asset> {
        self.primary.get(path).or_else(|| self.fallback.get(path))
    }
}

#[derive(RustEmbed)]
#[folder = "ui/shared/"]
struct SharedUi;

#[derive(RustEmbed)]
#[folder = "ui/default/"]
struct DefaultUi;

#[derive(RustEmbed)]
#[folder = "ui/minimal/"]
struct MinimalUi;

#[derive(RustEmbed)]
#[folder = "ui/modern/"]
struct ModernUi;

/// Asset tree per UI theme.
#[derive(Clone, Default)]
pub struct ThemeAssets {
    trees: HashMap<Theme, Arc<dyn AssetSource>>,
}

impl ThemeAssets {
    /// An empty map; every lookup misses until trees are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The UI bundled into this crate: each theme's page overlaid on the
    /// tree of scripts and stylesheets every theme shares.
    pub fn embedded() -> Self {
        let shared = Arc::new(EmbeddedAssets::<SharedUi>::new());

        Self::new()
            .with(
                Theme::Default,
                Overlay::new(EmbeddedAssets::<DefaultUi>::new(), shared.clone()),
            )
            .with(
                Theme::Minimal,
                Overlay::new(EmbeddedAssets::<MinimalUi>::new(), shared.clone()),
            )
            .with(
                Theme::Modern,
                Overlay::new(EmbeddedAssets::<ModernUi>::new(), shared),
            )
    }

    pub fn with(mut self, theme: Theme, source: impl AssetSource) -> Self {
        self.trees.insert(theme, Arc::new(source));
        self
    }

    pub fn get(&self, theme: Theme) -> Option<&dyn AssetSource> {
        self.trees.get(&theme).map(|tree| &**tree)
    }
}
