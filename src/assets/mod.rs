//! Offline asset cache contract.
//!
//! Every skin ships as a static page set that a service worker caches
//! under a single generation name. Bumping the generation is how a
//! release invalidates old copies: on activation, every cache whose name
//! differs from the current generation is deleted.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::games::GameVariant;

/// Name of the current cache generation.
pub const CACHE_GENERATION: &str = "match-games-v1";

/// Files shared by every skin, served from the root.
const SHELL: [&str; 9] = [
    "/home.html",
    "/index.html",
    "/styles.css",
    "/game.js",
    "/sounds.js",
    "/icon.svg",
    "/icon-192.png",
    "/icon-512.png",
    "/manifest.json",
];

/// Page files every skin directory carries.
const SKIN_PAGES: [&str; 4] = ["index.html", "styles.css", "game.js", "sounds.js"];

/// A cache generation and the assets it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Cache name.
    pub generation: String,
    /// Absolute request paths, in install order.
    pub assets: Vec<String>,
}

impl AssetManifest {
    /// Create an empty manifest for a generation.
    #[must_use]
    pub fn new(generation: impl Into<String>) -> Self {
        Self {
            generation: generation.into(),
            assets: Vec::new(),
        }
    }

    /// The manifest for the built-in skins: the root shell, then each
    /// skin's pages and image files.
    pub fn standard() -> Result<Self, ConfigError> {
        let mut manifest = Self::new(CACHE_GENERATION);
        for path in SHELL {
            manifest.push(path);
        }

        for variant in GameVariant::ALL {
            // The root skin's pages are the shell itself
            if variant.slug().is_empty() {
                continue;
            }
            for page in SKIN_PAGES {
                manifest.push(format!("/{}/{}", variant.slug(), page));
            }
            for item in variant.theme()?.iter() {
                if let Some(path) = item.display.image_path() {
                    manifest.push(format!("/{}/{}", variant.slug(), path));
                }
            }
        }

        Ok(manifest)
    }

    /// Add an asset. Duplicates are ignored.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.contains(&path) {
            self.assets.push(path);
        }
    }

    /// Is `path` part of this generation?
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.assets.iter().any(|asset| asset == path)
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Is the manifest empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Cache names that belong to other generations and should be deleted.
    pub fn stale_caches<'a, I>(&self, existing: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        existing
            .into_iter()
            .filter(|name| *name != self.generation)
            .collect()
    }
}
