//! Configuration for the café gallery.
//!
//! The config is a KDL document with three kinds of top-level nodes: `layout` (gap, breakpoints),
//! `animations` (entrance and transition parameters) and any number of `item` nodes making up the
//! gallery catalog. Every section has defaults, so an empty document is a valid config with no
//! items.

use std::ffi::OsStr;
use std::path::Path;

use miette::{Context as _, IntoDiagnostic as _};
use tracing::debug;

pub mod animations;
pub mod item;
pub mod layout;

pub use crate::animations::{Animations, Curve, EntranceAnim, TransitionAnim};
pub use crate::item::{Item, ItemId};
pub use crate::layout::{Breakpoint, Columns, Layout};

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub layout: Layout,
    #[knuffel(child, default)]
    pub animations: Animations,
    #[knuffel(children(name = "item"))]
    pub items: Vec<Item>,
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("config.kdl");
        let config = Self::parse(filename, &contents).context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        let _span = tracy_client::span!("Config::parse");
        knuffel::parse(filename, text)
    }

    /// Looks up an item by its id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.0 == id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::parse(
            "default-config.kdl",
            include_str!("../../resources/default-config.kdl"),
        )
        .unwrap()
    }
}
