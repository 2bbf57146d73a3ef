//! Masonry layout engine for the café gallery.
//!
//! - [`layout`] computes tile placements and resolves breakpoints.
//! - [`gallery`] keeps a layout up to date as the container, viewport and items change.
//! - [`animation`] plans how tiles move between layouts.
//! - [`lightbox`] holds the selection shown in the full-screen overlay.

pub mod animation;
pub mod cli;
pub mod gallery;
pub mod layout;
pub mod lightbox;
pub mod observer;
