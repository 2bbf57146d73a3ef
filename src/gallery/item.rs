use cafe_gallery_config::Config;
use serde::Serialize;

use crate::layout::LayoutElement;

/// One photo shown in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    /// Stable identifier, unique within the gallery.
    pub id: String,
    pub src: String,
    pub alt: String,
    /// Tile height in logical pixels.
    pub height: f64,
}

impl GalleryItem {
    pub fn new(
        id: impl Into<String>,
        src: impl Into<String>,
        alt: impl Into<String>,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            alt: alt.into(),
            height,
        }
    }
}

impl From<&cafe_gallery_config::Item> for GalleryItem {
    fn from(item: &cafe_gallery_config::Item) -> Self {
        Self {
            id: item.id.0.clone(),
            src: item.src.clone(),
            alt: item.alt.clone(),
            height: f64::from(item.height),
        }
    }
}

impl LayoutElement for GalleryItem {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn intrinsic_height(&self) -> f64 {
        self.height
    }
}

/// Returns the gallery catalog of a config, in config order.
pub fn items_from_config(config: &Config) -> Vec<GalleryItem> {
    config.items.iter().map(GalleryItem::from).collect()
}
