//! Gallery view-model.
//!
//! The gallery ties the layout engine to the outside world. It keeps the latest inputs the layout
//! depends on (item list, measured container width, column count resolved from the viewport, gap)
//! and re-flows synchronously whenever one of them actually changes. Each re-flow replaces the
//! layout wholesale and plans the animation that takes tiles from their previous placements to
//! the new ones.
//!
//! The host environment delivers container and viewport changes through [`Observer`]s. A gallery
//! attaches to them with [`Gallery::attach`], holding only a weak reference to itself in the
//! callbacks, and detaches with [`Attachment::detach`].

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::animation::AnimationPlan;
use crate::layout::{self, LayoutError, MasonryLayout, Options};
use crate::lightbox::{Lightbox, LightboxError};
use crate::observer::{Observer, SubscriptionId};

mod item;

pub use self::item::{items_from_config, GalleryItem};

/// The gallery container was measured with a new size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerResize {
    pub width: f64,
    pub height: f64,
}

/// The viewport changed width, possibly crossing a breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChange {
    pub width: f64,
}

/// Everything the last layout was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutInputs {
    container_width: f64,
    column_count: usize,
    gap: f64,
    items_generation: u64,
}

#[derive(Debug)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    /// Bumped on every item list replacement.
    items_generation: u64,
    options: Rc<Options>,
    /// Last measured container width. Zero until the first measurement.
    container_width: f64,
    /// Last known viewport width, if any was reported.
    viewport_width: Option<f64>,
    /// Column count resolved from the viewport width.
    column_count: usize,
    /// Current layout.
    layout: MasonryLayout<String>,
    /// Inputs of the current layout.
    inputs: Option<LayoutInputs>,
    /// Last non-empty layout, which is what is on screen.
    on_screen: MasonryLayout<String>,
    /// Whether a non-empty layout was produced before.
    ///
    /// Decides between the entrance and the transition animation.
    has_laid_out: bool,
    /// Animation for the latest layout, until the view takes it.
    animation: Option<AnimationPlan<String>>,
    lightbox: Lightbox,
}

/// Subscriptions of an attached gallery.
#[derive(Debug)]
#[must_use = "dropping an attachment keeps the gallery subscribed"]
pub struct Attachment {
    resize: SubscriptionId,
    viewport: SubscriptionId,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>, options: Rc<Options>) -> Result<Self, LayoutError> {
        let column_count = options.breakpoints.default_columns();
        layout::validate(&items, column_count, options.gap)?;

        let mut gallery = Self {
            lightbox: Lightbox::new(items.len()),
            items,
            items_generation: 0,
            container_width: 0.,
            viewport_width: None,
            column_count,
            layout: MasonryLayout::empty(column_count, options.gap),
            inputs: None,
            on_screen: MasonryLayout::empty(column_count, options.gap),
            has_laid_out: false,
            animation: None,
            options,
        };
        gallery.relayout()?;
        Ok(gallery)
    }

    /// Subscribes the gallery to container and viewport notifications.
    pub fn attach(
        gallery: &Rc<RefCell<Self>>,
        resize: &mut Observer<ContainerResize>,
        viewport: &mut Observer<ViewportChange>,
    ) -> Attachment {
        let weak = Rc::downgrade(gallery);
        let resize = resize.register(move |event: &ContainerResize| {
            let Some(gallery) = weak.upgrade() else {
                return;
            };
            let result = gallery.borrow_mut().on_container_resize(event.width);
            if let Err(err) = result {
                warn!("error re-flowing gallery after container resize: {err}");
            }
        });

        let weak = Rc::downgrade(gallery);
        let viewport = viewport.register(move |event: &ViewportChange| {
            let Some(gallery) = weak.upgrade() else {
                return;
            };
            let result = gallery.borrow_mut().on_viewport_change(event.width);
            if let Err(err) = result {
                warn!("error re-flowing gallery after viewport change: {err}");
            }
        });

        Attachment { resize, viewport }
    }

    /// Handles a new container measurement. Returns whether the layout changed.
    pub fn on_container_resize(&mut self, width: f64) -> Result<bool, LayoutError> {
        trace!("container resized to {width}");
        self.container_width = width;
        self.relayout()
    }

    /// Handles a new viewport width. Returns whether the layout changed.
    pub fn on_viewport_change(&mut self, width: f64) -> Result<bool, LayoutError> {
        self.viewport_width = Some(width);

        let column_count = self.options.breakpoints.columns_for(width);
        if column_count != self.column_count {
            debug!("viewport width {width} switches to {column_count} columns");
            self.column_count = column_count;
        }

        self.relayout()
    }

    /// Replaces the item list.
    ///
    /// The new items are validated first; on error the gallery keeps its current items.
    pub fn replace_items(&mut self, items: Vec<GalleryItem>) -> Result<bool, LayoutError> {
        layout::validate(&items, self.column_count, self.options.gap)?;

        debug!("replacing {} gallery items with {}", self.items.len(), items.len());
        self.lightbox.set_len(items.len());
        self.items = items;
        self.items_generation += 1;
        self.relayout()
    }

    /// Applies new options, re-resolving the column count for the last known viewport.
    pub fn update_options(&mut self, options: Rc<Options>) -> Result<bool, LayoutError> {
        let column_count = match self.viewport_width {
            Some(width) => options.breakpoints.columns_for(width),
            None => options.breakpoints.default_columns(),
        };
        layout::validate(&self.items, column_count, options.gap)?;

        self.column_count = column_count;
        self.options = options;
        self.relayout()
    }

    fn relayout(&mut self) -> Result<bool, LayoutError> {
        let inputs = LayoutInputs {
            container_width: self.container_width,
            column_count: self.column_count,
            gap: self.options.gap,
            items_generation: self.items_generation,
        };

        if self.inputs == Some(inputs) {
            return Ok(false);
        }

        let _span = tracy_client::span!("Gallery::relayout");

        let layout = layout::compute(
            &self.items,
            inputs.container_width,
            inputs.column_count,
            inputs.gap,
        )?;
        self.inputs = Some(inputs);

        debug!(
            "re-flowed {} tiles into {} columns, height {}",
            layout.len(),
            inputs.column_count,
            layout.total_height(),
        );

        if layout.is_empty() {
            // Nothing to animate until the container has room again.
            self.animation = None;
        } else {
            self.animation = Some(AnimationPlan::new(
                &layout,
                &self.on_screen,
                self.has_laid_out,
                &self.options.animations,
            ));
            self.has_laid_out = true;
            self.on_screen = layout.clone();
        }

        self.layout = layout;
        Ok(true)
    }

    pub fn layout(&self) -> &MasonryLayout<String> {
        &self.layout
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn options(&self) -> &Rc<Options> {
        &self.options
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn has_laid_out(&self) -> bool {
        self.has_laid_out
    }

    /// Height the container should take on the page.
    pub fn container_height(&self) -> f64 {
        if self.layout.is_empty() {
            self.options.placeholder_height
        } else {
            self.layout.total_height()
        }
    }

    /// Takes the animation planned for the latest layout.
    pub fn take_animation(&mut self) -> Option<AnimationPlan<String>> {
        self.animation.take()
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Handles a click at a point in container coordinates.
    ///
    /// Returns the index of the item opened in the lightbox, if the click hit a tile.
    pub fn click_at(&mut self, x: f64, y: f64) -> Option<usize> {
        let index = self.layout.index_under(x, y)?;
        self.click_index(index).ok()?;
        Some(index)
    }

    /// Handles a click on the tile of the item with the given index.
    pub fn click_index(&mut self, index: usize) -> Result<(), LightboxError> {
        self.lightbox.select(index)?;
        trace!("lightbox opened on item {index}");
        Ok(())
    }

    /// Closes the lightbox.
    pub fn dismiss(&mut self) -> Option<usize> {
        self.lightbox.dismiss()
    }

    pub fn selected_item(&self) -> Option<&GalleryItem> {
        self.lightbox.selected_item(&self.items)
    }
}

impl Attachment {
    pub fn detach(
        self,
        resize: &mut Observer<ContainerResize>,
        viewport: &mut Observer<ViewportChange>,
    ) {
        resize.unregister(self.resize);
        viewport.unregister(self.viewport);
    }
}
