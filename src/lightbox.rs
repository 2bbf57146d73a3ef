//! Lightbox selection state.
//!
//! The lightbox shows one gallery item enlarged on top of the page. Its whole state is an optional
//! index into the item list: tiles report their input index when clicked, never their position,
//! since positions change with every re-flow.

/// Attempt to select an item that doesn't exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("item index {index} is out of range for {len} items")]
pub struct LightboxError {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lightbox {
    /// Index of the shown item, if the lightbox is open.
    selected: Option<usize>,
    /// Number of items that can be selected.
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            selected: None,
            len,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Opens the lightbox on the item with the given index.
    ///
    /// An out-of-range index leaves the state unchanged.
    pub fn select(&mut self, index: usize) -> Result<(), LightboxError> {
        if index >= self.len {
            return Err(LightboxError {
                index,
                len: self.len,
            });
        }

        self.selected = Some(index);
        Ok(())
    }

    /// Closes the lightbox, returning the index that was shown.
    pub fn dismiss(&mut self) -> Option<usize> {
        self.selected.take()
    }

    /// Updates the number of selectable items after the item list was replaced.
    ///
    /// A selection that no longer points at an item is cleared.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.selected.is_some_and(|idx| idx >= len) {
            self.selected = None;
        }
    }

    /// Returns the selected item out of the list the indices refer to.
    pub fn selected_item<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.selected.and_then(|idx| items.get(idx))
    }
}
