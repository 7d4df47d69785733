//! Selection state and change notification.

use std::fmt;

use crate::error::{Error, Result};

/// Callback invoked with the newly selected index.
pub type ChangeCallback = Box<dyn FnMut(usize)>;

/// Holds the selected segment and notifies a listener when it changes.
#[derive(Default)]
pub struct SelectionState {
    selected: Option<usize>,
    on_change: Option<ChangeCallback>,
}

impl SelectionState {
    /// Create a state with an initial selection.
    ///
    /// Establishing the initial state does not notify.
    ///
    /// # Errors
    /// Returns [`Error::SelectionOutOfRange`] if `initial` is not below `count`.
    pub fn new(initial: Option<usize>, count: usize) -> Result<Self> {
        if let Some(index) = initial {
            check_range(index, count)?;
        }
        Ok(Self {
            selected: initial,
            on_change: None,
        })
    }

    /// Currently selected index, `None` when nothing is selected.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Register the change callback, replacing any previous one.
    pub fn on_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Select `index`. Returns whether the selection changed.
    ///
    /// Selecting the current index is a no-op. Any other valid index is
    /// stored and reported to the callback exactly once.
    ///
    /// # Errors
    /// Returns [`Error::SelectionOutOfRange`] if `index` is not below `count`.
    pub fn select(&mut self, index: usize, count: usize) -> Result<bool> {
        check_range(index, count)?;
        if self.selected == Some(index) {
            return Ok(false);
        }
        tracing::debug!("selection changed from {:?} to {}", self.selected, index);
        self.selected = Some(index);
        if let Some(callback) = self.on_change.as_mut() {
            callback(index);
        }
        Ok(true)
    }

    /// Drop the selection. Returns whether anything was selected.
    ///
    /// The callback is not invoked since there is no index to report.
    pub fn clear(&mut self) -> bool {
        if self.selected.take().is_some() {
            tracing::debug!("selection cleared");
            true
        } else {
            false
        }
    }

    /// Replace the selection without notifying, keeping the callback.
    ///
    /// # Errors
    /// Returns [`Error::SelectionOutOfRange`] if `initial` is not below `count`.
    pub(crate) fn reset(&mut self, initial: Option<usize>, count: usize) -> Result<()> {
        if let Some(index) = initial {
            check_range(index, count)?;
        }
        self.selected = initial;
        Ok(())
    }

    /// Clear the selection if it no longer fits within `count` segments.
    pub(crate) fn truncate(&mut self, count: usize) -> bool {
        match self.selected {
            Some(index) if index >= count => self.clear(),
            _ => false,
        }
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("selected", &self.selected)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

fn check_range(index: usize, count: usize) -> Result<()> {
    if index < count {
        Ok(())
    } else {
        Err(Error::SelectionOutOfRange { index, count })
    }
}
