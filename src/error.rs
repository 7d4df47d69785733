//! Error types for the segmenta crate.

use thiserror::Error;

/// Result type alias using segmenta's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a segmented control.
///
/// These are raised at construction or configuration time. Hit testing never
/// fails: an ambiguous tap is simply not a hit.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Title and image lists differ in length for text+image content.
    #[error("content mismatch: {titles} titles but {images} images")]
    ContentMismatch {
        /// Number of titles supplied.
        titles: usize,
        /// Number of images supplied.
        images: usize,
    },

    /// The active content kind supplied no segments.
    #[error("content has no segments")]
    EmptyContent,

    /// More selected-state images than segments.
    #[error("{selected} selected images supplied for {images} images")]
    TooManySelectedImages {
        /// Number of unselected images.
        images: usize,
        /// Number of selected images.
        selected: usize,
    },

    /// Selected index outside the segment range.
    #[error("segment index {index} out of range (count {count})")]
    SelectionOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of segments.
        count: usize,
    },

    /// A numeric style option is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
