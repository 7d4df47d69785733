//! Segment content - what each segment of the control displays.

use std::sync::Arc;

use ratatui::style::Style;

use crate::error::{Error, Result};
use crate::geometry::Size;

/// Which kind of content the control shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    /// Titles only.
    Text,
    /// Images only.
    Images,
    /// An image stacked above a title in every segment.
    TextImages,
}

/// A small cell-art image used as a segment icon.
///
/// Rows are drawn top to bottom; the intrinsic size is the widest row by the
/// number of rows. Cloning shares the underlying rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentImage {
    rows: Arc<[String]>,
    style: Style,
}

impl SegmentImage {
    /// Create an image from its rows.
    #[must_use]
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            style: Style::default(),
        }
    }

    /// Set the style the image is drawn with.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The image rows.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The draw style.
    #[must_use]
    pub fn draw_style(&self) -> Style {
        self.style
    }

    /// Intrinsic size in cells.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        let width = self
            .rows
            .iter()
            .map(|row| ratatui::text::Line::raw(row.as_str()).width())
            .max()
            .unwrap_or(0);
        Size::new(width as f32, self.rows.len() as f32)
    }
}

/// The ordered content of all segments.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentContent {
    /// Title per segment.
    Text {
        /// Segment titles.
        titles: Vec<String>,
    },
    /// Image per segment, with optional selected-state replacements.
    Images {
        /// Unselected images.
        images: Vec<SegmentImage>,
        /// Images shown when the segment is selected; may be shorter than
        /// `images`.
        selected_images: Vec<SegmentImage>,
    },
    /// Title and image per segment.
    TextImages {
        /// Segment titles.
        titles: Vec<String>,
        /// Unselected images.
        images: Vec<SegmentImage>,
        /// Images shown when the segment is selected; may be shorter than
        /// `images`.
        selected_images: Vec<SegmentImage>,
    },
}

impl SegmentContent {
    /// Title-only content.
    #[must_use]
    pub fn text<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Text {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Image-only content.
    #[must_use]
    pub fn images(images: Vec<SegmentImage>, selected_images: Vec<SegmentImage>) -> Self {
        Self::Images {
            images,
            selected_images,
        }
    }

    /// Combined title and image content.
    #[must_use]
    pub fn text_images<I, S>(
        titles: I,
        images: Vec<SegmentImage>,
        selected_images: Vec<SegmentImage>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::TextImages {
            titles: titles.into_iter().map(Into::into).collect(),
            images,
            selected_images,
        }
    }

    /// The active content kind.
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text { .. } => ContentKind::Text,
            Self::Images { .. } => ContentKind::Images,
            Self::TextImages { .. } => ContentKind::TextImages,
        }
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text { titles } | Self::TextImages { titles, .. } => titles.len(),
            Self::Images { images, .. } => images.len(),
        }
    }

    /// Check if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the lists are non-empty and consistent with each other.
    ///
    /// # Errors
    /// Returns [`Error::ContentMismatch`] when titles and images differ in
    /// count, [`Error::TooManySelectedImages`] when there are more selected
    /// images than images, or [`Error::EmptyContent`] when there are no
    /// segments.
    pub fn validate(&self) -> Result<()> {
        let (images, selected) = match self {
            Self::Text { .. } => return self.check_not_empty(),
            Self::Images {
                images,
                selected_images,
            } => (images, selected_images),
            Self::TextImages {
                titles,
                images,
                selected_images,
            } => {
                if titles.len() != images.len() {
                    return Err(Error::ContentMismatch {
                        titles: titles.len(),
                        images: images.len(),
                    });
                }
                (images, selected_images)
            }
        };
        if selected.len() > images.len() {
            return Err(Error::TooManySelectedImages {
                images: images.len(),
                selected: selected.len(),
            });
        }
        self.check_not_empty()
    }

    fn check_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyContent)
        } else {
            Ok(())
        }
    }

    /// Title of a segment, if this content has titles.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        match self {
            Self::Text { titles } | Self::TextImages { titles, .. } => {
                titles.get(index).map(String::as_str)
            }
            Self::Images { .. } => None,
        }
    }

    /// Image of a segment, if this content has images.
    ///
    /// When `selected` is set the selected-state image is preferred, falling
    /// back to the unselected image when none was supplied for the index.
    #[must_use]
    pub fn image(&self, index: usize, selected: bool) -> Option<&SegmentImage> {
        match self {
            Self::Text { .. } => None,
            Self::Images {
                images,
                selected_images,
            }
            | Self::TextImages {
                images,
                selected_images,
                ..
            } => {
                let replacement = if selected {
                    selected_images.get(index)
                } else {
                    None
                };
                replacement.or_else(|| images.get(index))
            }
        }
    }
}
