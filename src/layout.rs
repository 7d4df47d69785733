//! Segment geometry: widths and offsets of every segment.

use ratatui::text::Line;

use crate::config::{ControlConfig, WidthPolicy};
use crate::geometry::{Rect, Size};
use crate::segment::{ContentKind, SegmentContent, SegmentImage};
use crate::text::{TextMeasure, TitleStyler};

/// Measures segment content with the active title styling.
pub struct SegmentMeasure<'a> {
    content: &'a SegmentContent,
    styler: TitleStyler<'a>,
    measure: &'a dyn TextMeasure,
    selected: Option<usize>,
}

impl<'a> SegmentMeasure<'a> {
    /// Create a measurer for the given content and selection.
    #[must_use]
    pub fn new(
        content: &'a SegmentContent,
        styler: TitleStyler<'a>,
        measure: &'a dyn TextMeasure,
        selected: Option<usize>,
    ) -> Self {
        Self {
            content,
            styler,
            measure,
            selected,
        }
    }

    /// The content being measured.
    #[must_use]
    pub fn content(&self) -> &'a SegmentContent {
        self.content
    }

    /// Whether a segment is the selected one.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Styled title for a segment, if the content has titles.
    #[must_use]
    pub fn title_line(&self, index: usize) -> Option<Line<'static>> {
        let title = self.content.title(index)?;
        Some(self.styler.style(title, index, self.is_selected(index)))
    }

    /// Measured title size; zero when the segment has no title.
    #[must_use]
    pub fn title_size(&self, index: usize) -> Size {
        self.title_line(index)
            .map_or_else(Size::default, |line| self.measure.measure(&line))
    }

    /// Image shown for a segment in its current selection state.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&'a SegmentImage> {
        self.content.image(index, self.is_selected(index))
    }

    /// Measured image size; zero when the segment has no image.
    #[must_use]
    pub fn image_size(&self, index: usize) -> Size {
        self.image(index)
            .map_or_else(Size::default, SegmentImage::size)
    }

    /// Width the segment's content needs, excluding insets.
    #[must_use]
    pub fn content_width(&self, index: usize) -> f32 {
        match self.content.kind() {
            ContentKind::Text => self.title_size(index).width,
            ContentKind::Images => self.image_size(index).width,
            ContentKind::TextImages => self
                .title_size(index)
                .width
                .max(self.image_size(index).width),
        }
    }
}

/// Horizontal extent of one segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SegmentFrame {
    /// Offset from the start of the strip.
    pub x: f32,
    /// Segment width.
    pub width: f32,
}

/// Computed geometry for all segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentLayout {
    policy: WidthPolicy,
    segment_width: f32,
    frames: Vec<SegmentFrame>,
    content_width: f32,
    height: f32,
}

impl SegmentLayout {
    /// Width policy the layout was computed with.
    #[must_use]
    pub fn policy(&self) -> WidthPolicy {
        self.policy
    }

    /// Uniform segment width for fixed layouts; the even share of the
    /// bounds for dynamic ones.
    #[must_use]
    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// Total scrollable width of the strip.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Control height the layout was computed for.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the layout has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All segment frames in order.
    #[must_use]
    pub fn frames(&self) -> &[SegmentFrame] {
        &self.frames
    }

    /// Full-height rectangle of a segment.
    #[must_use]
    pub fn segment_rect(&self, index: usize) -> Option<Rect> {
        self.frames
            .get(index)
            .map(|frame| Rect::new(frame.x, 0.0, frame.width, self.height))
    }
}

/// Computes [`SegmentLayout`]s.
pub struct LayoutCalculator;

impl LayoutCalculator {
    /// Lay out all segments within the given bounds.
    ///
    /// Fixed layouts give every segment the larger of an even share of the
    /// bounds and the widest content plus insets. Dynamic layouts size each
    /// segment to its own content plus insets and may overflow the bounds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate(
        config: &ControlConfig,
        measure: &SegmentMeasure<'_>,
        bounds: Size,
    ) -> SegmentLayout {
        let content = measure.content();
        let count = content.len();
        let policy = config.effective_width_policy(content.kind());
        let insets = config.segment_insets.horizontal();

        let even_share = if count > 0 {
            bounds.width / count as f32
        } else {
            0.0
        };

        let (segment_width, frames): (f32, Vec<SegmentFrame>) = match policy {
            WidthPolicy::Fixed => {
                let widest = (0..count)
                    .map(|i| measure.content_width(i) + insets)
                    .fold(even_share, f32::max);
                let frames = (0..count)
                    .map(|i| SegmentFrame {
                        x: widest * i as f32,
                        width: widest,
                    })
                    .collect();
                (widest, frames)
            }
            WidthPolicy::Dynamic => {
                let mut x = 0.0;
                let frames = (0..count)
                    .map(|i| {
                        let width = (measure.content_width(i) + insets).max(0.0);
                        let frame = SegmentFrame { x, width };
                        x += width;
                        frame
                    })
                    .collect();
                (even_share, frames)
            }
        };

        let content_width = match policy {
            WidthPolicy::Fixed => segment_width * count as f32,
            WidthPolicy::Dynamic => frames.iter().map(|f| f.width).sum(),
        };

        tracing::debug!(
            "laid out {} segments ({:?}), content width {}",
            count,
            policy,
            content_width
        );

        SegmentLayout {
            policy,
            segment_width,
            frames,
            content_width,
            height: bounds.height,
        }
    }
}
