//! The segmented control - owns content, configuration and state.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::text::Line;

use crate::config::ControlConfig;
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::hit_test;
use crate::layout::{LayoutCalculator, SegmentLayout, SegmentMeasure};
use crate::render::{Scene, SceneBuilder};
use crate::segment::{SegmentContent, SegmentImage};
use crate::selection::SelectionState;
use crate::text::{CellMeasure, TextMeasure, TitleFormatter, TitleStyler};

/// Cells scrolled per wheel notch.
const SCROLL_STEP: f32 = 3.0;

/// A horizontal strip of selectable segments.
///
/// Configuration changes made through [`config_mut`](Self::config_mut) take
/// effect after [`invalidate_layout`](Self::invalidate_layout) (geometry and
/// drawing) or [`invalidate_draw`](Self::invalidate_draw) (drawing only).
/// Content, bounds and selection setters recompute on their own.
pub struct SegmentedControl {
    content: SegmentContent,
    config: ControlConfig,
    formatter: Option<TitleFormatter>,
    text_measure: Box<dyn TextMeasure>,
    bounds: Size,
    selection: SelectionState,
    scroll_offset: f32,
    layout: SegmentLayout,
    scene: Scene,
}

impl SegmentedControl {
    /// Create a control with the first segment selected.
    ///
    /// # Errors
    /// Returns an error if the content is empty, the content lists are
    /// inconsistent or the configuration has out-of-range values.
    pub fn new(content: SegmentContent, config: ControlConfig) -> Result<Self> {
        content.validate()?;
        config.validate()?;
        let selection = SelectionState::new(Some(0), content.len())?;

        let mut control = Self {
            content,
            config,
            formatter: None,
            text_measure: Box::new(CellMeasure),
            bounds: Size::default(),
            selection,
            scroll_offset: 0.0,
            layout: SegmentLayout::default(),
            scene: Scene::default(),
        };
        control.relayout();
        Ok(control)
    }

    /// Create a title-only control with the default configuration.
    ///
    /// # Errors
    /// See [`SegmentedControl::new`].
    pub fn with_titles<I, S>(titles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SegmentContent::text(titles), ControlConfig::default())
    }

    /// Create an image-only control with the default configuration.
    ///
    /// # Errors
    /// See [`SegmentedControl::new`].
    pub fn with_images(
        images: Vec<SegmentImage>,
        selected_images: Vec<SegmentImage>,
    ) -> Result<Self> {
        Self::new(
            SegmentContent::images(images, selected_images),
            ControlConfig::default(),
        )
    }

    /// Create a combined title and image control with the default
    /// configuration.
    ///
    /// # Errors
    /// See [`SegmentedControl::new`].
    pub fn with_titles_and_images<I, S>(
        titles: I,
        images: Vec<SegmentImage>,
        selected_images: Vec<SegmentImage>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            SegmentContent::text_images(titles, images, selected_images),
            ControlConfig::default(),
        )
    }

    /// Select the initial segment, or none. Does not notify.
    ///
    /// # Errors
    /// Returns an error if the index is out of range.
    pub fn with_initial_selection(mut self, index: Option<usize>) -> Result<Self> {
        self.selection.reset(index, self.content.len())?;
        self.relayout();
        Ok(self)
    }

    /// Current content.
    #[must_use]
    pub fn content(&self) -> &SegmentContent {
        &self.content
    }

    /// Replace the content.
    ///
    /// A selection past the new segment count is cleared.
    ///
    /// # Errors
    /// Returns an error if the content is empty or its lists are
    /// inconsistent; the previous content is kept.
    pub fn set_content(&mut self, content: SegmentContent) -> Result<()> {
        content.validate()?;
        self.content = content;
        self.selection.truncate(self.content.len());
        self.relayout();
        Ok(())
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Mutable configuration; call an invalidate method afterwards.
    pub fn config_mut(&mut self) -> &mut ControlConfig {
        &mut self.config
    }

    /// Revalidate and recompute geometry, then redraw.
    ///
    /// # Errors
    /// Returns an error if the content or configuration is invalid.
    pub fn invalidate_layout(&mut self) -> Result<()> {
        self.content.validate()?;
        self.config.validate()?;
        self.relayout();
        Ok(())
    }

    /// Rebuild the scene from the current geometry.
    pub fn invalidate_draw(&mut self) {
        let styler = TitleStyler::new(&self.config, self.formatter.as_ref());
        let measure = SegmentMeasure::new(
            &self.content,
            styler,
            self.text_measure.as_ref(),
            self.selection.selected(),
        );
        self.scene = SceneBuilder::new(
            &self.config,
            &measure,
            &self.layout,
            self.selection.selected(),
        )
        .build();
    }

    /// Install a custom title formatter.
    pub fn set_title_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&ControlConfig, &str, usize, bool) -> Line<'static> + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self.relayout();
    }

    /// Return to the configured title styles.
    pub fn clear_title_formatter(&mut self) {
        self.formatter = None;
        self.relayout();
    }

    /// Replace the text measurer.
    pub fn set_text_measure(&mut self, measure: impl TextMeasure + 'static) {
        self.text_measure = Box::new(measure);
        self.relayout();
    }

    /// Current bounds.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Resize the control.
    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.relayout();
    }

    /// Resize the control to a terminal area.
    pub fn set_area(&mut self, area: ratatui::layout::Rect) {
        self.set_bounds(Size::from(area));
    }

    /// Register the selection-changed callback.
    pub fn on_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.selection.on_change(callback);
    }

    /// Currently selected segment.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// Select a segment programmatically.
    ///
    /// Selecting the current segment does nothing. Otherwise the callback is
    /// invoked, the strip scrolls to the segment and the control redraws.
    ///
    /// # Errors
    /// Returns an error if the index is out of range.
    pub fn set_selected(&mut self, index: usize) -> Result<()> {
        if self.selection.select(index, self.content.len())? {
            self.relayout();
            self.scroll_to_selected();
        }
        Ok(())
    }

    /// Remove the selection and its indicator.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.relayout();
        }
    }

    /// Select the following segment. Returns whether the selection changed.
    pub fn select_next(&mut self) -> bool {
        let count = self.content.len();
        let next = self
            .selected()
            .map_or(0, |i| (i + 1).min(count.saturating_sub(1)));
        self.select_clamped(next)
    }

    /// Select the preceding segment. Returns whether the selection changed.
    pub fn select_prev(&mut self) -> bool {
        let prev = self.selected().map_or(0, |i| i.saturating_sub(1));
        self.select_clamped(prev)
    }

    fn select_clamped(&mut self, index: usize) -> bool {
        let before = self.selected();
        if self.set_selected(index).is_err() {
            return false;
        }
        before != self.selected()
    }

    /// Handle a pointer release at `point` (control coordinates).
    ///
    /// Returns whether the selection changed.
    pub fn handle_pointer_up(&mut self, point: Point) -> bool {
        if !self.config.touch_enabled {
            return false;
        }
        let Some(index) = hit_test::segment_at(
            point,
            self.bounds,
            self.config.hit_insets,
            self.scroll_offset,
            &self.layout,
        ) else {
            return false;
        };
        if self.selected() == Some(index) {
            return false;
        }
        self.set_selected(index).is_ok()
    }

    /// Handle a mouse event for a control drawn in `area`.
    ///
    /// Left-button releases select; wheel events scroll the strip when
    /// dragging is enabled. Returns whether the control changed.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: ratatui::layout::Rect) -> bool {
        match event.kind {
            MouseEventKind::Up(MouseButton::Left) => {
                // Cell centers never sit on a segment boundary.
                let point = Point::new(
                    f32::from(event.column) - f32::from(area.x) + 0.5,
                    f32::from(event.row) - f32::from(area.y) + 0.5,
                );
                self.handle_pointer_up(point)
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp if is_over(event, area) => {
                self.user_scroll(-SCROLL_STEP)
            }
            MouseEventKind::ScrollRight | MouseEventKind::ScrollDown if is_over(event, area) => {
                self.user_scroll(SCROLL_STEP)
            }
            _ => false,
        }
    }

    /// Handle a key press. Returns whether the selection changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.select_prev(),
            KeyCode::Right => self.select_next(),
            KeyCode::Home => self.select_clamped(0),
            KeyCode::End => {
                let last = self.content.len().saturating_sub(1);
                self.select_clamped(last)
            }
            _ => false,
        }
    }

    fn user_scroll(&mut self, delta: f32) -> bool {
        if !self.config.user_draggable {
            return false;
        }
        let before = self.scroll_offset;
        self.scroll_by(delta);
        (before - self.scroll_offset).abs() > f32::EPSILON
    }

    /// Horizontal scroll offset of the strip.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f32 {
        (self.layout.content_width() - self.bounds.width).max(0.0)
    }

    /// Scroll to an absolute offset, clamped to the valid range.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll_offset());
    }

    /// Scroll by a relative amount, clamped to the valid range.
    pub fn scroll_by(&mut self, delta: f32) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Scroll so the selected segment is centered, as far as the range allows.
    pub fn scroll_to_selected(&mut self) {
        let Some(segment) = self
            .selected()
            .and_then(|index| self.layout.segment_rect(index))
        else {
            return;
        };
        let pad = (self.bounds.width - segment.width) / 2.0;
        let target = Rect::new(segment.x - pad, 0.0, segment.width + pad * 2.0, 0.0);

        let view_width = self.bounds.width;
        let mut offset = self.scroll_offset;
        if target.x < offset || target.width >= view_width {
            offset = target.x;
        } else if target.right() > offset + view_width {
            offset = target.right() - view_width;
        }
        self.set_scroll_offset(offset);
    }

    /// Last computed geometry.
    #[must_use]
    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    /// Last built scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.content.len()
    }

    /// Total scrollable width.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.layout.content_width()
    }

    /// Recompute geometry and redraw. Title sizes depend on the selection,
    /// so this also runs on selection changes.
    fn relayout(&mut self) {
        let styler = TitleStyler::new(&self.config, self.formatter.as_ref());
        let measure = SegmentMeasure::new(
            &self.content,
            styler,
            self.text_measure.as_ref(),
            self.selection.selected(),
        );
        self.layout = LayoutCalculator::calculate(&self.config, &measure, self.bounds);
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll_offset());
        self.invalidate_draw();
    }
}

fn is_over(event: MouseEvent, area: ratatui::layout::Rect) -> bool {
    area.contains(ratatui::layout::Position::new(event.column, event.row))
}

impl std::fmt::Debug for SegmentedControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedControl")
            .field("content", &self.content)
            .field("bounds", &self.bounds)
            .field("selection", &self.selection)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}
