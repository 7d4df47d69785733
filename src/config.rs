//! Style and behavior options for a segmented control.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Borders,
};

use crate::error::{Error, Result};
use crate::geometry::EdgeInsets;
use crate::segment::ContentKind;

/// Shape of the selection indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorStyle {
    /// Stripe as wide as the selected title (or image).
    #[default]
    TextWidth,
    /// Stripe spanning the whole selected segment.
    FullWidth,
    /// Translucent box filling the selected segment, drawn behind content.
    Box,
    /// Small triangle centered on the selected segment.
    Arrow,
}

/// Edge the selection indicator is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorPlacement {
    /// Along the top edge.
    #[default]
    Top,
    /// Along the bottom edge.
    Bottom,
    /// Not drawn; thickness collapses to zero.
    None,
}

/// Rule for sizing segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// All segments share the widest requirement.
    #[default]
    Fixed,
    /// Each segment is sized to its own content.
    Dynamic,
}

/// Configuration for a segmented control.
#[derive(Clone, Debug)]
pub struct ControlConfig {
    /// Indicator shape.
    pub indicator_style: IndicatorStyle,
    /// Indicator anchor edge.
    pub indicator_placement: IndicatorPlacement,
    /// Requested width policy (image-only content always lays out fixed).
    pub width_policy: WidthPolicy,
    /// Indicator thickness.
    pub indicator_thickness: f32,
    /// Border stroke thickness.
    pub border_thickness: f32,
    /// Divider width.
    pub divider_width: f32,
    /// Opacity of the box indicator fill (0.0 to 1.0).
    pub box_opacity: f32,
    /// Padding added around each segment's content.
    pub segment_insets: EdgeInsets,
    /// Insets applied to the indicator frame.
    pub indicator_insets: EdgeInsets,
    /// Extra margin around the control that still counts as a tap.
    pub hit_insets: EdgeInsets,
    /// Which edges of each segment get a border.
    pub borders: Borders,
    /// Whether vertical dividers are drawn between segments.
    pub dividers: bool,
    /// Indicator color.
    pub indicator_color: Color,
    /// Box indicator color; falls back to the indicator color.
    pub box_color: Option<Color>,
    /// Divider color.
    pub divider_color: Color,
    /// Border color.
    pub border_color: Color,
    /// Segment background color.
    pub background_color: Color,
    /// Title attributes for unselected segments.
    pub title_style: Style,
    /// Title attributes for the selected segment.
    pub selected_title_style: Style,
    /// Whether pointer-up events select segments.
    pub touch_enabled: bool,
    /// Whether the strip scrolls on wheel input.
    pub user_draggable: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            indicator_style: IndicatorStyle::default(),
            indicator_placement: IndicatorPlacement::default(),
            width_policy: WidthPolicy::default(),
            indicator_thickness: 1.0,
            border_thickness: 1.0,
            divider_width: 1.0,
            box_opacity: 0.2,
            segment_insets: EdgeInsets::horizontal_only(1.0, 1.0),
            indicator_insets: EdgeInsets::ZERO,
            hit_insets: EdgeInsets::ZERO,
            borders: Borders::NONE,
            dividers: false,
            indicator_color: Color::Rgb(52, 181, 229),
            box_color: None,
            divider_color: Color::Black,
            border_color: Color::Black,
            background_color: Color::Reset,
            title_style: Style::default().fg(Color::White),
            selected_title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            touch_enabled: true,
            user_draggable: true,
        }
    }
}

impl ControlConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indicator style.
    #[must_use]
    pub fn indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }

    /// Set the indicator placement.
    #[must_use]
    pub fn indicator_placement(mut self, placement: IndicatorPlacement) -> Self {
        self.indicator_placement = placement;
        self
    }

    /// Set the width policy.
    #[must_use]
    pub fn width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }

    /// Set the indicator thickness.
    #[must_use]
    pub fn indicator_thickness(mut self, thickness: f32) -> Self {
        self.indicator_thickness = thickness;
        self
    }

    /// Set the border thickness.
    #[must_use]
    pub fn border_thickness(mut self, thickness: f32) -> Self {
        self.border_thickness = thickness;
        self
    }

    /// Set the divider width.
    #[must_use]
    pub fn divider_width(mut self, width: f32) -> Self {
        self.divider_width = width;
        self
    }

    /// Set the box indicator opacity.
    #[must_use]
    pub fn box_opacity(mut self, opacity: f32) -> Self {
        self.box_opacity = opacity;
        self
    }

    /// Set the per-segment content insets.
    #[must_use]
    pub fn segment_insets(mut self, insets: EdgeInsets) -> Self {
        self.segment_insets = insets;
        self
    }

    /// Set the indicator insets.
    #[must_use]
    pub fn indicator_insets(mut self, insets: EdgeInsets) -> Self {
        self.indicator_insets = insets;
        self
    }

    /// Set the enlarged hit area.
    #[must_use]
    pub fn hit_insets(mut self, insets: EdgeInsets) -> Self {
        self.hit_insets = insets;
        self
    }

    /// Set the bordered edges.
    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Enable or disable vertical dividers.
    #[must_use]
    pub fn dividers(mut self, enabled: bool) -> Self {
        self.dividers = enabled;
        self
    }

    /// Set the indicator color.
    #[must_use]
    pub fn indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = color;
        self
    }

    /// Set the box indicator color.
    #[must_use]
    pub fn box_color(mut self, color: Color) -> Self {
        self.box_color = Some(color);
        self
    }

    /// Set the divider color.
    #[must_use]
    pub fn divider_color(mut self, color: Color) -> Self {
        self.divider_color = color;
        self
    }

    /// Set the border color.
    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set the segment background color.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the unselected title style.
    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Set the selected title style.
    #[must_use]
    pub fn selected_title_style(mut self, style: Style) -> Self {
        self.selected_title_style = style;
        self
    }

    /// Enable or disable selection by pointer.
    #[must_use]
    pub fn touch_enabled(mut self, enabled: bool) -> Self {
        self.touch_enabled = enabled;
        self
    }

    /// Enable or disable wheel scrolling.
    #[must_use]
    pub fn user_draggable(mut self, enabled: bool) -> Self {
        self.user_draggable = enabled;
        self
    }

    /// Indicator thickness actually used; zero when the indicator is hidden.
    #[must_use]
    pub fn effective_indicator_thickness(&self) -> f32 {
        match self.indicator_placement {
            IndicatorPlacement::None => 0.0,
            IndicatorPlacement::Top | IndicatorPlacement::Bottom => self.indicator_thickness,
        }
    }

    /// Width policy actually used for the given content.
    #[must_use]
    pub fn effective_width_policy(&self, kind: ContentKind) -> WidthPolicy {
        match kind {
            ContentKind::Images => WidthPolicy::Fixed,
            ContentKind::Text | ContentKind::TextImages => self.width_policy,
        }
    }

    /// Box indicator color, defaulting to the indicator color.
    #[must_use]
    pub fn effective_box_color(&self) -> Color {
        self.box_color.unwrap_or(self.indicator_color)
    }

    /// Check numeric options are within range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for negative thicknesses or an opacity
    /// outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("indicator thickness", self.indicator_thickness),
            ("border thickness", self.border_thickness),
            ("divider width", self.divider_width),
        ];
        for (name, value) in lengths {
            if value.is_nan() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.box_opacity) {
            return Err(Error::InvalidConfig(format!(
                "box opacity must be within 0..=1, got {}",
                self.box_opacity
            )));
        }
        Ok(())
    }
}
