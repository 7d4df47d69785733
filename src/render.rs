//! Scene building: the draw primitives for one frame of the control.
//!
//! A [`Scene`] is rebuilt from scratch on every redraw. It has two planes:
//! segment backgrounds and borders at the back, then the content plane with
//! titles, images, dividers and the selection indicator. The box indicator
//! goes to the back of the content plane so titles stay readable on top of
//! it. It still sits above the background plane: terminal cells are opaque,
//! so a box painted first would be hidden by the segment fills, and its tint
//! is instead blended over the fill and border cells beneath it.

use ratatui::{style::Color, text::Line, widgets::Borders};

use crate::config::{ControlConfig, IndicatorPlacement, IndicatorStyle, WidthPolicy};
use crate::geometry::Rect;
use crate::layout::{SegmentLayout, SegmentMeasure};
use crate::segment::{ContentKind, SegmentImage};

/// Stroke width of the box indicator outline.
pub const BOX_BORDER_WIDTH: f32 = 1.0;

/// Edge of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Left edge.
    Left,
    /// Bottom edge.
    Bottom,
    /// Right edge.
    Right,
}

impl Edge {
    const ALL: [(Edge, Borders); 4] = [
        (Edge::Top, Borders::TOP),
        (Edge::Left, Borders::LEFT),
        (Edge::Bottom, Borders::BOTTOM),
        (Edge::Right, Borders::RIGHT),
    ];
}

/// Direction an arrow indicator points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Apex at the top.
    Up,
    /// Apex at the bottom.
    Down,
}

/// What a layer belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerRole {
    /// Segment background.
    Background(usize),
    /// One border edge of a segment.
    Border(usize, Edge),
    /// Segment title.
    Title(usize),
    /// Segment image.
    Image(usize),
    /// Divider on the leading edge of a segment.
    Divider(usize),
    /// The selection indicator.
    Indicator,
}

/// How a layer is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Solid fill.
    Fill {
        /// Fill color.
        color: Color,
    },
    /// Translucent fill with an opaque outline.
    Box {
        /// Fill and outline color.
        color: Color,
        /// Fill opacity (0.0 to 1.0).
        opacity: f32,
        /// Outline stroke width.
        border_width: f32,
    },
    /// Text centered in the frame.
    Title(Line<'static>),
    /// Image placed at the frame origin.
    Image(SegmentImage),
    /// Isosceles triangle filling the frame.
    Arrow {
        /// Where the apex points.
        direction: ArrowDirection,
        /// Fill color.
        color: Color,
    },
}

/// A positioned draw primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// What the layer belongs to.
    pub role: LayerRole,
    /// Frame in strip coordinates.
    pub frame: Rect,
    /// How to paint it.
    pub paint: Paint,
}

impl Layer {
    fn new(role: LayerRole, frame: Rect, paint: Paint) -> Self {
        Self { role, frame, paint }
    }
}

/// The full set of primitives for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    background: Vec<Layer>,
    content: Vec<Layer>,
    width: f32,
    height: f32,
}

impl Scene {
    /// All layers, back to front.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.background.iter().chain(self.content.iter())
    }

    /// Background plane, back to front.
    #[must_use]
    pub fn background(&self) -> &[Layer] {
        &self.background
    }

    /// Content plane, back to front.
    #[must_use]
    pub fn content(&self) -> &[Layer] {
        &self.content
    }

    /// The selection indicator, if something is selected.
    #[must_use]
    pub fn indicator(&self) -> Option<&Layer> {
        self.content
            .iter()
            .find(|layer| layer.role == LayerRole::Indicator)
    }

    /// Layers with the given role.
    pub fn with_role(&self, role: LayerRole) -> impl Iterator<Item = &Layer> {
        self.layers().filter(move |layer| layer.role == role)
    }

    /// Width of the strip the scene covers.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height of the scene.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Total number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.background.len() + self.content.len()
    }

    /// Check if the scene has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds [`Scene`]s from layout and configuration.
pub struct SceneBuilder<'a> {
    config: &'a ControlConfig,
    measure: &'a SegmentMeasure<'a>,
    layout: &'a SegmentLayout,
    selected: Option<usize>,
}

impl<'a> SceneBuilder<'a> {
    /// Create a builder.
    #[must_use]
    pub fn new(
        config: &'a ControlConfig,
        measure: &'a SegmentMeasure<'a>,
        layout: &'a SegmentLayout,
        selected: Option<usize>,
    ) -> Self {
        Self {
            config,
            measure,
            layout,
            selected,
        }
    }

    /// Build the complete scene.
    #[must_use]
    pub fn build(&self) -> Scene {
        let mut scene = Scene {
            width: self.layout.content_width(),
            height: self.layout.height(),
            ..Scene::default()
        };

        for index in 0..self.layout.len() {
            let Some(full) = self.layout.segment_rect(index) else {
                continue;
            };
            self.push_content(&mut scene.content, index, full);

            if self.config.dividers && index > 0 {
                scene.content.push(Layer::new(
                    LayerRole::Divider(index),
                    self.divider_frame(full),
                    Paint::Fill {
                        color: self.config.divider_color,
                    },
                ));
            }

            self.push_background(&mut scene.background, index, full);
        }

        if let Some(indicator) = self.indicator() {
            if matches!(indicator.paint, Paint::Box { .. }) {
                scene.content.insert(0, indicator);
            } else {
                scene.content.push(indicator);
            }
        }

        tracing::trace!("built scene with {} layers", scene.len());
        scene
    }

    fn thickness(&self) -> f32 {
        self.config.effective_indicator_thickness()
    }

    /// Vertical center of the area not covered by the indicator.
    fn content_mid_y(&self) -> f32 {
        let thickness = self.thickness();
        let shift = match self.config.indicator_placement {
            IndicatorPlacement::Top => thickness,
            IndicatorPlacement::Bottom | IndicatorPlacement::None => 0.0,
        };
        (self.layout.height() - thickness) / 2.0 + shift
    }

    fn push_content(&self, layers: &mut Vec<Layer>, index: usize, full: Rect) {
        let mid_x = full.mid_x();
        let mid_y = self.content_mid_y();

        match self.measure.content().kind() {
            ContentKind::Text => {
                if let Some(line) = self.measure.title_line(index) {
                    let size = self.measure.title_size(index);
                    let frame = Rect::new(
                        mid_x - size.width / 2.0,
                        mid_y - size.height / 2.0,
                        size.width,
                        size.height,
                    );
                    layers.push(Layer::new(
                        LayerRole::Title(index),
                        frame.ceil(),
                        Paint::Title(line),
                    ));
                }
            }
            ContentKind::Images => {
                if let Some(image) = self.measure.image(index) {
                    let size = image.size();
                    let frame = Rect::new(
                        mid_x - size.width / 2.0,
                        mid_y - size.height / 2.0,
                        size.width,
                        size.height,
                    );
                    layers.push(Layer::new(
                        LayerRole::Image(index),
                        frame.ceil(),
                        Paint::Image(image.clone()),
                    ));
                }
            }
            ContentKind::TextImages => {
                let image_size = self.measure.image_size(index);
                let title_size = self.measure.title_size(index);
                let top = mid_y - (image_size.height + title_size.height) / 2.0;

                if let Some(image) = self.measure.image(index) {
                    let frame = Rect::new(
                        mid_x - image_size.width / 2.0,
                        top,
                        image_size.width,
                        image_size.height,
                    );
                    layers.push(Layer::new(
                        LayerRole::Image(index),
                        frame.ceil(),
                        Paint::Image(image.clone()),
                    ));
                }
                if let Some(line) = self.measure.title_line(index) {
                    let frame = Rect::new(
                        mid_x - title_size.width / 2.0,
                        top + image_size.height,
                        title_size.width,
                        title_size.height,
                    );
                    layers.push(Layer::new(
                        LayerRole::Title(index),
                        frame.ceil(),
                        Paint::Title(line),
                    ));
                }
            }
        }
    }

    fn divider_frame(&self, full: Rect) -> Rect {
        let thickness = self.thickness();
        let width = self.config.divider_width;
        Rect::new(
            full.x - width / 2.0,
            thickness,
            width,
            (full.height - thickness * 2.0).max(0.0),
        )
    }

    fn push_background(&self, layers: &mut Vec<Layer>, index: usize, full: Rect) {
        layers.push(Layer::new(
            LayerRole::Background(index),
            full,
            Paint::Fill {
                color: self.config.background_color,
            },
        ));

        let stroke = self.config.border_thickness;
        for (edge, flag) in Edge::ALL {
            if !self.config.borders.contains(flag) {
                continue;
            }
            let frame = match edge {
                Edge::Top => Rect::new(full.x, full.y, full.width, stroke),
                Edge::Left => Rect::new(full.x, full.y, stroke, full.height),
                Edge::Bottom => Rect::new(full.x, full.bottom() - stroke, full.width, stroke),
                Edge::Right => Rect::new(full.right() - stroke, full.y, stroke, full.height),
            };
            layers.push(Layer::new(
                LayerRole::Border(index, edge),
                frame,
                Paint::Fill {
                    color: self.config.border_color,
                },
            ));
        }
    }

    fn indicator(&self) -> Option<Layer> {
        let index = self.selected?;
        let segment = self.layout.segment_rect(index)?;
        let config = self.config;

        let (frame, paint) = match config.indicator_style {
            IndicatorStyle::Box => (
                segment,
                Paint::Box {
                    color: config.effective_box_color(),
                    opacity: config.box_opacity,
                    border_width: BOX_BORDER_WIDTH,
                },
            ),
            IndicatorStyle::Arrow => {
                let thickness = self.thickness();
                let frame = Rect::new(
                    segment.mid_x() - thickness,
                    self.indicator_y(),
                    thickness * 2.0,
                    thickness,
                );
                let direction = match config.indicator_placement {
                    IndicatorPlacement::Top => ArrowDirection::Down,
                    IndicatorPlacement::Bottom | IndicatorPlacement::None => ArrowDirection::Up,
                };
                (
                    frame,
                    Paint::Arrow {
                        direction,
                        color: config.indicator_color,
                    },
                )
            }
            IndicatorStyle::TextWidth | IndicatorStyle::FullWidth => (
                self.stripe_frame(index, segment),
                Paint::Fill {
                    color: config.indicator_color,
                },
            ),
        };

        Some(Layer::new(LayerRole::Indicator, frame, paint))
    }

    fn indicator_y(&self) -> f32 {
        let insets = self.config.indicator_insets;
        match self.config.indicator_placement {
            IndicatorPlacement::Top => insets.top,
            IndicatorPlacement::Bottom => self.layout.height() - self.thickness() + insets.bottom,
            IndicatorPlacement::None => 0.0,
        }
    }

    fn stripe_frame(&self, index: usize, segment: Rect) -> Rect {
        let insets = self.config.indicator_insets;
        let content_width = self.measure.content_width(index);
        let fits_text = self.config.indicator_style == IndicatorStyle::TextWidth
            && content_width <= segment.width
            && self.layout.policy() != WidthPolicy::Dynamic;

        let (x, width) = if fits_text {
            (segment.mid_x() - content_width / 2.0, content_width)
        } else {
            (segment.x, segment.width)
        };

        Rect::new(
            x + insets.left,
            self.indicator_y(),
            (width - insets.horizontal()).max(0.0),
            self.thickness(),
        )
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::geometry::{EdgeInsets, Size};
    use crate::layout::LayoutCalculator;
    use crate::segment::SegmentContent;
    use crate::text::{CellMeasure, TitleStyler};

    fn build(content: &SegmentContent, config: &ControlConfig, selected: Option<usize>) -> Scene {
        build_in(content, config, selected, Size::new(30.0, 3.0))
    }

    fn build_in(
        content: &SegmentContent,
        config: &ControlConfig,
        selected: Option<usize>,
        bounds: Size,
    ) -> Scene {
        let measure = SegmentMeasure::new(
            content,
            TitleStyler::new(config, None),
            &CellMeasure,
            selected,
        );
        let layout = LayoutCalculator::calculate(config, &measure, bounds);
        SceneBuilder::new(config, &measure, &layout, selected).build()
    }

    fn abc() -> SegmentContent {
        SegmentContent::text(["A", "B", "C"])
    }

    #[test]
    fn test_bottom_border_per_segment() {
        let config = ControlConfig::new()
            .borders(Borders::BOTTOM)
            .border_thickness(2.0);
        let scene = build(&abc(), &config, Some(0));

        let borders: Vec<&Layer> = scene
            .background()
            .iter()
            .filter(|l| matches!(l.role, LayerRole::Border(..)))
            .collect();
        assert_eq!(borders.len(), 3);
        for (i, layer) in borders.iter().enumerate() {
            assert_eq!(layer.role, LayerRole::Border(i, Edge::Bottom));
            assert_eq!(layer.frame, Rect::new(10.0 * i as f32, 1.0, 10.0, 2.0));
        }
    }

    #[test]
    fn test_border_edges_anchor_to_segment() {
        let config = ControlConfig::new().borders(Borders::ALL);
        let scene = build(&abc(), &config, None);

        let frame = |edge| {
            scene
                .with_role(LayerRole::Border(1, edge))
                .next()
                .map(|l| l.frame)
        };
        assert_eq!(frame(Edge::Top), Some(Rect::new(10.0, 0.0, 10.0, 1.0)));
        assert_eq!(frame(Edge::Left), Some(Rect::new(10.0, 0.0, 1.0, 3.0)));
        assert_eq!(frame(Edge::Bottom), Some(Rect::new(10.0, 2.0, 10.0, 1.0)));
        assert_eq!(frame(Edge::Right), Some(Rect::new(19.0, 0.0, 1.0, 3.0)));
    }

    #[test]
    fn test_dividers_skip_first_segment() {
        let config = ControlConfig::new().dividers(true);
        let scene = build(&abc(), &config, Some(0));

        let dividers: Vec<LayerRole> = scene
            .layers()
            .filter(|l| matches!(l.role, LayerRole::Divider(_)))
            .map(|l| l.role)
            .collect();
        assert_eq!(dividers, vec![LayerRole::Divider(1), LayerRole::Divider(2)]);

        let divider = scene.with_role(LayerRole::Divider(1)).next();
        assert_eq!(
            divider.map(|l| l.frame),
            Some(Rect::new(9.5, 1.0, 1.0, 1.0))
        );

        let scene = build(&abc(), &ControlConfig::new(), Some(0));
        assert!(!scene
            .layers()
            .any(|l| matches!(l.role, LayerRole::Divider(_))));
    }

    #[test]
    fn test_title_frames_are_integral_and_centered() {
        let config = ControlConfig::new().indicator_placement(IndicatorPlacement::Bottom);
        let scene = build_in(&abc(), &config, Some(0), Size::new(30.0, 2.0));

        let title = scene.with_role(LayerRole::Title(1)).next();
        assert_eq!(title.map(|l| l.frame), Some(Rect::new(15.0, 0.0, 1.0, 1.0)));

        for layer in scene.layers() {
            if matches!(layer.role, LayerRole::Title(_)) {
                assert_eq!(layer.frame, layer.frame.ceil());
            }
        }
    }

    #[test]
    fn test_selected_title_uses_selected_style() {
        let config = ControlConfig::new();
        let scene = build(&abc(), &config, Some(2));

        let paint = |i| {
            scene
                .with_role(LayerRole::Title(i))
                .next()
                .map(|l| &l.paint)
        };
        let selected = Line::styled("C", config.selected_title_style);
        assert_eq!(paint(2), Some(&Paint::Title(selected)));
        assert_eq!(
            paint(0),
            Some(&Paint::Title(Line::styled("A", config.title_style)))
        );
    }

    #[test]
    fn test_full_width_stripe() {
        let config = ControlConfig::new()
            .indicator_style(IndicatorStyle::FullWidth)
            .indicator_placement(IndicatorPlacement::Bottom);
        let scene = build(&abc(), &config, Some(1));

        let indicator = scene.indicator().map(|l| l.frame);
        assert_eq!(indicator, Some(Rect::new(10.0, 2.0, 10.0, 1.0)));
        let topmost = scene.content().last().map(|l| l.role);
        assert_eq!(topmost, Some(LayerRole::Indicator));
    }

    #[test]
    fn test_text_width_stripe_clamps_to_content() {
        let content = SegmentContent::text(["Tab", "Another"]);
        let config = ControlConfig::new().indicator_thickness(1.0);
        let scene = build(&content, &config, Some(1));

        // Segments are 15 wide; "Another" is 7 cells.
        let indicator = scene.indicator().map(|l| l.frame);
        assert_eq!(indicator, Some(Rect::new(19.0, 0.0, 7.0, 1.0)));
    }

    #[test]
    fn test_text_width_stripe_spans_dynamic_segment() {
        let content = SegmentContent::text(["Tab", "Another"]);
        let config = ControlConfig::new().width_policy(WidthPolicy::Dynamic);
        let scene = build(&content, &config, Some(1));

        let indicator = scene.indicator().map(|l| l.frame);
        assert_eq!(indicator, Some(Rect::new(5.0, 0.0, 9.0, 1.0)));
    }

    #[test]
    fn test_indicator_insets() {
        let config = ControlConfig::new()
            .indicator_style(IndicatorStyle::FullWidth)
            .indicator_insets(EdgeInsets::new(1.0, 2.0, 0.0, 3.0));
        let scene = build(&abc(), &config, Some(0));

        let indicator = scene.indicator().map(|l| l.frame);
        assert_eq!(indicator, Some(Rect::new(2.0, 1.0, 5.0, 1.0)));
    }

    #[test]
    fn test_box_goes_behind_content() {
        let config = ControlConfig::new()
            .indicator_style(IndicatorStyle::Box)
            .box_opacity(0.5)
            .indicator_color(Color::Green);
        let scene = build(&abc(), &config, Some(2));

        let first = &scene.content()[0];
        assert_eq!(first.role, LayerRole::Indicator);
        assert_eq!(first.frame, Rect::new(20.0, 0.0, 10.0, 3.0));
        assert_eq!(
            first.paint,
            Paint::Box {
                color: Color::Green,
                opacity: 0.5,
                border_width: BOX_BORDER_WIDTH,
            }
        );
        assert_eq!(
            scene
                .layers()
                .filter(|l| l.role == LayerRole::Indicator)
                .count(),
            1
        );
        // Above the segment fills, beneath every title.
        let background = scene.background();
        assert!(background.iter().all(|l| l.role != LayerRole::Indicator));
    }

    #[test]
    fn test_arrow_points_toward_content() {
        let config = ControlConfig::new()
            .indicator_style(IndicatorStyle::Arrow)
            .indicator_thickness(2.0)
            .indicator_placement(IndicatorPlacement::Bottom);
        let scene = build_in(&abc(), &config, Some(1), Size::new(30.0, 5.0));

        let indicator = scene.indicator().cloned();
        assert_eq!(
            indicator.as_ref().map(|l| l.frame),
            Some(Rect::new(13.0, 3.0, 4.0, 2.0))
        );
        assert!(matches!(
            indicator.map(|l| l.paint),
            Some(Paint::Arrow {
                direction: ArrowDirection::Up,
                ..
            })
        ));

        let config = config.indicator_placement(IndicatorPlacement::Top);
        let scene = build_in(&abc(), &config, Some(1), Size::new(30.0, 5.0));
        assert!(matches!(
            scene.indicator().map(|l| &l.paint),
            Some(Paint::Arrow {
                direction: ArrowDirection::Down,
                ..
            })
        ));
    }

    #[test]
    fn test_hidden_indicator_collapses() {
        let config = ControlConfig::new()
            .indicator_style(IndicatorStyle::FullWidth)
            .indicator_thickness(3.0)
            .indicator_placement(IndicatorPlacement::None);
        let scene = build(&abc(), &config, Some(0));

        let indicator = scene.indicator().map(|l| l.frame);
        assert_eq!(indicator.map(|f| f.height), Some(0.0));
        assert!(indicator.is_some_and(|f| f.is_empty()));
    }

    #[test]
    fn test_no_indicator_without_selection() {
        let scene = build(&abc(), &ControlConfig::new(), None);
        assert!(scene.indicator().is_none());
    }

    #[test]
    fn test_selected_image_fallback() {
        let dot = SegmentImage::new(["o"]);
        let star = SegmentImage::new(["*"]);
        let content =
            SegmentContent::text_images(["A", "B"], vec![dot.clone(), dot.clone()], vec![]);
        let config = ControlConfig::new();
        let bounds = Size::new(10.0, 3.0);
        let scene = build_in(&content, &config, Some(0), bounds);
        let image = scene.with_role(LayerRole::Image(0)).next();
        assert_eq!(image.map(|l| &l.paint), Some(&Paint::Image(dot.clone())));

        let content =
            SegmentContent::text_images(["A", "B"], vec![dot.clone(), dot], vec![star.clone()]);
        let scene = build_in(&content, &config, Some(0), bounds);
        let image = scene.with_role(LayerRole::Image(0)).next();
        assert_eq!(image.map(|l| &l.paint), Some(&Paint::Image(star)));
    }

    #[test]
    fn test_combined_stacks_image_above_title() {
        let content = SegmentContent::text_images(
            ["Hi"],
            vec![SegmentImage::new(["/\\", "\\/"])],
            Vec::new(),
        );
        let config = ControlConfig::new().indicator_placement(IndicatorPlacement::Bottom);
        let scene = build_in(&content, &config, None, Size::new(10.0, 4.0));

        let image = scene.with_role(LayerRole::Image(0)).next().map(|l| l.frame);
        let title = scene.with_role(LayerRole::Title(0)).next().map(|l| l.frame);
        assert_eq!(image, Some(Rect::new(4.0, 0.0, 2.0, 2.0)));
        assert_eq!(title, Some(Rect::new(4.0, 2.0, 2.0, 1.0)));
    }

    #[test]
    fn test_rebuild_replaces_scene() {
        let config = ControlConfig::new();
        let first = build(&abc(), &config, Some(0));
        let second = build(&SegmentContent::text(["Only"]), &config, Some(0));
        assert!(second.with_role(LayerRole::Title(1)).next().is_none());
        assert_ne!(first, second);
    }
}
