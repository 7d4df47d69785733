//! Ratatui widget for rendering a segmented control.

use ratatui::{
    buffer::Buffer,
    layout::Rect as CellRect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::control::SegmentedControl;
use crate::geometry::Rect;
use crate::render::{ArrowDirection, Layer, Paint, Scene};

/// Widget that draws a [`SegmentedControl`]'s current scene.
///
/// The control should have been sized to the render area with
/// [`SegmentedControl::set_area`] beforehand.
pub struct SegmentedControlWidget<'a> {
    /// The control to draw.
    control: &'a SegmentedControl,
}

impl<'a> SegmentedControlWidget<'a> {
    /// Create a new widget.
    #[must_use]
    pub fn new(control: &'a SegmentedControl) -> Self {
        Self { control }
    }
}

impl Widget for SegmentedControlWidget<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: CellRect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let scene = self.control.scene();

        // Draw the whole strip off screen, then copy the visible window.
        let strip_width = to_cells(scene.width()).max(area.width);
        let mut strip = Buffer::empty(CellRect::new(0, 0, strip_width, area.height));
        paint_scene(scene, &mut strip);

        let scroll = to_cells(self.control.scroll_offset());
        for row in 0..area.height {
            for col in 0..area.width {
                let Some(source) = strip.cell((scroll.saturating_add(col), row)) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut((area.x + col, area.y + row)) {
                    *target = source.clone();
                }
            }
        }
    }
}

/// Paint every layer of a scene, back to front, into a buffer whose origin
/// is the start of the strip.
pub fn paint_scene(scene: &Scene, buf: &mut Buffer) {
    for layer in scene.layers() {
        paint_layer(layer, buf);
    }
}

fn paint_layer(layer: &Layer, buf: &mut Buffer) {
    let Some(cells) = cell_rect(layer.frame, buf.area) else {
        return;
    };
    match &layer.paint {
        Paint::Fill { color } => fill(buf, cells, *color, 1.0),
        Paint::Box {
            color,
            opacity,
            border_width,
        } => {
            fill(buf, cells, *color, *opacity);
            if *border_width > 0.0 && cells.width >= 2 && cells.height >= 2 {
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(*color))
                    .render(cells, buf);
            }
        }
        Paint::Title(line) => {
            buf.set_line(cells.x, cells.y, line, cells.width);
        }
        Paint::Image(image) => {
            for (row, text) in (cells.y..cells.bottom()).zip(image.rows()) {
                buf.set_stringn(
                    cells.x,
                    row,
                    text,
                    usize::from(cells.width),
                    image.draw_style(),
                );
            }
        }
        Paint::Arrow { direction, color } => {
            paint_arrow(buf, layer.frame, cells, *direction, *color);
        }
    }
}

/// Rasterize a triangle: each row fills the cells whose centers fall within
/// the triangle's span at that row, and at least the center cell.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn paint_arrow(
    buf: &mut Buffer,
    frame: Rect,
    cells: CellRect,
    direction: ArrowDirection,
    color: Color,
) {
    let mid = frame.mid_x();
    let last_col = cells.right().saturating_sub(1);
    let center_col = (mid.floor().max(0.0) as u16).clamp(cells.x, last_col);

    for row in cells.y..cells.bottom() {
        let depth = ((f32::from(row) + 0.5 - frame.y) / frame.height).clamp(0.0, 1.0);
        let spread = match direction {
            ArrowDirection::Up => depth,
            ArrowDirection::Down => 1.0 - depth,
        };
        let half = frame.width / 2.0 * spread;

        let covered: Vec<u16> = (cells.x..cells.right())
            .filter(|&col| (f32::from(col) + 0.5 - mid).abs() <= half)
            .collect();
        let (cols, symbol) = if covered.len() > 1 {
            (covered, "█")
        } else {
            let glyph = match direction {
                ArrowDirection::Up => "▲",
                ArrowDirection::Down => "▼",
            };
            (vec![center_col], glyph)
        };
        for col in cols {
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_symbol(symbol).set_fg(color);
            }
        }
    }
}

fn fill(buf: &mut Buffer, cells: CellRect, color: Color, opacity: f32) {
    for y in cells.y..cells.bottom() {
        for x in cells.x..cells.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = blend(color, cell.bg, opacity);
                cell.set_bg(bg);
            }
        }
    }
}

/// Mix `color` over `under`. Only RGB pairs can be mixed; anything else
/// takes `color` as long as it is not fully transparent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(color: Color, under: Color, opacity: f32) -> Color {
    if opacity >= 1.0 {
        return color;
    }
    if opacity <= 0.0 {
        return under;
    }
    match (color, under) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |top: u8, bottom: u8| {
                (f32::from(top) * opacity + f32::from(bottom) * (1.0 - opacity)).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => color,
    }
}

/// Round a frame's edges to whole cells and clip to `bounds`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_rect(frame: Rect, bounds: CellRect) -> Option<CellRect> {
    let left = frame.x.round().max(0.0);
    let top = frame.y.round().max(0.0);
    let right = frame.right().round().min(f32::from(bounds.right()));
    let bottom = frame.bottom().round().min(f32::from(bounds.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    let rect = CellRect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    );
    Some(rect.intersection(bounds)).filter(|r| !r.is_empty())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cells(value: f32) -> u16 {
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}
