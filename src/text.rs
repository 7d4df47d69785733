//! Title styling and text measurement.
//!
//! Both layout and rendering style titles through [`TitleStyler`], so a
//! custom [`TitleFormatter`] changes the measured size and the drawn text in
//! the same way.

use ratatui::text::Line;

use crate::config::ControlConfig;
use crate::geometry::Size;

/// Host-supplied title formatter.
///
/// Called with the control configuration, the raw title, the segment index
/// and whether that segment is selected. The returned line is used as-is; no
/// further styling is applied.
pub type TitleFormatter = Box<dyn Fn(&ControlConfig, &str, usize, bool) -> Line<'static>>;

/// Measures styled text.
pub trait TextMeasure {
    /// Size of the rendered line.
    fn measure(&self, line: &Line<'_>) -> Size;
}

/// Measures text in terminal cells: display width by one row.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, line: &Line<'_>) -> Size {
        Size::new(line.width() as f32, 1.0)
    }
}

/// Produces the styled line for a segment title.
pub struct TitleStyler<'a> {
    config: &'a ControlConfig,
    formatter: Option<&'a TitleFormatter>,
}

impl<'a> TitleStyler<'a> {
    /// Create a styler; without a formatter the configured title styles apply.
    #[must_use]
    pub fn new(config: &'a ControlConfig, formatter: Option<&'a TitleFormatter>) -> Self {
        Self { config, formatter }
    }

    /// Styled line for a title.
    #[must_use]
    pub fn style(&self, title: &str, index: usize, selected: bool) -> Line<'static> {
        if let Some(formatter) = self.formatter {
            return formatter(self.config, title, index, selected);
        }
        let style = if selected {
            self.config.selected_title_style
        } else {
            self.config.title_style
        };
        Line::styled(title.to_string(), style)
    }
}
