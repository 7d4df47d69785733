//! # Segmenta
//!
//! A selectable segmented control for Ratatui applications.
//!
//! A segmented control is a horizontal strip of tappable segments showing
//! titles, images, or both, with a moving selection indicator.
//!
//! ## Features
//!
//! - **Content kinds**: titles, cell-art images, or an image above a title
//! - **Width policies**: uniform segments or segments sized to their content,
//!   scrolling horizontally when they overflow
//! - **Indicators**: text-width or full-width stripe, translucent box, or arrow,
//!   anchored to the top or bottom edge
//! - **Decoration**: per-edge borders and vertical dividers
//! - **Input**: mouse release hit testing with an enlargeable hit area, wheel
//!   scrolling and arrow-key navigation via crossterm events
//!
//! ## Example
//!
//! ```no_run
//! use segmenta::{
//!     ControlConfig, IndicatorStyle, SegmentContent, SegmentedControl, SegmentedControlWidget,
//! };
//! use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
//!
//! fn main() -> segmenta::Result<()> {
//!     let config = ControlConfig::new().indicator_style(IndicatorStyle::FullWidth);
//!     let content = SegmentContent::text(["Inbox", "Sent", "Drafts"]);
//!     let mut control = SegmentedControl::new(content, config)?;
//!     control.on_change(|index| println!("selected segment {index}"));
//!
//!     let area = Rect::new(0, 0, 30, 2);
//!     control.set_area(area);
//!     control.set_selected(1)?;
//!
//!     let mut buf = Buffer::empty(area);
//!     SegmentedControlWidget::new(&control).render(area, &mut buf);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod control;
mod error;
mod geometry;
mod hit_test;
mod layout;
mod render;
mod segment;
mod selection;
mod text;
mod widget;

// Re-export public API
pub use config::{ControlConfig, IndicatorPlacement, IndicatorStyle, WidthPolicy};
pub use control::SegmentedControl;
pub use error::{Error, Result};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use hit_test::segment_at;
pub use layout::{LayoutCalculator, SegmentFrame, SegmentLayout, SegmentMeasure};
pub use render::{
    ArrowDirection, Edge, Layer, LayerRole, Paint, Scene, SceneBuilder, BOX_BORDER_WIDTH,
};
pub use segment::{ContentKind, SegmentContent, SegmentImage};
pub use selection::{ChangeCallback, SelectionState};
pub use text::{CellMeasure, TextMeasure, TitleFormatter, TitleStyler};
pub use widget::{paint_scene, SegmentedControlWidget};
