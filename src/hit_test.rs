//! Mapping pointer positions to segments.

use crate::config::WidthPolicy;
use crate::geometry::{EdgeInsets, Point, Rect, Size};
use crate::layout::SegmentLayout;

/// Find the segment under a pointer-up position.
///
/// `point` is in control coordinates; `scroll_offset` is how far the strip
/// is scrolled. The control bounds are first enlarged by `hit_insets`; a
/// point outside the enlarged bounds is not a hit. Positions left of the
/// first segment resolve to it. Returns `None` when nothing is hit,
/// including positions past the trailing edge of the last segment.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn segment_at(
    point: Point,
    bounds: Size,
    hit_insets: EdgeInsets,
    scroll_offset: f32,
    layout: &SegmentLayout,
) -> Option<usize> {
    let hit_area = Rect::new(0.0, 0.0, bounds.width, bounds.height).outset(hit_insets);
    if !hit_area.contains(point) {
        tracing::trace!("pointer at {:?} outside control", point);
        return None;
    }

    let position = (point.x + scroll_offset).max(0.0);
    let index = match layout.policy() {
        WidthPolicy::Fixed => {
            let width = layout.segment_width();
            if width <= 0.0 {
                return None;
            }
            (position / width).floor() as usize
        }
        WidthPolicy::Dynamic => {
            let mut remaining = position;
            let mut index = 0;
            for frame in layout.frames() {
                remaining -= frame.width;
                if remaining <= 0.0 {
                    break;
                }
                index += 1;
            }
            index
        }
    };

    if index >= layout.len() {
        tracing::trace!("pointer at {:?} past the last segment", point);
        return None;
    }
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlConfig;
    use crate::layout::{LayoutCalculator, SegmentMeasure};
    use crate::segment::SegmentContent;
    use crate::text::{CellMeasure, TitleStyler};

    fn layout(titles: &[&str], policy: WidthPolicy, bounds: Size) -> SegmentLayout {
        let content = SegmentContent::text(titles.iter().copied());
        let config = ControlConfig::new()
            .width_policy(policy)
            .segment_insets(EdgeInsets::ZERO);
        let measure = SegmentMeasure::new(
            &content,
            TitleStyler::new(&config, None),
            &CellMeasure,
            None,
        );
        LayoutCalculator::calculate(&config, &measure, bounds)
    }

    #[test]
    fn test_fixed_hit() {
        let bounds = Size::new(300.0, 3.0);
        let layout = layout(&["A", "B", "Long Title"], WidthPolicy::Fixed, bounds);

        let hit = |x| segment_at(Point::new(x, 1.0), bounds, EdgeInsets::ZERO, 0.0, &layout);
        assert_eq!(hit(0.0), Some(0));
        assert_eq!(hit(99.9), Some(0));
        assert_eq!(hit(100.0), Some(1));
        assert_eq!(hit(250.0), Some(2));
    }

    #[test]
    fn test_fixed_hit_with_scroll() {
        let bounds = Size::new(10.0, 1.0);
        let titles = ["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"];
        let layout = layout(&titles, WidthPolicy::Fixed, bounds);

        let point = Point::new(5.0, 0.0);
        let hit = segment_at(point, bounds, EdgeInsets::ZERO, 20.0, &layout);
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn test_dynamic_hit_boundaries() {
        let bounds = Size::new(20.0, 1.0);
        let layout = layout(&["ab", "abcd", "abc"], WidthPolicy::Dynamic, bounds);

        let hit = |x| segment_at(Point::new(x, 0.0), bounds, EdgeInsets::ZERO, 0.0, &layout);
        assert_eq!(hit(0.5), Some(0));
        // Exactly on a boundary belongs to the segment on the left.
        assert_eq!(hit(2.0), Some(0));
        assert_eq!(hit(2.5), Some(1));
        assert_eq!(hit(6.5), Some(2));
        assert_eq!(hit(9.5), None);
    }

    #[test]
    fn test_outside_bounds_is_no_hit() {
        let bounds = Size::new(30.0, 2.0);
        let layout = layout(&["A", "B", "C"], WidthPolicy::Fixed, bounds);

        let hit = |x, y| segment_at(Point::new(x, y), bounds, EdgeInsets::ZERO, 0.0, &layout);
        assert_eq!(hit(5.0, 2.0), None);
        assert_eq!(hit(-1.0, 0.0), None);
    }

    #[test]
    fn test_enlarged_hit_area() {
        let bounds = Size::new(30.0, 2.0);
        let layout = layout(&["A", "B", "C"], WidthPolicy::Fixed, bounds);
        let insets = EdgeInsets::uniform(2.0);

        assert_eq!(
            segment_at(Point::new(5.0, 3.0), bounds, insets, 0.0, &layout),
            Some(0)
        );
        assert_eq!(
            segment_at(Point::new(-1.0, 0.0), bounds, insets, 0.0, &layout),
            Some(0)
        );
        assert_eq!(
            segment_at(Point::new(31.0, 0.0), bounds, insets, 0.0, &layout),
            None
        );
        assert_eq!(
            segment_at(Point::new(5.0, 4.5), bounds, insets, 0.0, &layout),
            None
        );
    }

    #[test]
    fn test_hit_matches_segment_rects() {
        let bounds = Size::new(12.0, 1.0);
        let layout = layout(&["one", "three", "fifteen"], WidthPolicy::Dynamic, bounds);
        let insets = EdgeInsets::uniform(20.0);

        for (i, frame) in layout.frames().iter().enumerate() {
            let inside = Point::new(frame.x + frame.width / 2.0, 0.0);
            assert_eq!(segment_at(inside, bounds, insets, 0.0, &layout), Some(i));
        }
    }

    #[test]
    fn test_empty_layout() {
        let bounds = Size::new(10.0, 1.0);
        let layout = layout(&[], WidthPolicy::Fixed, bounds);
        assert_eq!(
            segment_at(Point::new(1.0, 0.0), bounds, EdgeInsets::ZERO, 0.0, &layout),
            None
        );
    }
}
