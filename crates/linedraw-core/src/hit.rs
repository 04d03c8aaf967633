//! Selection lookups over a line sequence.
//!
//! These operate on the slices handed to subscribers or returned by the
//! controller, never on controller internals.

use crate::line::{Line, LineId};
use kurbo::{Point, Rect};

/// Find the topmost line within `tolerance` of `point`.
///
/// Later lines draw on top, so the scan runs in reverse insertion order.
pub fn line_at_point(lines: &[Line], point: Point, tolerance: f64) -> Option<LineId> {
    lines
        .iter()
        .rev()
        .find(|line| line.hit_test(point, tolerance))
        .map(Line::id)
}

/// Collect all lines within `tolerance` of `point`, topmost first.
pub fn lines_at_point(lines: &[Line], point: Point, tolerance: f64) -> Vec<LineId> {
    lines
        .iter()
        .rev()
        .filter(|line| line.hit_test(point, tolerance))
        .map(Line::id)
        .collect()
}

/// Collect the lines whose bounds overlap `rect`, in insertion order.
///
/// Horizontal and vertical segments have zero-area bounds, so this checks
/// interval overlap per axis rather than intersection area.
pub fn lines_in_rect(lines: &[Line], rect: Rect) -> Vec<LineId> {
    lines
        .iter()
        .filter(|line| {
            let bounds = line.bounds();
            bounds.x0 <= rect.x1
                && bounds.x1 >= rect.x0
                && bounds.y0 <= rect.y1
                && bounds.y1 >= rect.y0
        })
        .map(Line::id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineDraft;

    fn line(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Line {
        Line::from_draft(LineDraft::new(start_x, start_y, end_x, end_y))
    }

    #[test]
    fn test_line_at_point_prefers_topmost() {
        // Two overlapping horizontal lines; the later one draws on top
        let lines = vec![line(0.0, 0.0, 100.0, 0.0), line(0.0, 1.0, 100.0, 1.0)];

        let hit = line_at_point(&lines, Point::new(50.0, 0.5), 2.0);
        assert_eq!(hit, Some(lines[1].id()));
    }

    #[test]
    fn test_line_at_point_miss() {
        let lines = vec![line(0.0, 0.0, 100.0, 0.0)];
        assert_eq!(line_at_point(&lines, Point::new(50.0, 30.0), 2.0), None);
    }

    #[test]
    fn test_lines_at_point_orders_topmost_first() {
        let lines = vec![line(0.0, 0.0, 100.0, 0.0), line(0.0, 1.0, 100.0, 1.0)];

        let hits = lines_at_point(&lines, Point::new(50.0, 0.5), 2.0);
        assert_eq!(hits, vec![lines[1].id(), lines[0].id()]);
    }

    #[test]
    fn test_lines_in_rect() {
        let inside = line(10.0, 10.0, 20.0, 20.0);
        let outside = line(200.0, 200.0, 300.0, 300.0);
        let lines = vec![inside.clone(), outside];

        let hits = lines_in_rect(&lines, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(hits, vec![inside.id()]);
    }

    #[test]
    fn test_lines_in_rect_catches_axis_aligned_segments() {
        // Zero-area bounds must still be selectable by marquee
        let horizontal = line(10.0, 25.0, 40.0, 25.0);
        let hits = lines_in_rect(
            std::slice::from_ref(&horizontal),
            Rect::new(0.0, 0.0, 50.0, 50.0),
        );
        assert_eq!(hits, vec![horizontal.id()]);
    }
}
