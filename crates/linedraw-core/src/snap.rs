//! Grid snapping helpers shared by drawing collaborators.

use crate::settings::EditorSettings;
use kurbo::Point;

/// Default grid cell size in document units (matches the visual grid).
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Snap a scalar coordinate to the nearest grid multiple. Non-positive
/// grid sizes leave the coordinate untouched.
pub fn snap_coord(v: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return v;
    }
    (v / grid_size).round() * grid_size
}

/// Snap a point to the nearest grid intersection.
pub fn snap_point(point: Point, grid_size: f64) -> Point {
    Point::new(snap_coord(point.x, grid_size), snap_coord(point.y, grid_size))
}

/// Snap a point according to the editor settings; identity when grid
/// snapping is disabled.
pub fn snap_point_with_settings(point: Point, settings: &EditorSettings) -> Point {
    if settings.snap_to_grid {
        snap_point(point, settings.grid_size)
    } else {
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_coord_rounds_to_nearest() {
        assert_eq!(snap_coord(23.0, 20.0), 20.0);
        assert_eq!(snap_coord(31.0, 20.0), 40.0);
        assert_eq!(snap_coord(-7.0, 20.0), 0.0);
        assert_eq!(snap_coord(-13.0, 20.0), -20.0);
    }

    #[test]
    fn test_snap_coord_exact_multiples() {
        assert_eq!(snap_coord(40.0, 20.0), 40.0);
        assert_eq!(snap_coord(0.0, 20.0), 0.0);
    }

    #[test]
    fn test_snap_coord_degenerate_grid() {
        assert_eq!(snap_coord(23.0, 0.0), 23.0);
        assert_eq!(snap_coord(23.0, -5.0), 23.0);
    }

    #[test]
    fn test_snap_point() {
        assert_eq!(snap_point(Point::new(23.0, 47.0), 20.0), Point::new(20.0, 40.0));
    }

    #[test]
    fn test_snap_point_with_settings() {
        let mut settings = EditorSettings::default();
        let point = Point::new(23.0, 47.0);

        assert_eq!(snap_point_with_settings(point, &settings), Point::new(20.0, 40.0));

        settings.snap_to_grid = false;
        assert_eq!(snap_point_with_settings(point, &settings), point);
    }
}
