//! Line entity: a straight drawable segment with two endpoints.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a line.
pub type LineId = Uuid;

/// A straight line segment with cosmetic attributes.
///
/// Coordinates are in document space. `color` and `stroke_width` are carried
/// opaquely; the rendering layer applies defaults for absent values. The id
/// is assigned once at creation and never changes; updates replace the whole
/// entity rather than mutating fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub(crate) id: LineId,
    /// Start point X coordinate.
    pub start_x: f64,
    /// Start point Y coordinate.
    pub start_y: f64,
    /// End point X coordinate.
    pub end_x: f64,
    /// End point Y coordinate.
    pub end_y: f64,
    /// Stroke color (CSS-style string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke width in document units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Fields of a line before the controller has assigned an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDraft {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
}

impl LineDraft {
    /// Create a draft from raw coordinates. Degenerate segments
    /// (start == end) are valid.
    pub fn new(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
            color: None,
            stroke_width: None,
        }
    }

    /// Create a draft from two points.
    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// Partial update for an existing line. Fields set to `Some` win; `None`
/// fields keep their prior values. The id is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinePatch {
    pub start_x: Option<f64>,
    pub start_y: Option<f64>,
    pub end_x: Option<f64>,
    pub end_y: Option<f64>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
}

impl LinePatch {
    /// A patch replacing all four coordinates, leaving cosmetics untouched.
    pub fn endpoints(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            start_x: Some(start_x),
            start_y: Some(start_y),
            end_x: Some(end_x),
            end_y: Some(end_y),
            ..Self::default()
        }
    }

    /// A patch replacing only the stroke color.
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// A patch replacing only the stroke width.
    pub fn stroke_width(width: f64) -> Self {
        Self {
            stroke_width: Some(width),
            ..Self::default()
        }
    }
}

impl Line {
    /// Build a fully-formed line from a draft with a fresh id.
    pub(crate) fn from_draft(draft: LineDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_x: draft.start_x,
            start_y: draft.start_y,
            end_x: draft.end_x,
            end_y: draft.end_y,
            color: draft.color,
            stroke_width: draft.stroke_width,
        }
    }

    /// Get the line's id.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Start point.
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// End point.
    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        let dx = self.end_x - self.start_x;
        let dy = self.end_y - self.start_y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start_x + self.end_x) / 2.0,
            (self.start_y + self.end_y) / 2.0,
        )
    }

    /// Axis-aligned bounding box. Zero-area for horizontal, vertical, and
    /// degenerate segments.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.start_x.min(self.end_x),
            self.start_y.min(self.end_y),
            self.start_x.max(self.end_x),
            self.start_y.max(self.end_y),
        )
    }

    /// Test whether `point` lies within `tolerance` of the segment. The
    /// tolerance is widened by half the stroke width when one is set.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let line_vec = kurbo::Vec2::new(self.end_x - self.start_x, self.end_y - self.start_y);
        let point_vec = kurbo::Vec2::new(point.x - self.start_x, point.y - self.start_y);
        let reach = tolerance + self.stroke_width.unwrap_or(0.0) / 2.0;

        let line_len_sq = line_vec.hypot2();
        if line_len_sq < f64::EPSILON {
            // Degenerate segment: distance to the single point
            return point_vec.hypot() <= reach;
        }

        // Project point onto the line, clamped to the segment
        let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
        let projection = Point::new(
            self.start_x + t * line_vec.x,
            self.start_y + t * line_vec.y,
        );

        point.distance(projection) <= reach
    }

    /// A copy of this line with both endpoints shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            start_x: self.start_x + dx,
            start_y: self.start_y + dy,
            end_x: self.end_x + dx,
            end_y: self.end_y + dy,
            ..self.clone()
        }
    }

    /// Merge a patch into this line, producing the replacement entity.
    /// Supplied fields win; everything else carries over, id included.
    pub(crate) fn apply(&self, patch: &LinePatch) -> Self {
        Self {
            id: self.id,
            start_x: patch.start_x.unwrap_or(self.start_x),
            start_y: patch.start_y.unwrap_or(self.start_y),
            end_x: patch.end_x.unwrap_or(self.end_x),
            end_y: patch.end_y.unwrap_or(self.end_y),
            color: patch.color.clone().or_else(|| self.color.clone()),
            stroke_width: patch.stroke_width.or(self.stroke_width),
        }
    }
}
