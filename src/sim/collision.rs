//! Stateless collision queries
//!
//! Pure predicates over the world geometry: drone-vs-zone-edge contacts,
//! laser-segment-vs-enemy-box intersection, and the enemy ground check.
//! Resolution (clamping, velocity zeroing) stays in the tick so these can
//! be tested in isolation.

use glam::Vec2;

use super::state::Rect;

/// Which zone edges a bounding box has crossed. All four flags are computed
/// independently; corner contacts set two at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub ceiling: bool,
    pub ground: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.ceiling || self.ground
    }
}

/// Test a bounding box against all four zone edges
pub fn wall_contacts(bounds: &Rect, zone: &Rect) -> WallContact {
    WallContact {
        left: bounds.min.x <= zone.min.x,
        right: bounds.max.x >= zone.max.x,
        ceiling: bounds.min.y <= zone.min.y,
        ground: bounds.max.y >= zone.max.y,
    }
}

/// Whether a descending box's bottom edge has passed below the zone floor
pub fn reached_ground(bounds: &Rect, zone: &Rect) -> bool {
    bounds.max.y > zone.max.y
}

/// Segment-vs-rectangle intersection. Zero-area rectangles (killed enemies)
/// never intersect anything.
pub fn segment_intersects_rect(p1: Vec2, p2: Vec2, rect: &Rect) -> bool {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return false;
    }
    if rect.contains(p1) || rect.contains(p2) {
        return true;
    }
    let tl = rect.min;
    let br = rect.max;
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);
    segments_intersect(p1, p2, tl, tr)
        || segments_intersect(p1, p2, tr, br)
        || segments_intersect(p1, p2, br, bl)
        || segments_intersect(p1, p2, bl, tl)
}

/// Signed area of the triangle (a, b, c); sign gives the turn direction
fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// Whether collinear point `p` lies within the bounding box of segment (a, b)
fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Proper and degenerate segment-segment intersection
fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(c, d, a))
        || (d2 == 0.0 && on_segment(c, d, b))
        || (d3 == 0.0 && on_segment(a, b, c))
        || (d4 == 0.0 && on_segment(a, b, d))
}
