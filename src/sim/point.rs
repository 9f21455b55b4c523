//! Point math
//!
//! Points are plain `DVec2` values. Everything here is a pure function:
//! inputs are copied in, new coordinates come out.

use glam::DVec2;

/// Shift a point by `delta`
#[inline]
pub fn translate(p: DVec2, delta: DVec2) -> DVec2 {
    p + delta
}

/// Scale a point away from the origin
#[inline]
pub fn scale(p: DVec2, factor: f64) -> DVec2 {
    p * factor
}

/// Per-axis tolerance check (not Euclidean distance)
#[inline]
pub fn is_close_to(p: DVec2, q: DVec2, threshold: f64) -> bool {
    (p.x - q.x).abs() <= threshold && (p.y - q.y).abs() <= threshold
}

/// Reflect `p` across the infinite line through `a` and `b`.
///
/// When `a == b` there is no axis and `p` comes back unchanged.
/// A vertical axis uses the closed form so the slope is never computed.
pub fn reflect_across_line(p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    if a == b {
        return p;
    }

    if a.x == b.x {
        return DVec2::new(2.0 * a.x - p.x, p.y);
    }

    // y = m*x + c
    let m = (b.y - a.y) / (b.x - a.x);
    let c = b.y - m * b.x;
    let m_sq = m * m;
    let denom = 1.0 + m_sq;

    DVec2::new(
        (p.x * (1.0 - m_sq) + p.y * (2.0 * m) - 2.0 * m * c) / denom,
        (p.x * (2.0 * m) + p.y * (m_sq - 1.0) + 2.0 * c) / denom,
    )
}
