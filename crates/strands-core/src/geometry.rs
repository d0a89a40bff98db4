use glam::Vec2;

/// Distance from `p` to the nearest point on the segment `a`-`b`.
///
/// Projects `p` onto the infinite line through the segment, clamps the
/// projection parameter to \[0, 1\], and measures to the clamped point.
/// A zero-length segment degenerates to the distance to `a`.
#[inline]
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ap = p - a;
    let ab = b - a;
    let len_sq = ab.length_squared();
    let param = if len_sq != 0.0 { ap.dot(ab) / len_sq } else { -1.0 };

    let nearest = if param < 0.0 {
        a
    } else if param > 1.0 {
        b
    } else {
        a + ab * param
    };

    p.distance(nearest)
}
