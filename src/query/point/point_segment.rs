use crate::math::{Point, Real};
use crate::shape::Segment;
use num::Zero;

/// The squared distance between a point and a segment.
#[inline]
pub fn distance_squared_point_segment(seg: &Segment, pt: &Point) -> Real {
    let ab = seg.b - seg.a;
    let ap = pt - seg.a;
    let ab_ap = ab.dot(&ap);

    if ab_ap <= Real::zero() {
        // Voronoï region of vertex 'a'.
        return ap.norm_squared();
    }

    let sqnab = ab.norm_squared();

    if ab_ap >= sqnab {
        // Voronoï region of vertex 'b'.
        return (pt - seg.b).norm_squared();
    }

    // Voronoï region of the segment interior.
    ap.norm_squared() - ab_ap * ab_ap / sqnab
}
