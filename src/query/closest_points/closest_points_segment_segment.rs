use crate::math::{Point, Real};
use crate::shape::Segment;
use num::{One, Zero};

/// The closest points between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentsClosestPoints {
    /// Parameter of `point1` along the first segment, in `[0, 1]`.
    pub s: Real,
    /// Parameter of `point2` along the second segment, in `[0, 1]`.
    pub t: Real,
    /// The point of the first segment closest to the second segment.
    pub point1: Point,
    /// The point of the second segment closest to the first segment.
    pub point2: Point,
    /// The squared distance between `point1` and `point2`.
    pub distance_squared: Real,
}

/// Computes the closest points between two segments.
///
/// Both parameters are clamped to `[0, 1]`, so the points always lie on the segments
/// themselves and never on their supporting lines. Segments with a squared length at or below
/// `eps` are treated as single points.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
    eps: Real,
) -> SegmentsClosestPoints {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let _0 = Real::zero();
    let _1 = Real::one();

    let mut s;
    let mut t;

    if a <= eps && e <= eps {
        s = _0;
        t = _0;
    } else if a <= eps {
        s = _0;
        t = na::clamp(f / e, _0, _1);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = _0;
            s = na::clamp(-c / a, _0, _1);
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;

            // Parallel segments: any s works, pick the first endpoint.
            if denom > _0 {
                s = na::clamp((b * f - c * e) / denom, _0, _1);
            } else {
                s = _0;
            }

            t = (b * s + f) / e;

            if t < _0 {
                t = _0;
                s = na::clamp(-c / a, _0, _1);
            } else if t > _1 {
                t = _1;
                s = na::clamp((b - c) / a, _0, _1);
            }
        }
    }

    let point1 = seg1.point_at(s);
    let point2 = seg2.point_at(t);

    SegmentsClosestPoints {
        s,
        t,
        point1,
        point2,
        distance_squared: na::distance_squared(&point1, &point2),
    }
}
