use nomad3d::math::{self, point, real, vector, Point, Rotation, Vector};
use nomad3d::na;
use nomad3d::query::{Ray, RecordingReporter, SimpleCollisions};
use nomad3d::shape::{Collider, Segment};

use crate::assert_near;

fn unit_box() -> Collider {
    Collider::new_box(point(0.0, 0.0, 0.0), Rotation::identity(), vector(1.0, 1.0, 1.0))
}

#[test]
fn ray_grazing_a_face_does_not_hit() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);

    // Runs along the top face.
    let ray = Ray::new(point(-3.0, 1.0, 0.0), Vector::x());
    assert_eq!(collisions.raycast_with_box(&ray, &unit_box()), None);

    // Runs along the top-front edge.
    let ray = Ray::new(point(-3.0, 1.0, 1.0), Vector::x());
    assert_eq!(collisions.raycast_with_box(&ray, &unit_box()), None);
    assert!(!reporter.has_errors());
}

#[test]
fn ray_through_the_interior_hits_the_entry_face() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let ray = Ray::new(point(-3.0, 0.5, 0.25), Vector::x());

    let hit = collisions.raycast_with_box(&ray, &unit_box()).unwrap();
    assert_near(hit.time_of_impact, 2.0);
    assert_near(hit.point.x, -1.0);
    assert!(!reporter.has_errors());
}

#[test]
fn ray_starting_inside_hits_on_the_way_out() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let ray = Ray::new(point(0.0, 0.0, 0.25), Vector::z());

    let hit = collisions.raycast_with_box(&ray, &unit_box()).unwrap();
    assert_near(hit.time_of_impact, 0.75);
}

#[test]
fn linetest_is_limited_by_the_segment_length() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);

    let long = Segment::new(point(0.0, -4.0, 0.0), point(0.0, 4.0, 0.0));
    let short = Segment::new(point(0.0, -4.0, 0.0), point(0.0, -2.0, 0.0));

    let hit = collisions.linetest_with_box(&long, &unit_box()).unwrap();
    assert_near(hit.time_of_impact, 3.0);
    assert_eq!(collisions.linetest_with_box(&short, &unit_box()), None);
    assert!(!reporter.has_errors());
}

#[test]
fn rays_toward_the_center_of_rotated_boxes_always_hit() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let mut rng = oorandom::Rand32::new(42);
    let mut rand_signed = move || real(rng.rand_float() as f64 * 2.0 - 1.0);

    for _ in 0..200 {
        let dir = Vector::new(rand_signed(), rand_signed(), rand_signed());

        if dir.norm_squared() < real(0.01) {
            continue;
        }

        let ray_origin = Point::from(math::normalize_or_zero(&dir) * real(5.0));
        let ray = Ray::from_points(ray_origin, Point::origin());

        let quaternion = na::Quaternion::new(rand_signed(), rand_signed(), rand_signed(), rand_signed());
        let rotation = na::Unit::try_new(quaternion, real(1.0e-2)).unwrap_or_else(Rotation::identity);
        let box_ = Collider::new_box(Point::origin(), rotation, vector(1.0, 1.0, 1.0));

        let hit = collisions
            .raycast_with_box(&ray, &box_)
            .unwrap_or_else(|| panic!("Ray {ray:?} did not hit box rotated with {rotation:?}"));

        // Between a face center and a corner.
        assert!(hit.time_of_impact > real(5.0 - 1.733) && hit.time_of_impact < real(4.001));

        let local = box_.to_local_point(&hit.point);
        let largest = local.iter().map(|c| math::abs(*c)).max().unwrap();
        assert_near(largest, 1.0);
    }

    assert!(!reporter.has_errors());
}
