use nomad3d::math::{point, real, vector, Rotation, Vector};
use nomad3d::query::{RecordingReporter, SimpleCollisions};
use nomad3d::shape::Collider;

use crate::assert_near;

fn cube_at(x: f64, y: f64, z: f64, rotation: Rotation) -> Collider {
    Collider::new_box(point(x, y, z), rotation, vector(0.6, 0.6, 0.6))
}

#[test]
fn axis_aligned_cubes_overlap_then_separate() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let a = cube_at(0.0, 0.0, 0.0, Rotation::identity());

    assert!(collisions.is_colliding(&a, &cube_at(1.0, 0.0, 0.0, Rotation::identity())));
    assert!(!collisions.is_colliding(&a, &cube_at(1.3, 0.0, 0.0, Rotation::identity())));
    assert!(!reporter.has_errors());
}

#[test]
fn touching_cubes_do_not_collide() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let half = vector(0.5, 0.5, 0.5);
    let a = Collider::new_box(point(0.0, 0.0, 0.0), Rotation::identity(), half);
    let touching = Collider::new_box(point(0.0, 1.0, 0.0), Rotation::identity(), half);
    let overlapping = Collider::new_box(point(0.0, 0.875, 0.0), Rotation::identity(), half);

    assert!(!collisions.is_colliding(&a, &touching));
    assert!(!collisions.is_colliding(&touching, &a));
    assert!(collisions.is_colliding(&a, &overlapping));
    assert!(!reporter.has_errors());
}

#[test]
fn rotated_cube_corner_reaches_further() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let a = cube_at(0.0, 0.0, 0.0, Rotation::identity());
    let rotation = Rotation::from_axis_angle(&Vector::z_axis(), real(core::f64::consts::FRAC_PI_4));

    // Axis aligned, the gap along x is 1.3 - 1.2. Rotated by 45 degrees, the second cube reaches
    // 0.6 * sqrt(2) ~ 0.85 toward the first one.
    assert!(collisions.is_colliding(&a, &cube_at(1.3, 0.0, 0.0, rotation)));
    assert!(!collisions.is_colliding(&a, &cube_at(1.5, 0.0, 0.0, rotation)));
    assert!(!reporter.has_errors());
}

#[test]
fn penetration_follows_the_smallest_overlap() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let a = cube_at(0.0, 0.0, 0.0, Rotation::identity());
    let b = cube_at(0.3, 1.0, 0.0, Rotation::identity());

    let penetration = collisions.box_and_box_penetration(&a, &b).unwrap();
    assert_near(penetration.depth, 0.2);
    assert_eq!(penetration.axis, Vector::y());
    assert!(!reporter.has_errors());
}
