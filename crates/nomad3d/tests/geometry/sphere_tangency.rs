use nomad3d::math::{point, real};
use nomad3d::query::{RecordingReporter, SimpleCollisions};
use nomad3d::shape::Collider;

#[test]
fn tangent_spheres_do_not_collide() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let a = Collider::new_sphere(point(0.0, 0.0, 0.0), real(1.0));
    let b = Collider::new_sphere(point(0.0, 0.0, 1.75), real(0.75));

    assert!(!collisions.is_colliding(&a, &b));
    assert!(!collisions.is_sphere_and_sphere_colliding(&a, &b));
    assert!(!reporter.has_errors());
}

#[test]
fn spheres_slightly_closer_than_tangency_collide() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let a = Collider::new_sphere(point(0.0, 0.0, 0.0), real(1.0));
    let mut b = Collider::new_sphere(point(0.0, 0.0, 1.75), real(0.75));

    let mut center = b.center();
    center.z -= real(1.0e-6);
    b.set_center(center);

    assert!(collisions.is_colliding(&a, &b));
    assert!(collisions.is_colliding(&b, &a));
    assert!(!reporter.has_errors());
}

#[test]
fn tangent_capsule_and_sphere_do_not_collide() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let capsule = Collider::new_capsule(
        point(0.0, 0.0, 0.0),
        nomad3d::math::Rotation::identity(),
        real(2.0),
        real(0.5),
    );
    let side = Collider::new_sphere(point(1.5, 0.0, 1.0), real(1.0));
    let cap = Collider::new_sphere(point(0.0, 0.0, 3.5), real(1.0));

    assert!(!collisions.is_colliding(&capsule, &side));
    assert!(!collisions.is_colliding(&cap, &capsule));
    assert!(!reporter.has_errors());
}
