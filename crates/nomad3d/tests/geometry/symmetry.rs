use nomad3d::math::{real, Point, Real, Rotation, Vector};
use nomad3d::query::{RecordingReporter, SimpleCollisions};
use nomad3d::shape::{Collider, ShapeType};

const KINDS: [ShapeType; 3] = [ShapeType::Box, ShapeType::Capsule, ShapeType::Sphere];

struct ColliderGenerator {
    rng: oorandom::Rand32,
}

impl ColliderGenerator {
    fn new(seed: u64) -> Self {
        ColliderGenerator {
            rng: oorandom::Rand32::new(seed),
        }
    }

    fn uniform(&mut self, min: f64, max: f64) -> Real {
        real(min + (max - min) * self.rng.rand_float() as f64)
    }

    fn point(&mut self) -> Point {
        Point::new(
            self.uniform(-2.0, 2.0),
            self.uniform(-2.0, 2.0),
            self.uniform(-2.0, 2.0),
        )
    }

    fn rotation(&mut self) -> Rotation {
        let pi = core::f64::consts::PI;
        Rotation::from_euler_angles(
            self.uniform(-pi, pi),
            self.uniform(-pi, pi),
            self.uniform(-pi, pi),
        )
    }

    fn collider(&mut self, kind: ShapeType) -> Collider {
        let center = self.point();

        match kind {
            ShapeType::Box => {
                let rotation = self.rotation();
                let half_extents = Vector::new(
                    self.uniform(0.2, 1.5),
                    self.uniform(0.2, 1.5),
                    self.uniform(0.2, 1.5),
                );
                Collider::new_box(center, rotation, half_extents)
            }
            ShapeType::Capsule => {
                let rotation = self.rotation();
                let half_height = self.uniform(0.1, 1.5);
                let radius = self.uniform(0.1, 1.0);
                Collider::new_capsule(center, rotation, half_height, radius)
            }
            ShapeType::Sphere => Collider::new_sphere(center, self.uniform(0.1, 1.5)),
            ShapeType::Uninitialized => Collider::default(),
        }
    }
}

#[test]
fn collision_is_independent_of_argument_order() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let mut generator = ColliderGenerator::new(1234);
    let mut colliding = 0;
    let mut separated = 0;

    for kind_a in KINDS {
        for kind_b in KINDS {
            for _ in 0..150 {
                let a = generator.collider(kind_a);
                let b = generator.collider(kind_b);

                let ab = collisions.is_colliding(&a, &b);
                let ba = collisions.is_colliding(&b, &a);
                assert_eq!(ab, ba, "{kind_a} vs {kind_b}: {a:?} and {b:?}");

                if ab {
                    colliding += 1;
                } else {
                    separated += 1;
                }
            }
        }
    }

    // Both outcomes must have been exercised.
    assert!(colliding > 0 && separated > 0);
    assert!(!reporter.has_errors());
}

// The same capsule, with the endpoints of its medial segment swapped.
fn flipped(capsule: &Collider) -> Collider {
    let half_turn = Rotation::from_axis_angle(&Vector::x_axis(), real(core::f64::consts::PI));
    let mut flipped = *capsule;
    flipped.set_rotation(capsule.rotation() * half_turn);
    flipped
}

fn with_radius(capsule: &Collider, radius: Real) -> Collider {
    Collider::new_capsule(
        capsule.center(),
        capsule.rotation(),
        capsule.capsule_half_height().unwrap(),
        radius,
    )
}

#[test]
fn box_capsule_collision_is_independent_of_the_capsule_orientation() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let mut generator = ColliderGenerator::new(4321);
    let margin = real(1.0e-3);
    let mut colliding = 0;
    let mut separated = 0;

    for _ in 0..600 {
        let box_ = generator.collider(ShapeType::Box);
        let capsule = generator.collider(ShapeType::Capsule);
        let radius = capsule.capsule_radius().unwrap();

        // Flipping the capsule moves its endpoints by a rounding error. Skip the pairs that are
        // close enough to tangency for it to matter.
        let thinner = collisions.is_colliding(&box_, &with_radius(&capsule, radius - margin));
        let thicker = collisions.is_colliding(&box_, &with_radius(&capsule, radius + margin));
        if thinner != thicker {
            continue;
        }

        let result = collisions.is_colliding(&box_, &capsule);
        assert_eq!(result, thinner, "{box_:?} and {capsule:?}");
        assert_eq!(
            result,
            collisions.is_colliding(&box_, &flipped(&capsule)),
            "{box_:?} and {capsule:?}"
        );

        if result {
            colliding += 1;
        } else {
            separated += 1;
        }
    }

    assert!(colliding > 0 && separated > 0);
    assert!(!reporter.has_errors());
}

#[test]
fn dispatcher_agrees_with_the_pairwise_tests() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let mut generator = ColliderGenerator::new(99);

    for _ in 0..100 {
        let box_ = generator.collider(ShapeType::Box);
        let capsule = generator.collider(ShapeType::Capsule);
        let sphere = generator.collider(ShapeType::Sphere);
        let other_box = generator.collider(ShapeType::Box);
        let other_capsule = generator.collider(ShapeType::Capsule);
        let other_sphere = generator.collider(ShapeType::Sphere);

        assert_eq!(
            collisions.is_colliding(&box_, &other_box),
            collisions.is_box_and_box_colliding(&box_, &other_box)
        );
        assert_eq!(
            collisions.is_colliding(&box_, &capsule),
            collisions.is_box_and_capsule_colliding(&box_, &capsule)
        );
        assert_eq!(
            collisions.is_colliding(&sphere, &box_),
            collisions.is_sphere_and_box_colliding(&sphere, &box_)
        );
        assert_eq!(
            collisions.is_colliding(&capsule, &other_capsule),
            collisions.is_capsule_and_capsule_colliding(&capsule, &other_capsule)
        );
        assert_eq!(
            collisions.is_colliding(&sphere, &capsule),
            collisions.is_sphere_and_capsule_colliding(&sphere, &capsule)
        );
        assert_eq!(
            collisions.is_colliding(&sphere, &other_sphere),
            collisions.is_sphere_and_sphere_colliding(&sphere, &other_sphere)
        );
    }

    assert!(!reporter.has_errors());
}

#[test]
fn repeated_queries_give_identical_results() {
    let reporter = RecordingReporter::new();
    let collisions = SimpleCollisions::new(&reporter);
    let mut generator = ColliderGenerator::new(7);

    for kind_a in KINDS {
        for kind_b in KINDS {
            for _ in 0..20 {
                let a = generator.collider(kind_a);
                let b = generator.collider(kind_b);
                let a_before = a;
                let b_before = b;

                let first = collisions.is_colliding(&a, &b);

                for _ in 0..3 {
                    assert_eq!(collisions.is_colliding(&a, &b), first);
                }

                // Queries never modify their inputs.
                assert_eq!(a, a_before);
                assert_eq!(b, b_before);
            }
        }
    }

    let box_a = generator.collider(ShapeType::Box);
    let box_b = generator.collider(ShapeType::Box);
    assert_eq!(
        collisions.box_and_box_penetration(&box_a, &box_b),
        collisions.box_and_box_penetration(&box_a, &box_b)
    );
    assert!(!reporter.has_errors());
}
