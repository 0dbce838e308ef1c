use crate::math::Real;
use crate::query::details;
use crate::query::{
    CollisionTolerances, ErrorReporter, Penetration, QueryError, Ray, RayIntersection,
};
use crate::shape::{Ball, Capsule, Collider, Cuboid, Segment, ShapeType};

/// Collision tests between boxes, capsules and spheres, plus ray casts and linetests.
///
/// Every query is a pure function of its arguments. Misuse, like an uninitialized collider or a
/// collider of the wrong kind, is reported to the [`ErrorReporter`] and the query answers `false`
/// or `None`.
///
/// Tangent shapes are never considered colliding: two shapes only collide if they overlap by a
/// non-zero volume.
///
/// Coordinates, sizes and distances must stay below `200` in magnitude, see [`Real`]. Larger
/// inputs overflow the fixed-point arithmetic.
#[derive(Copy, Clone)]
pub struct SimpleCollisions<'a> {
    reporter: &'a dyn ErrorReporter,
    tolerances: CollisionTolerances,
}

impl<'a> SimpleCollisions<'a> {
    /// Creates a collision tester reporting its errors to `reporter`, with default tolerances.
    pub fn new(reporter: &'a dyn ErrorReporter) -> Self {
        Self::with_tolerances(reporter, CollisionTolerances::default())
    }

    /// Creates a collision tester reporting its errors to `reporter`.
    pub fn with_tolerances(reporter: &'a dyn ErrorReporter, tolerances: CollisionTolerances) -> Self {
        SimpleCollisions {
            reporter,
            tolerances,
        }
    }

    /// The tolerances used by the queries.
    pub fn tolerances(&self) -> &CollisionTolerances {
        &self.tolerances
    }

    /// Tests if two colliders of any kind are intersecting.
    ///
    /// The result does not depend on the order of `a` and `b`. Uninitialized colliders are
    /// reported and never collide.
    pub fn is_colliding(&self, a: &Collider, b: &Collider) -> bool {
        self.report("SimpleCollisions::is_colliding", self.dispatch(a, b))
    }

    /// Tests if two boxes are intersecting, using the separating axis theorem.
    pub fn is_box_and_box_colliding(&self, box_a: &Collider, box_b: &Collider) -> bool {
        self.report(
            "SimpleCollisions::is_box_and_box_colliding",
            self.box_and_box(box_a, box_b),
        )
    }

    /// Tests if a box and a capsule are intersecting.
    pub fn is_box_and_capsule_colliding(&self, box_: &Collider, capsule: &Collider) -> bool {
        self.report(
            "SimpleCollisions::is_box_and_capsule_colliding",
            self.box_and_capsule(box_, capsule),
        )
    }

    /// Tests if a box and a sphere are intersecting.
    pub fn is_box_and_sphere_colliding(&self, box_: &Collider, sphere: &Collider) -> bool {
        self.report(
            "SimpleCollisions::is_box_and_sphere_colliding",
            self.box_and_sphere(box_, sphere),
        )
    }

    /// Tests if a capsule and a box are intersecting.
    pub fn is_capsule_and_box_colliding(&self, capsule: &Collider, box_: &Collider) -> bool {
        self.is_box_and_capsule_colliding(box_, capsule)
    }

    /// Tests if two capsules are intersecting.
    pub fn is_capsule_and_capsule_colliding(
        &self,
        capsule_a: &Collider,
        capsule_b: &Collider,
    ) -> bool {
        self.report(
            "SimpleCollisions::is_capsule_and_capsule_colliding",
            self.capsule_and_capsule(capsule_a, capsule_b),
        )
    }

    /// Tests if a capsule and a sphere are intersecting.
    pub fn is_capsule_and_sphere_colliding(&self, capsule: &Collider, sphere: &Collider) -> bool {
        self.report(
            "SimpleCollisions::is_capsule_and_sphere_colliding",
            self.capsule_and_sphere(capsule, sphere),
        )
    }

    /// Tests if a sphere and a box are intersecting.
    pub fn is_sphere_and_box_colliding(&self, sphere: &Collider, box_: &Collider) -> bool {
        self.is_box_and_sphere_colliding(box_, sphere)
    }

    /// Tests if a sphere and a capsule are intersecting.
    pub fn is_sphere_and_capsule_colliding(&self, sphere: &Collider, capsule: &Collider) -> bool {
        self.is_capsule_and_sphere_colliding(capsule, sphere)
    }

    /// Tests if two spheres are intersecting.
    pub fn is_sphere_and_sphere_colliding(&self, sphere_a: &Collider, sphere_b: &Collider) -> bool {
        self.report(
            "SimpleCollisions::is_sphere_and_sphere_colliding",
            self.sphere_and_sphere(sphere_a, sphere_b),
        )
    }

    /// Estimates how deep two boxes overlap.
    ///
    /// Returns the separating-axis-theorem axis with the smallest overlap, or `None` if the
    /// boxes do not intersect. The sign of the axis is arbitrary.
    pub fn box_and_box_penetration(&self, box_a: &Collider, box_b: &Collider) -> Option<Penetration> {
        let result = cuboid(box_a, "box_a").and_then(|c1| {
            let c2 = cuboid(box_b, "box_b")?;
            Ok(details::cuboid_cuboid_find_min_penetration(
                &box_a.position,
                c1,
                &box_b.position,
                c2,
            ))
        });
        self.report("SimpleCollisions::box_and_box_penetration", result)
    }

    /// Casts a ray against a sphere.
    ///
    /// `ray.dir` must be normalized. If the ray starts inside of the sphere, the hit is where it
    /// leaves the sphere. Spheres behind the ray are not hit.
    pub fn raycast_with_sphere(&self, ray: &Ray, sphere: &Collider) -> Option<RayIntersection> {
        let result = ball(sphere, "sphere").map(|b| {
            details::ray_intersection_with_ball(&sphere.center(), b.radius, ray)
        });
        self.report("SimpleCollisions::raycast_with_sphere", result)
    }

    /// Casts a ray against a box.
    ///
    /// `ray.dir` must be normalized. If the ray starts inside of the box, the hit is where it
    /// leaves the box. Rays only running along the surface of the box, or leaving it from its
    /// surface, do not hit.
    pub fn raycast_with_box(&self, ray: &Ray, box_: &Collider) -> Option<RayIntersection> {
        let result = cuboid(box_, "box").map(|c| {
            details::ray_intersection_with_cuboid(&box_.position, c, ray, &self.tolerances)
        });
        self.report("SimpleCollisions::raycast_with_box", result)
    }

    /// Tests a line segment against a box.
    ///
    /// The time of impact is the distance from `line.a` to the first hit.
    pub fn linetest_with_box(&self, line: &Segment, box_: &Collider) -> Option<RayIntersection> {
        let result = cuboid(box_, "box").map(|c| {
            details::line_intersection_with_cuboid(&box_.position, c, line, &self.tolerances)
        });
        self.report("SimpleCollisions::linetest_with_box", result)
    }

    /// Tests a line segment against a capsule.
    ///
    /// The time of impact is the parameter in `[0, 1]` along `line` of its point closest to the
    /// capsule.
    pub fn linetest_with_capsule(&self, line: &Segment, capsule: &Collider) -> Option<RayIntersection> {
        let result = self::capsule(capsule, "capsule").map(|c| {
            let medial = c.local_segment().transformed(&capsule.position);
            self.linetest_with_capsule_segment(line, &medial, c.radius)
        });
        self.report("SimpleCollisions::linetest_with_capsule", result)
    }

    /// Tests a line segment against a capsule given by its medial segment and radius.
    ///
    /// Touching the capsule surface counts as a hit.
    pub fn linetest_with_capsule_segment(
        &self,
        line: &Segment,
        medial: &Segment,
        radius: Real,
    ) -> Option<RayIntersection> {
        details::line_intersection_with_capsule_segment(
            line,
            medial,
            radius,
            self.tolerances.segment_degeneracy,
        )
    }

    fn report<T: Default>(&self, context: &str, result: Result<T, QueryError>) -> T {
        result.unwrap_or_else(|err| {
            self.reporter.report_error(context, &err.to_string());
            T::default()
        })
    }

    fn dispatch(&self, a: &Collider, b: &Collider) -> Result<bool, QueryError> {
        match (a.shape_type(), b.shape_type()) {
            (ShapeType::Uninitialized, _) => Err(QueryError::UninitializedCollider { argument: "a" }),
            (_, ShapeType::Uninitialized) => Err(QueryError::UninitializedCollider { argument: "b" }),
            (ShapeType::Box, ShapeType::Box) => self.box_and_box(a, b),
            (ShapeType::Box, ShapeType::Capsule) => self.box_and_capsule(a, b),
            (ShapeType::Box, ShapeType::Sphere) => self.box_and_sphere(a, b),
            (ShapeType::Capsule, ShapeType::Box) => self.box_and_capsule(b, a),
            (ShapeType::Capsule, ShapeType::Capsule) => self.capsule_and_capsule(a, b),
            (ShapeType::Capsule, ShapeType::Sphere) => self.capsule_and_sphere(a, b),
            (ShapeType::Sphere, ShapeType::Box) => self.box_and_sphere(b, a),
            (ShapeType::Sphere, ShapeType::Capsule) => self.capsule_and_sphere(b, a),
            (ShapeType::Sphere, ShapeType::Sphere) => self.sphere_and_sphere(a, b),
        }
    }

    fn box_and_box(&self, box_a: &Collider, box_b: &Collider) -> Result<bool, QueryError> {
        let c1 = cuboid(box_a, "box_a")?;
        let c2 = cuboid(box_b, "box_b")?;
        Ok(details::intersection_test_cuboid_cuboid(
            &box_a.position,
            c1,
            &box_b.position,
            c2,
        ))
    }

    fn box_and_capsule(&self, box_: &Collider, capsule: &Collider) -> Result<bool, QueryError> {
        let c1 = cuboid(box_, "box")?;
        let c2 = self::capsule(capsule, "capsule")?;
        Ok(details::intersection_test_cuboid_capsule(
            &box_.position,
            c1,
            &capsule.position,
            c2,
            &self.tolerances,
        ))
    }

    fn box_and_sphere(&self, box_: &Collider, sphere: &Collider) -> Result<bool, QueryError> {
        let c1 = cuboid(box_, "box")?;
        let b2 = ball(sphere, "sphere")?;
        Ok(details::intersection_test_cuboid_ball(
            &box_.position,
            c1,
            &sphere.center(),
            b2,
        ))
    }

    fn capsule_and_capsule(
        &self,
        capsule_a: &Collider,
        capsule_b: &Collider,
    ) -> Result<bool, QueryError> {
        let c1 = capsule(capsule_a, "capsule_a")?;
        let c2 = capsule(capsule_b, "capsule_b")?;
        Ok(details::intersection_test_capsule_capsule(
            &c1.local_segment().transformed(&capsule_a.position),
            c1.radius,
            &c2.local_segment().transformed(&capsule_b.position),
            c2.radius,
            self.tolerances.segment_degeneracy,
        ))
    }

    fn capsule_and_sphere(&self, capsule: &Collider, sphere: &Collider) -> Result<bool, QueryError> {
        let c1 = self::capsule(capsule, "capsule")?;
        let b2 = ball(sphere, "sphere")?;
        Ok(details::intersection_test_capsule_ball(
            &c1.local_segment().transformed(&capsule.position),
            c1.radius,
            &sphere.center(),
            b2.radius,
        ))
    }

    fn sphere_and_sphere(&self, sphere_a: &Collider, sphere_b: &Collider) -> Result<bool, QueryError> {
        let b1 = ball(sphere_a, "sphere_a")?;
        let b2 = ball(sphere_b, "sphere_b")?;
        Ok(details::intersection_test_ball_ball(
            &sphere_a.center(),
            b1,
            &sphere_b.center(),
            b2,
        ))
    }
}

fn mismatch(collider: &Collider, argument: &'static str, expected: ShapeType) -> QueryError {
    QueryError::ShapeMismatch {
        argument,
        expected,
        found: collider.shape_type(),
    }
}

fn cuboid<'c>(collider: &'c Collider, argument: &'static str) -> Result<&'c Cuboid, QueryError> {
    collider
        .as_cuboid()
        .ok_or_else(|| mismatch(collider, argument, ShapeType::Box))
}

fn capsule<'c>(collider: &'c Collider, argument: &'static str) -> Result<&'c Capsule, QueryError> {
    collider
        .as_capsule()
        .ok_or_else(|| mismatch(collider, argument, ShapeType::Capsule))
}

fn ball<'c>(collider: &'c Collider, argument: &'static str) -> Result<&'c Ball, QueryError> {
    collider
        .as_ball()
        .ok_or_else(|| mismatch(collider, argument, ShapeType::Sphere))
}
