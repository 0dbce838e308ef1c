use crate::shape::ShapeType;

/// The failures a collider query can run into.
///
/// None of them is ever returned from the public query methods of
/// [`SimpleCollisions`](crate::query::SimpleCollisions): they are handed to the
/// [`ErrorReporter`](crate::query::ErrorReporter) and the query answers with its
/// safe default instead (`false` or `None`).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A query received a collider of the wrong kind.
    #[error("collider {argument} was not a {expected} but instead a {found}")]
    ShapeMismatch {
        /// The name of the argument holding the wrong collider.
        argument: &'static str,
        /// The shape type the query works with.
        expected: ShapeType,
        /// The shape type actually found.
        found: ShapeType,
    },
    /// A collider that was never given a shape was passed to a query.
    #[error("collider {argument} was not initialized")]
    UninitializedCollider {
        /// The name of the argument holding the uninitialized collider.
        argument: &'static str,
    },
}
