//! (The internal representation of) a clause.

use crate::db::EdgeId;

/// A clause of the formula.
///
/// A clause is disabled exactly when it is known to be satisfied by the
/// current partial assignment.
#[derive(Clone, Debug)]
pub struct Clause {
    /// Whether the clause still constrains the formula.
    pub enabled: bool,

    /// The edges incident to the clause, in the order the literals were given.
    pub edges: Vec<EdgeId>,
}

impl Clause {
    pub fn fresh() -> Self {
        Clause {
            enabled: true,
            edges: Vec::default(),
        }
    }
}
