/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A satisfying assignment was found.
    Satisfiable,

    /// Simplification derived an empty clause.
    ///
    /// When this happens before any variable is fixed by decimation the
    /// formula is unsatisfiable.
    /// Otherwise only the run failed, and a retry with a fresh seed may fare
    /// better.
    Contradiction,

    /// Survey updates failed to stabilise within the sweep budget.
    Unconverged,

    /// Message passing gave no structural information, and local search gave
    /// no assignment within its flip budget.
    FlipsExhausted,

    /// The solve was cancelled.
    Cancelled,

    /// No solve has settled anything, for the formula is yet to be solved.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Self::Unknown
            }
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Contradiction,
            ContextState::Inconclusive(report) => report,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Contradiction => write!(f, "Contradiction"),
            Self::Unconverged => write!(f, "Unconverged"),
            Self::FlipsExhausted => write!(f, "FlipsExhausted"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
