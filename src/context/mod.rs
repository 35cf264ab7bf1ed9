/*!
The context --- to which a formula is added and within which a solve takes place.

Strictly, a [GenericContext] and a [Context].

The generic context is parameterised to the source of randomness, which is
all a solve requires beyond the formula and the configuration.
The canonical [Context] fixes the source to the crate's
[MinimalPCG32](crate::generic::minimal_pcg::MinimalPCG32).

# Example
```rust
# use cavity_sat::config::Config;
# use cavity_sat::context::Context;
# use cavity_sat::reports::Report;
let mut the_context = Context::from_config(Config {
    seed: 3,
    ..Config::default()
});

assert!(the_context.add_clause(&[1, 2]).is_ok());
assert!(the_context.add_clause(&[-1, 2]).is_ok());
assert!(the_context.add_clause(&[1, -2]).is_ok());

assert_eq!(the_context.solve(), Report::Satisfiable);
assert!(the_context.graph.formula_satisfied());
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No formula has been added.
    Configuration,

    /// A formula is being, or has been, added.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is satisfied by the current valuation.
    Satisfiable,

    /// The formula was shown unsatisfiable by unit propagation alone.
    Unsatisfiable,

    /// The solve terminated without settling satisfiability, for the noted
    /// reason.
    Inconclusive(crate::reports::Report),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Inconclusive(report) => write!(f, "Inconclusive ({report})"),
        }
    }
}
