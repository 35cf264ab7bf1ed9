/*!
Determines the satisfiability of the formula in a context.

# Overview

A solve is a [decimation](crate::procedures::decimate) run with its
[Walksat](crate::procedures::decimate::DecimationOutcome::Walksat) handoff
honoured:

```rust,ignore
match self.decimation_solve(fraction) {
    DecimationOutcome::Satisfiable => Report::Satisfiable,

    DecimationOutcome::Walksat => match self.walksat() {
        WalksatOutcome::Satisfiable => Report::Satisfiable,
        WalksatOutcome::FlipsExhausted => Report::FlipsExhausted,
    },

    ...
}
```

The context state records what the report establishes:

- A satisfying valuation is a valuation, however it was found ---
  [Satisfiable](ContextState).
- A contradiction found before any variable was fixed heuristically is a
  refutation of the formula itself --- [Unsatisfiable](ContextState).
- Everything else (a contradiction under decimated fixings, non-convergence,
  an exhausted walk, cancellation) leaves satisfiability open ---
  [Inconclusive](ContextState). A retry with a fresh seed may land elsewhere.

# Example

```rust
# use cavity_sat::config::Config;
# use cavity_sat::context::Context;
# use cavity_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(&[1]).is_ok());
assert!(the_context.add_clause(&[-1, 2]).is_ok());

assert_eq!(the_context.solve(), Report::Satisfiable);
assert_eq!(the_context.graph.value_of(0), Some(true));
assert_eq!(the_context.graph.value_of(1), Some(true));
```
*/

use crate::{
    context::{ContextState, GenericContext},
    procedures::{decimate::DecimationOutcome, walksat::WalksatOutcome},
    reports::Report,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Solves the formula of the context, unless already solved or cancelled.
    pub fn solve(&mut self) -> Report {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            _ => return self.report(),
        }
        self.state = ContextState::Solving;

        let fraction = self.config.fraction;

        match self.decimation_solve(fraction) {
            DecimationOutcome::Satisfiable => {
                self.state = ContextState::Satisfiable;
                Report::Satisfiable
            }

            DecimationOutcome::Contradiction => {
                self.state = match self.counters.decimated_assignments {
                    0 => ContextState::Unsatisfiable,
                    _ => ContextState::Inconclusive(Report::Contradiction),
                };
                Report::Contradiction
            }

            DecimationOutcome::Unconverged => {
                self.state = ContextState::Inconclusive(Report::Unconverged);
                Report::Unconverged
            }

            DecimationOutcome::Cancelled => {
                self.state = ContextState::Inconclusive(Report::Cancelled);
                Report::Cancelled
            }

            DecimationOutcome::Walksat => match self.walksat() {
                WalksatOutcome::Satisfiable => {
                    self.state = ContextState::Satisfiable;
                    Report::Satisfiable
                }

                WalksatOutcome::FlipsExhausted => {
                    self.state = ContextState::Inconclusive(Report::FlipsExhausted);
                    Report::FlipsExhausted
                }
            },
        }
    }
}
