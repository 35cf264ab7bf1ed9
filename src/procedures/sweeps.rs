/*!
Iteration of survey updates to a fixpoint.

# Overview

A run performs up to [sp_max_iterations](crate::config::Config) sweeps.
Each sweep shuffles the enabled clauses with the context rng and applies the
[survey update](crate::procedures::surveys) to each in turn, tracking the
largest survey change of the sweep.
Updates land in place, so a clause later in the shuffle sees the surveys
written by the clauses before it --- which is what keeps the subproduct
cache coherent within a sweep.

A sweep whose largest change is within
[sp_epsilon](crate::config::Config::sp_epsilon) ends the run:

- If the change is (numerically) zero *and* every live survey is
  (numerically) zero the fixpoint is trivial: the surveys carry no
  structural information, and the caller should fall back to local search.
- Otherwise the surveys have converged, and biases may be read from them.

Exhausting the sweep budget ends the run as [Unconverged](SweepsOutcome).

The subproduct cache is rebuilt before the first sweep: simplification
disables edges without patching the cache, so whatever state the cache is in
when a run begins cannot be trusted.
*/

use rand::seq::SliceRandom;

use crate::{
    config::ZERO_EPSILON,
    context::GenericContext,
    misc::log::targets::{self},
};

/// How a run of sweeps came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepsOutcome {
    /// The surveys reached a (non-trivial) fixpoint.
    Converged,

    /// The surveys reached the all-zero fixpoint.
    Trivial,

    /// The sweep budget was exhausted without convergence.
    Unconverged,

    /// Cancellation was requested.
    Cancelled,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Sweeps survey updates over the enabled clauses until the surveys
    /// settle, the sweep budget runs out, or cancellation is requested.
    pub fn survey_propagation(&mut self) -> SweepsOutcome {
        self.rebuild_subproducts();

        for sweep in 0..self.config.sp_max_iterations {
            if self.cancelled() {
                return SweepsOutcome::Cancelled;
            }

            let mut enabled = self.graph.enabled_clauses();
            enabled.shuffle(&mut self.rng);

            let mut max_delta: f64 = 0.0;
            for clause in enabled {
                let clause_delta = self.update_clause_surveys(clause);
                if clause_delta > max_delta {
                    max_delta = clause_delta;
                }
            }

            self.counters.survey_sweeps += 1;
            log::trace!(target: targets::SURVEYS, "Sweep {sweep}: max survey delta {max_delta:.3e}.");

            if max_delta <= self.config.sp_epsilon {
                if max_delta < ZERO_EPSILON && self.graph.all_surveys_trivial() {
                    log::debug!(target: targets::SURVEYS, "Trivial fixpoint after {sweep} sweeps.");
                    return SweepsOutcome::Trivial;
                }

                log::debug!(target: targets::SURVEYS, "Converged after {sweep} sweeps.");
                return SweepsOutcome::Converged;
            }
        }

        log::debug!(target: targets::SURVEYS, "No fixpoint within the sweep budget.");
        SweepsOutcome::Unconverged
    }
}
