/*!
The decimation loop.

# Overview

Decimation alternates message passing with simplification:

```none
          +--------------------+
  +------>| survey_propagation |----> Unconverged / Cancelled
  |       +--------------------+
  |                 |
  |                 | converged                trivial
  |                 ⌄                            |
  |       +--------------------+                 ⌄
  |       |   evaluate biases  |------------> Walksat
  |       +--------------------+   paramagnetic
  |                 |
  |                 ⌄
  |       +--------------------+
  +-------| fix a fraction, UP |----> Contradiction / Satisfiable
          +--------------------+
```

Each round runs surveys to a fixpoint, reads per-variable biases off the
subproducts, and fixes the most strongly biased fraction of the unassigned
variables to their preferred values, simplifying after each fixing.
A round that survives returns to the top with a strictly smaller unassigned
set, so the loop terminates.

Two outcomes hand the formula to local search rather than deciding it: a
trivial survey fixpoint, and a *paramagnetic* bias profile --- a mean
max-bias below
[paramagnetic_threshold](crate::config::Config::paramagnetic_threshold),
on which decimation would fix near-arbitrary variables.

Before any surveys are run, unit clauses of the input are propagated to
closure.
A contradiction at that stage refutes the formula itself (no heuristic
fixing was involved), and a formula satisfied at that stage needs no
surveys at all.
*/

use crate::{
    context::GenericContext,
    db::{ClauseId, VariableId},
    misc::log::targets::{self},
    procedures::sweeps::SweepsOutcome,
};

/// How the decimation loop came to an end.
///
/// [Walksat](DecimationOutcome::Walksat) is a handoff, not a verdict: the
/// caller owns the local search fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecimationOutcome {
    /// Every clause is satisfied by the (partial) valuation.
    Satisfiable,

    /// Simplification derived an empty clause.
    Contradiction,

    /// Surveys failed to reach a fixpoint within the sweep budget.
    Unconverged,

    /// Surveys carry no usable structure; local search should take over.
    Walksat,

    /// Cancellation was requested.
    Cancelled,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Decimates the formula, fixing `fraction` of the unassigned variables
    /// per round, until a terminal outcome is reached.
    pub fn decimation_solve(&mut self, fraction: f64) -> DecimationOutcome {
        // Unit clauses of the input resolve without surveys.
        for clause in 0..self.graph.clause_count() as ClauseId {
            if !self.unit_propagation(clause) {
                return DecimationOutcome::Contradiction;
            }
        }
        if self.graph.is_satisfied() {
            return DecimationOutcome::Satisfiable;
        }

        // Random initialisation of surveys.
        for edge in 0..self.graph.edges.len() {
            let survey: f64 = self.rng.random();
            self.graph.edges[edge].survey = survey;
        }

        loop {
            if self.cancelled() {
                return DecimationOutcome::Cancelled;
            }

            match self.survey_propagation() {
                SweepsOutcome::Converged => {}
                SweepsOutcome::Trivial => return DecimationOutcome::Walksat,
                SweepsOutcome::Unconverged => return DecimationOutcome::Unconverged,
                SweepsOutcome::Cancelled => return DecimationOutcome::Cancelled,
            }

            // Biases for the unassigned variables, and their summed max bias.
            let mut unassigned: Vec<VariableId> = Vec::default();
            let mut bias_sum = 0.0;

            for v in 0..self.graph.variables.len() {
                if self.graph.variables[v].assigned() {
                    continue;
                }

                self.graph.variables[v].evaluate_bias();

                let variable = &self.graph.variables[v];
                bias_sum += variable.h_plus.max(variable.h_minus);
                unassigned.push(v as VariableId);
            }
            debug_assert!(!unassigned.is_empty());

            let mean_max_bias = bias_sum / unassigned.len() as f64;
            if mean_max_bias < self.config.paramagnetic_threshold {
                log::debug!(target: targets::DECIMATION, "Paramagnetic: mean max bias {mean_max_bias:.3e}.");
                return DecimationOutcome::Walksat;
            }

            // Fix the most strongly biased fraction, at least one variable.
            let quota = 1.max((fraction * unassigned.len() as f64) as usize);

            unassigned.sort_by(|a, b| {
                let a_eval = self.graph.variables[*a as usize].eval;
                let b_eval = self.graph.variables[*b as usize].eval;
                b_eval.total_cmp(&a_eval)
            });

            let mut fixed = 0;
            for variable in unassigned {
                if fixed == quota {
                    break;
                }

                // Unit propagation within this batch may have got here first.
                if self.graph.variables[variable as usize].assigned() {
                    continue;
                }

                // Earlier fixings in the batch changed the graph, so take the
                // bias fresh before choosing a value.
                self.graph.variables[variable as usize].evaluate_bias();
                let value = {
                    let v = &self.graph.variables[variable as usize];
                    v.h_plus > v.h_minus
                };

                if !self.assign_variable(variable, value) {
                    return DecimationOutcome::Contradiction;
                }

                self.counters.decimated_assignments += 1;
                fixed += 1;
            }

            self.counters.decimation_rounds += 1;
            log::debug!(
                target: targets::DECIMATION,
                "Round {}: fixed {fixed}, {} variables unassigned.",
                self.counters.decimation_rounds,
                self.graph.unassigned_count(),
            );

            if self.graph.is_satisfied() {
                return DecimationOutcome::Satisfiable;
            }
        }
    }
}
