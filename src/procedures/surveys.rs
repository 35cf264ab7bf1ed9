/*!
The survey update of a single clause, and the subproduct cache behind it.

# Overview

A survey on an edge `(v, C)` approximates the probability that clause `C`
forces variable `v` to satisfy it, were the edge removed from the graph.
One call to [update_clause_surveys](GenericContext::update_clause_surveys)
recomputes the surveys of every enabled edge of one clause from the cavity
fields of the incident variables, and reports the largest change.

For an edge `(v, C)` the *subsurvey* η is the probability that the other
clauses of `v` constrain it to violate `C`.
With `p` the product of `1 − survey` over the enabled positive edges of `v`
and `m` its negative twin, the products with `C`'s own edge divided out give
the weights for `v` being pushed against `C` (`wn`) or towards `C` (`wt`),
and `η = wn / (wn + wt)`.
The new survey of each edge is then the product of the subsurveys of the
*other* edges of `C`, with subsurveys below [ZERO_EPSILON] factored out
through a zero count so a single vanishing subsurvey does not erase the
information carried by the rest.

# The subproduct cache

Recomputing `p` and `m` from scratch for every update would cost a factor of
the mean variable degree per sweep, so each variable carries the products as
state and the update [patches](crate::db::variable::Variable::patch_survey)
them in place as each survey moves.

Division keeps the patch cheap, and saturation makes division delicate: a
survey within [ZERO_EPSILON] of one would contribute a factor of zero that
could never be divided back out.
Saturated surveys are therefore counted (`pzero`, `mzero`) rather than
multiplied, and the update algebra branches on those counts:

- `pzero == 0` --- divide the edge's own factor out of `p`.
- `pzero == 1` and this edge saturates --- the edge is the sole saturator,
  and `p` already excludes it.
- otherwise --- some *other* edge contributes a hard zero, so the cavity
  product is zero.

[rebuild_subproducts](GenericContext::rebuild_subproducts) establishes the
cache from scratch; it must be called before a run of sweeps, as
simplification disables edges without patching the cache.
*/

use crate::{
    config::ZERO_EPSILON,
    context::GenericContext,
    db::ClauseId,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Rebuilds the subproduct cache of every unassigned variable from the
    /// surveys of its enabled edges.
    pub fn rebuild_subproducts(&mut self) {
        for v in 0..self.graph.variables.len() {
            if self.graph.variables[v].assigned() {
                continue;
            }

            self.graph.variables[v].reset_subproducts();

            for i in 0..self.graph.variables[v].edges.len() {
                let edge_id = self.graph.variables[v].edges[i] as usize;
                let edge = &self.graph.edges[edge_id];
                let (enabled, polarity, survey) = (edge.enabled, edge.polarity, edge.survey);

                if enabled {
                    self.graph.variables[v].absorb_survey(polarity, survey);
                }
            }
        }
    }

    /// Updates the survey of every enabled edge of a clause, patching the
    /// subproduct cache of each incident variable in step, and returns the
    /// largest absolute survey change within the clause.
    ///
    /// Edges are visited in their stored order within the clause, both to
    /// collect subsurveys and to write surveys back, and updates apply in
    /// place --- a clause updated later in a sweep sees the surveys written
    /// by the clauses before it.
    pub fn update_clause_surveys(&mut self, clause: ClauseId) -> f64 {
        let edge_count = self.graph.clauses[clause as usize].edges.len();

        let mut subsurveys: Vec<f64> = Vec::with_capacity(edge_count);
        let mut zeros = 0;
        let mut subsurvey_product = 1.0;

        // First pass: the subsurvey of each enabled edge, tracking zeros.
        for i in 0..edge_count {
            let edge_id = self.graph.clauses[clause as usize].edges[i] as usize;
            let edge = &self.graph.edges[edge_id];
            if !edge.enabled {
                continue;
            }

            let variable = &self.graph.variables[edge.variable as usize];

            let (wn, wt) = match edge.polarity {
                true => {
                    let m = if variable.mzero > 0 { 0.0 } else { variable.m };
                    let p = if variable.pzero == 0 {
                        variable.p / (1.0 - edge.survey)
                    } else if variable.pzero == 1 && 1.0 - edge.survey < ZERO_EPSILON {
                        variable.p
                    } else {
                        0.0
                    };

                    (p * (1.0 - m), m)
                }

                false => {
                    let p = if variable.pzero > 0 { 0.0 } else { variable.p };
                    let m = if variable.mzero == 0 {
                        variable.m / (1.0 - edge.survey)
                    } else if variable.mzero == 1 && 1.0 - edge.survey < ZERO_EPSILON {
                        variable.m
                    } else {
                        0.0
                    };

                    (m * (1.0 - p), p)
                }
            };

            // A zero denominator means the variable is forced both ways, which
            // unit propagation rules out before surveys are run.
            debug_assert!(wn + wt > 0.0);
            let subsurvey = wn / (wn + wt);

            if subsurvey < ZERO_EPSILON {
                zeros += 1;
            } else {
                subsurvey_product *= subsurvey;
            }
            subsurveys.push(subsurvey);
        }

        let mut max_delta: f64 = 0.0;

        // Second pass: the new survey of each enabled edge, with the cache
        // patched as each survey is written.
        let mut visited = 0;
        for i in 0..edge_count {
            let edge_id = self.graph.clauses[clause as usize].edges[i] as usize;
            if !self.graph.edges[edge_id].enabled {
                continue;
            }

            let subsurvey = subsurveys[visited];
            visited += 1;

            let new_survey = if zeros == 0 {
                subsurvey_product / subsurvey
            } else if zeros == 1 && subsurvey < ZERO_EPSILON {
                // The sole vanishing subsurvey is this edge's own, which the
                // product over the others excludes anyway.
                subsurvey_product
            } else {
                0.0
            };

            let edge = &self.graph.edges[edge_id];
            let (variable, polarity, old_survey) = (edge.variable, edge.polarity, edge.survey);

            self.graph.variables[variable as usize].patch_survey(polarity, old_survey, new_survey);

            let delta = (old_survey - new_survey).abs();
            if delta > max_delta {
                max_delta = delta;
            }

            self.graph.edges[edge_id].survey = new_survey;
        }

        max_delta
    }
}

#[cfg(test)]
mod survey_tests {
    use rand::Rng;

    use crate::{config::Config, context::Context};

    fn randomised_context(seed: u64, variables: usize, alpha: f64) -> Context {
        let mut the_context = Context::from_config(Config {
            seed,
            ..Config::default()
        });
        the_context.random_ksat(variables, alpha, 3);

        for edge in 0..the_context.graph.edges.len() {
            let survey: f64 = the_context.rng.random();
            the_context.graph.edges[edge].survey = survey;
        }
        the_context.rebuild_subproducts();

        the_context
    }

    #[test]
    fn patched_subproducts_match_a_rebuild() {
        for round in 0..50 {
            let mut the_context = randomised_context(round + 1, 30, 4.0);

            for clause in the_context.graph.enabled_clauses() {
                the_context.update_clause_surveys(clause);
            }

            let patched: Vec<(f64, f64, u32, u32)> = the_context
                .graph
                .variables
                .iter()
                .map(|v| (v.p, v.m, v.pzero, v.mzero))
                .collect();

            the_context.rebuild_subproducts();

            for (v, (p, m, pzero, mzero)) in patched.into_iter().enumerate() {
                let fresh = &the_context.graph.variables[v];
                assert!(
                    (p - fresh.p).abs() < 1e-9,
                    "p drifted on variable {v} of round {round}"
                );
                assert!(
                    (m - fresh.m).abs() < 1e-9,
                    "m drifted on variable {v} of round {round}"
                );
                assert_eq!(pzero, fresh.pzero);
                assert_eq!(mzero, fresh.mzero);
            }
        }
    }

    #[test]
    fn biases_are_normalised() {
        let mut the_context = randomised_context(7, 30, 4.0);

        for clause in the_context.graph.enabled_clauses() {
            the_context.update_clause_surveys(clause);
        }

        for v in 0..the_context.graph.variables.len() {
            the_context.graph.variables[v].evaluate_bias();
            let variable = &the_context.graph.variables[v];

            assert!((variable.h_plus + variable.h_minus + variable.h_zero - 1.0).abs() < 1e-9);
            assert!((variable.eval - (variable.h_plus - variable.h_minus).abs()).abs() < 1e-9);
        }
    }

    #[test]
    fn surveys_stay_within_the_unit_interval() {
        let mut the_context = randomised_context(13, 30, 4.2);

        for _ in 0..3 {
            for clause in the_context.graph.enabled_clauses() {
                the_context.update_clause_surveys(clause);
            }
        }

        for edge in &the_context.graph.edges {
            assert!((0.0..=1.0).contains(&edge.survey));
        }
    }
}
