/*!
Local search over the simplified formula.

Called when message passing has nothing further to say --- the surveys hit
the trivial fixpoint, or the bias profile went paramagnetic.
At that point the remaining (enabled) clauses constrain the remaining
(unassigned) variables loosely, which is the regime random walk local search
is good at.

The procedure is the classic noisy one: keep a trial assignment of the
unassigned variables, and while some enabled clause is unsatisfied pick one
of them at random and flip one of its variables --- a uniformly random one
with probability [walksat_noise](crate::config::Config::walksat_noise), and
otherwise the one breaking the fewest currently satisfied clauses.
Per-clause counts of satisfied literals make the break counts cheap.

Success completes the context valuation with the trial values.
The flip budget defaults to 100 · (variable count) unless
[walksat_max_flips](crate::config::Config::walksat_max_flips) pins it, and
exhausting the budget is a separate outcome --- the formula may well be
satisfiable still.

All randomness is drawn from the context rng, so a walk is as reproducible
as the decimation that led to it.
*/

use crate::{
    context::GenericContext,
    db::{ClauseId, VariableId},
    misc::log::targets::{self},
};

/// How a walk came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalksatOutcome {
    /// A trial assignment satisfied every enabled clause, and the valuation
    /// has been completed with it.
    Satisfiable,

    /// The flip budget ran out with some clause still unsatisfied.
    FlipsExhausted,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Walks the unassigned variables in search of an assignment satisfying
    /// the enabled clauses.
    pub fn walksat(&mut self) -> WalksatOutcome {
        let variable_count = self.graph.variable_count();
        let max_flips = self
            .config
            .walksat_max_flips
            .unwrap_or(100 * variable_count);
        let noise = self.config.walksat_noise;

        log::debug!(
            target: targets::WALKSAT,
            "Walking {} variables over {} clauses, {max_flips} flips.",
            self.graph.unassigned_count(),
            self.graph.enabled_clauses().len(),
        );

        // The trial assignment: random where unassigned, pinned elsewhere.
        // Assigned variables only touch disabled clauses, so their entries
        // are never read; carrying them keeps indexing by variable id.
        let mut trial: Vec<bool> = Vec::with_capacity(variable_count);
        for v in 0..variable_count {
            let value = match self.graph.variables[v].value {
                Some(value) => value,
                None => self.rng.random_bool(0.5),
            };
            trial.push(value);
        }

        // Per-clause counts of satisfied live literals, and the unsatisfied
        // pool. The pool may hold stale (since satisfied) entries, discarded
        // lazily when drawn.
        let mut satisfied_literals: Vec<u32> = vec![0; self.graph.clause_count()];
        let mut unsatisfied: Vec<ClauseId> = Vec::default();

        for c in 0..self.graph.clause_count() {
            if !self.graph.clauses[c].enabled {
                continue;
            }

            let count = self
                .graph
                .enabled_edges_of(c as ClauseId)
                .iter()
                .filter(|e| {
                    let edge = &self.graph.edges[**e as usize];
                    trial[edge.variable as usize] == edge.polarity
                })
                .count() as u32;

            satisfied_literals[c] = count;
            if count == 0 {
                unsatisfied.push(c as ClauseId);
            }
        }

        for _ in 0..max_flips {
            // Draw an unsatisfied clause, or finish.
            let clause = 'draw: loop {
                match unsatisfied.len() {
                    0 => {
                        for v in 0..variable_count {
                            if !self.graph.variables[v].assigned() {
                                self.graph.variables[v].value = Some(trial[v]);
                            }
                        }

                        log::info!(target: targets::WALKSAT, "Satisfied after {} flips.", self.counters.walksat_flips);
                        return WalksatOutcome::Satisfiable;
                    }

                    len => {
                        let candidate = unsatisfied.swap_remove(self.rng.random_range(0..len));
                        if satisfied_literals[candidate as usize] == 0 {
                            break 'draw candidate;
                        }
                    }
                }
            };

            let live = self.graph.enabled_edges_of(clause);

            let flip = match self.rng.random_bool(noise) {
                true => {
                    let pick = self.rng.random_range(0..live.len());
                    self.graph.edges[live[pick] as usize].variable
                }

                false => {
                    let mut best = self.graph.edges[live[0] as usize].variable;
                    let mut best_breaks = u32::MAX;

                    for e in &live {
                        let variable = self.graph.edges[*e as usize].variable;
                        let breaks = self.break_count(variable, &trial, &satisfied_literals);
                        if breaks < best_breaks {
                            best_breaks = breaks;
                            best = variable;
                        }
                    }

                    best
                }
            };

            trial[flip as usize] = !trial[flip as usize];
            self.counters.walksat_flips += 1;

            // Recount the clauses the flip touches.
            for i in 0..self.graph.variables[flip as usize].edges.len() {
                let edge_id = self.graph.variables[flip as usize].edges[i] as usize;
                let edge = &self.graph.edges[edge_id];
                if !edge.enabled {
                    continue;
                }

                let clause = edge.clause as usize;
                if trial[edge.variable as usize] == edge.polarity {
                    satisfied_literals[clause] += 1;
                } else {
                    satisfied_literals[clause] -= 1;
                    if satisfied_literals[clause] == 0 {
                        unsatisfied.push(edge.clause);
                    }
                }
            }
        }

        log::info!(target: targets::WALKSAT, "Flip budget exhausted.");
        WalksatOutcome::FlipsExhausted
    }

    /// A count of the enabled clauses a flip of the variable would leave
    /// unsatisfied: those kept alive by this variable's literal alone.
    fn break_count(
        &self,
        variable: VariableId,
        trial: &[bool],
        satisfied_literals: &[u32],
    ) -> u32 {
        let mut count = 0;

        for e in &self.graph.variables[variable as usize].edges {
            let edge = &self.graph.edges[*e as usize];
            if !edge.enabled {
                continue;
            }

            if trial[variable as usize] == edge.polarity
                && satisfied_literals[edge.clause as usize] == 1
            {
                count += 1;
            }
        }

        count
    }
}

#[cfg(test)]
mod walksat_tests {
    use super::WalksatOutcome;
    use crate::{config::Config, context::Context};

    #[test]
    fn a_loose_formula_is_satisfied() {
        let mut the_context = Context::from_config(Config {
            seed: 11,
            ..Config::default()
        });
        the_context.random_ksat(40, 2.0, 3);

        assert_eq!(the_context.walksat(), WalksatOutcome::Satisfiable);
        assert!(the_context.graph.formula_satisfied());
        assert_eq!(the_context.graph.unassigned_count(), 0);
    }

    #[test]
    fn a_starved_budget_exhausts() {
        let mut the_context = Context::from_config(Config {
            seed: 11,
            walksat_max_flips: Some(0),
            ..Config::default()
        });
        the_context.random_ksat(40, 4.0, 3);

        assert_eq!(the_context.walksat(), WalksatOutcome::FlipsExhausted);
        assert_ne!(the_context.graph.unassigned_count(), 0);
    }
}
