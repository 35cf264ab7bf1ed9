/*!
Simplification of the factor graph under a growing partial assignment.

# Overview

Assigning a variable splits its enabled edges by polarity:

- An edge whose literal is satisfied retires its whole clause --- the clause
  is disabled, edges and all.
- An edge whose literal is falsified is disabled alone, and its clause
  shrinks --- which may leave the clause unit (its last literal is forced)
  or empty (a contradiction).

Unit propagation is eager and recursive: a forced literal is assigned on the
spot, which cleans the graph again, which may force further literals.
The recursion bottoms out at clauses with two or more live edges, and its
depth is bounded by the number of variables.

Every method returns `false` the moment a contradiction appears ---
an assignment against an existing value, or a clause with no live edges ---
and the contradiction propagates up through the recursion unchanged.

Subproducts are left alone here: the sweep driver rebuilds the cache before
surveys are next read, so there is nothing to keep coherent mid-cascade.
*/

use crate::{
    context::GenericContext,
    db::{ClauseId, VariableId},
    misc::log::targets::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Assigns a value to a variable and simplifies the graph around it.
    ///
    /// Returns `false` on contradiction: either the variable already holds
    /// the opposite value, or unit propagation emptied a clause downstream.
    #[must_use]
    pub fn assign_variable(&mut self, variable: VariableId, value: bool) -> bool {
        match self.graph.variables[variable as usize].value {
            Some(existing) if existing != value => {
                log::trace!(target: targets::SIMPLIFY, "Variable {variable} already assigned {existing}.");
                return false;
            }

            // Re-assigning the same value has nothing left to clean.
            Some(_) => return true,

            None => {}
        }

        self.graph.variables[variable as usize].value = Some(value);
        self.counters.total_assignments += 1;

        self.clean_graph(variable, value)
    }

    /// Retires the enabled edges of a freshly assigned variable, propagating
    /// units as clauses shrink.
    fn clean_graph(&mut self, variable: VariableId, value: bool) -> bool {
        for i in 0..self.graph.variables[variable as usize].edges.len() {
            let edge_id = self.graph.variables[variable as usize].edges[i] as usize;
            let edge = &self.graph.edges[edge_id];
            if !edge.enabled {
                continue;
            }
            let (clause, polarity) = (edge.clause, edge.polarity);

            if polarity == value {
                self.graph.disable_clause(clause);
            } else {
                self.graph.edges[edge_id].enabled = false;

                if !self.unit_propagation(clause) {
                    return false;
                }
            }
        }

        true
    }

    /// Checks a clause for a forced literal, assigning it if so.
    ///
    /// Returns `false` exactly when the clause, or some clause reached
    /// through the recursive assignment, has no live edges left.
    #[must_use]
    pub fn unit_propagation(&mut self, clause: ClauseId) -> bool {
        if !self.graph.clauses[clause as usize].enabled {
            return true;
        }

        let live = self.graph.enabled_edges_of(clause);

        match live.len() {
            0 => {
                log::trace!(target: targets::SIMPLIFY, "Clause {clause} is empty.");
                false
            }

            1 => {
                let edge = &self.graph.edges[live[0] as usize];
                let (variable, polarity) = (edge.variable, edge.polarity);
                log::trace!(target: targets::SIMPLIFY, "Clause {clause} forces variable {variable}.");

                self.assign_variable(variable, polarity)
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod simplify_tests {
    use crate::{config::Config, context::Context};

    #[test]
    fn a_satisfied_literal_retires_its_clause() {
        let mut the_context = Context::from_config(Config::default());
        the_context.add_clause(&[1, 2]).unwrap();
        the_context.add_clause(&[-1, 2, 3]).unwrap();

        assert!(the_context.assign_variable(0, true));

        assert!(!the_context.graph.clauses[0].enabled);
        assert!(the_context.graph.clauses[1].enabled);
        assert_eq!(the_context.graph.enabled_edges_of(1).len(), 2);
        assert_eq!(the_context.graph.value_of(1), None);
    }

    #[test]
    fn a_shrunk_clause_forces_its_last_literal() {
        let mut the_context = Context::from_config(Config::default());
        the_context.add_clause(&[1, 2]).unwrap();

        assert!(the_context.assign_variable(0, false));

        assert_eq!(the_context.graph.value_of(1), Some(true));
        assert!(the_context.graph.is_satisfied());
    }

    #[test]
    fn propagation_chains_through_variables() {
        let mut the_context = Context::from_config(Config::default());
        the_context.add_clause(&[1, 2]).unwrap();
        the_context.add_clause(&[-2, 3]).unwrap();
        the_context.add_clause(&[-3, 4]).unwrap();

        assert!(the_context.assign_variable(0, false));

        assert_eq!(the_context.graph.value_of(1), Some(true));
        assert_eq!(the_context.graph.value_of(2), Some(true));
        assert_eq!(the_context.graph.value_of(3), Some(true));
    }

    #[test]
    fn opposing_forced_values_are_a_contradiction() {
        let mut the_context = Context::from_config(Config::default());
        the_context.add_clause(&[1, 2]).unwrap();
        the_context.add_clause(&[1, -2]).unwrap();

        assert!(!the_context.assign_variable(0, false));
    }

    #[test]
    fn reassignment_against_value_is_a_contradiction() {
        let mut the_context = Context::from_config(Config::default());
        the_context.add_clause(&[1, 2]).unwrap();

        assert!(the_context.assign_variable(0, true));
        assert!(the_context.assign_variable(0, true));
        assert!(!the_context.assign_variable(0, false));
    }
}
