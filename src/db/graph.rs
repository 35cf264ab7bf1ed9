/*!
The factor graph.

Owns the three arenas --- variables, clauses, edges --- for the lifetime of
a solve, and answers the enumeration queries the procedures are built on:
the currently enabled clauses, the enabled edges of a clause, whether the
formula is satisfied, and so on.

Disabling a clause also disables its edges, so `enabled` on an edge is the
single liveness test used everywhere.
*/

use crate::{
    config::ZERO_EPSILON,
    db::{clause::Clause, edge::Edge, variable::Variable, ClauseId, EdgeId, VariableId},
};

/// The factor graph of a formula.
#[derive(Clone, Debug, Default)]
pub struct FactorGraph {
    /// The variable arena, indexed by [VariableId].
    pub variables: Vec<Variable>,

    /// The clause arena, indexed by [ClauseId].
    pub clauses: Vec<Clause>,

    /// The edge arena, indexed by [EdgeId].
    pub edges: Vec<Edge>,
}

impl FactorGraph {
    /// Extends the variable arena so `id` is a variable of the graph.
    pub fn ensure_variable(&mut self, id: VariableId) {
        while self.variables.len() <= id as usize {
            self.variables.push(Variable::fresh());
        }
    }

    /// Adds a clause over the given literals, wiring an edge per literal.
    ///
    /// Literals are `(variable, polarity)` pairs; variables are created as
    /// needed.
    pub fn add_clause(&mut self, literals: &[(VariableId, bool)]) -> ClauseId {
        let clause_id = self.clauses.len() as ClauseId;
        let mut clause = Clause::fresh();

        for &(variable, polarity) in literals {
            self.ensure_variable(variable);

            let edge_id = self.edges.len() as EdgeId;
            self.edges.push(Edge {
                variable,
                clause: clause_id,
                polarity,
                enabled: true,
                survey: 0.0,
            });

            clause.edges.push(edge_id);
            self.variables[variable as usize].edges.push(edge_id);
        }

        self.clauses.push(clause);
        clause_id
    }

    /// A count of variables in the graph.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// A count of clauses in the graph.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of variables without an assignment.
    pub fn unassigned_count(&self) -> usize {
        self.variables.iter().filter(|v| !v.assigned()).count()
    }

    /// The ids of the currently enabled clauses.
    pub fn enabled_clauses(&self) -> Vec<ClauseId> {
        (0..self.clauses.len() as ClauseId)
            .filter(|c| self.clauses[*c as usize].enabled)
            .collect()
    }

    /// The ids of the currently enabled edges of a clause.
    pub fn enabled_edges_of(&self, clause: ClauseId) -> Vec<EdgeId> {
        self.clauses[clause as usize]
            .edges
            .iter()
            .copied()
            .filter(|e| self.edges[*e as usize].enabled)
            .collect()
    }

    /// Disables a clause, clearing its edges with it.
    ///
    /// A disabled clause is satisfied and places no constraint on the rest of
    /// the solve, so its edges must stop contributing to subproducts and to
    /// unit propagation.
    pub fn disable_clause(&mut self, clause: ClauseId) {
        self.clauses[clause as usize].enabled = false;
        for i in 0..self.clauses[clause as usize].edges.len() {
            let edge = self.clauses[clause as usize].edges[i];
            self.edges[edge as usize].enabled = false;
        }
    }

    /// Whether every clause of the graph is satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.clauses.iter().all(|c| !c.enabled)
    }

    /// Whether every enabled edge carries a survey below [ZERO_EPSILON].
    pub fn all_surveys_trivial(&self) -> bool {
        self.edges
            .iter()
            .filter(|e| e.enabled)
            .all(|e| e.survey < ZERO_EPSILON)
    }

    /// The value of a variable, if assigned.
    pub fn value_of(&self, variable: VariableId) -> Option<bool> {
        self.variables[variable as usize].value
    }

    /// The current (often partial) valuation, indexed by variable id.
    pub fn valuation(&self) -> Vec<Option<bool>> {
        self.variables.iter().map(|v| v.value).collect()
    }

    /// The surveys of all edges, in edge id order.
    pub fn surveys(&self) -> Vec<f64> {
        self.edges.iter().map(|e| e.survey).collect()
    }

    /// Whether the valuation satisfies every clause of the original formula,
    /// enabled or not.
    ///
    /// An unassigned variable satisfies no literal, so this is the round-trip
    /// check that the simplification machinery disabled clauses only when it
    /// was sound to do so.
    pub fn formula_satisfied(&self) -> bool {
        self.clauses.iter().all(|clause| {
            clause.edges.iter().any(|e| {
                let edge = &self.edges[*e as usize];
                self.variables[edge.variable as usize].value == Some(edge.polarity)
            })
        })
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn wiring() {
        let mut graph = FactorGraph::default();
        let c = graph.add_clause(&[(0, true), (1, false)]);

        assert_eq!(graph.variable_count(), 2);
        assert_eq!(graph.clause_count(), 1);
        assert_eq!(graph.edges.len(), 2);

        assert_eq!(graph.enabled_edges_of(c).len(), 2);
        assert_eq!(graph.variables[0].edges.len(), 1);

        let edge = &graph.edges[graph.variables[1].edges[0] as usize];
        assert_eq!(edge.clause, c);
        assert!(!edge.polarity);
    }

    #[test]
    fn disabling_a_clause_clears_its_edges() {
        let mut graph = FactorGraph::default();
        let c = graph.add_clause(&[(0, true), (1, true), (2, false)]);

        graph.disable_clause(c);

        assert!(graph.is_satisfied());
        assert!(graph.enabled_edges_of(c).is_empty());
        assert!(graph.edges.iter().all(|e| !e.enabled));
    }

    #[test]
    fn round_trip_requires_a_satisfying_literal_per_clause() {
        let mut graph = FactorGraph::default();
        graph.add_clause(&[(0, true), (1, false)]);
        graph.add_clause(&[(1, true)]);

        graph.variables[0].value = Some(true);
        assert!(!graph.formula_satisfied());

        graph.variables[1].value = Some(true);
        assert!(graph.formula_satisfied());
    }
}
