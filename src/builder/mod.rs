/*!
Methods to add a formula to a context.

Clauses arrive in the DIMACS convention: a clause is a slice of non-zero
integers, the magnitude naming a variable (1-based) and the sign giving the
polarity of the occurrence.

Input is cheap to sanitise and expensive to leave unsanitised, so:
- Duplicate literals within a clause collapse to one occurrence.
- A tautological clause (a variable in both polarities) constrains nothing
  and is skipped, with a note in the returned [ClauseOk].
- An empty clause, a zero literal, or an addition after a solve has begun is
  an error.

Formulas may also be read from a [DIMACS file](dimacs) or
[generated at random](GenericContext::random_ksat).
*/

pub mod dimacs;

use crate::{
    context::{ContextState, GenericContext},
    db::{ClauseId, VariableId},
    misc::log::targets::{self},
    types::err::{self, BuildError},
};

/// Possible 'Ok' results from adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the graph.
    Added(ClauseId),

    /// The clause was a tautology, and was skipped.
    Tautology,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Adds a clause given as DIMACS literals.
    ///
    /// ```rust
    /// # use cavity_sat::config::Config;
    /// # use cavity_sat::context::Context;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert!(the_context.add_clause(&[1, -2, 3]).is_ok());
    /// assert!(the_context.add_clause(&[]).is_err());
    /// ```
    pub fn add_clause(&mut self, literals: &[i32]) -> Result<ClauseOk, err::ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            _ => return Err(BuildError::FormulaFrozen.into()),
        }

        if literals.is_empty() {
            return Err(BuildError::EmptyClause.into());
        }

        let mut seen: Vec<(VariableId, bool)> = Vec::with_capacity(literals.len());

        for literal in literals {
            if *literal == 0 {
                return Err(BuildError::ZeroLiteral.into());
            }

            let variable = (literal.unsigned_abs() - 1) as VariableId;
            let polarity = *literal > 0;

            if seen.contains(&(variable, !polarity)) {
                log::trace!(target: targets::BUILDER, "Tautological clause skipped.");
                return Ok(ClauseOk::Tautology);
            }

            if !seen.contains(&(variable, polarity)) {
                seen.push((variable, polarity));
            }
        }

        self.state = ContextState::Input;
        Ok(ClauseOk::Added(self.graph.add_clause(&seen)))
    }

    /// Generates a uniform random k-SAT formula over `variables` variables
    /// with `⌊alpha · variables⌋` clauses, drawn from the context rng.
    ///
    /// Each clause is `k` distinct variables with independent uniform
    /// polarities, so no clause is tautological and determinism follows the
    /// seed.
    pub fn random_ksat(&mut self, variables: usize, alpha: f64, k: usize) {
        let clauses = (alpha * variables as f64).floor() as usize;
        log::info!(target: targets::BUILDER, "Random {k}-SAT: {variables} variables, {clauses} clauses.");

        if variables == 0 {
            return;
        }
        self.graph.ensure_variable((variables - 1) as VariableId);

        for _ in 0..clauses {
            let mut clause: Vec<(VariableId, bool)> = Vec::with_capacity(k);

            while clause.len() < k.min(variables) {
                let variable = self.rng.random_range(0..variables) as VariableId;
                if clause.iter().any(|(v, _)| *v == variable) {
                    continue;
                }
                let polarity = self.rng.random_bool(0.5);
                clause.push((variable, polarity));
            }

            self.graph.add_clause(&clause);
        }

        self.state = ContextState::Input;
    }
}
