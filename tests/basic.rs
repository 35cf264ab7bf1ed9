use cavity_sat::{
    builder::ClauseOk,
    config::Config,
    context::{Context, ContextState},
    reports::Report,
    types::err,
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(&[1]).is_ok());
        assert_eq!(ctx.solve(), Report::Satisfiable);

        assert_eq!(ctx.graph.value_of(0), Some(true));

        // A unit clause resolves by propagation alone.
        assert_eq!(ctx.counters.survey_sweeps, 0);
    }

    #[test]
    fn opposing_units() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(&[1]).is_ok());
        assert!(ctx.add_clause(&[-1]).is_ok());

        assert_eq!(ctx.solve(), Report::Contradiction);
        assert_eq!(ctx.state, ContextState::Unsatisfiable);
        assert_eq!(ctx.counters.survey_sweeps, 0);
    }

    #[test]
    fn unit_chain() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(&[1]).is_ok());
        assert!(ctx.add_clause(&[-1, 2]).is_ok());
        assert!(ctx.add_clause(&[-2, 3]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);

        assert_eq!(ctx.graph.value_of(0), Some(true));
        assert_eq!(ctx.graph.value_of(1), Some(true));
        assert_eq!(ctx.graph.value_of(2), Some(true));
        assert_eq!(ctx.counters.survey_sweeps, 0);
    }

    #[test]
    fn unique_solution() {
        let mut ctx = Context::from_config(Config {
            seed: 3,
            ..Config::default()
        });

        // Satisfied by both variables true, and nothing else.
        assert!(ctx.add_clause(&[1, 2]).is_ok());
        assert!(ctx.add_clause(&[-1, 2]).is_ok());
        assert!(ctx.add_clause(&[1, -2]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);

        assert!(ctx.graph.formula_satisfied());
        assert_eq!(ctx.graph.value_of(0), Some(true));
        assert_eq!(ctx.graph.value_of(1), Some(true));
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.solve(), Report::Satisfiable);
    }
}

mod building {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause(&[1, 1, 2, 2]), Ok(ClauseOk::Added(0)));
        assert_eq!(ctx.graph.clauses[0].edges.len(), 2);
    }

    #[test]
    fn tautologies_are_skipped() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause(&[1, -2, -1]), Ok(ClauseOk::Tautology));
        assert_eq!(ctx.graph.clause_count(), 0);
    }

    #[test]
    fn empty_and_zero_are_errors() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.add_clause(&[]),
            Err(err::ErrorKind::Build(err::BuildError::EmptyClause))
        );
        assert_eq!(
            ctx.add_clause(&[1, 0]),
            Err(err::ErrorKind::Build(err::BuildError::ZeroLiteral))
        );
    }

    #[test]
    fn the_formula_freezes_on_solve() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(&[1]).is_ok());
        assert_eq!(ctx.solve(), Report::Satisfiable);

        assert_eq!(
            ctx.add_clause(&[2]),
            Err(err::ErrorKind::Build(err::BuildError::FormulaFrozen))
        );
    }

    #[test]
    fn a_zero_seed_is_replaced() {
        let ctx = Context::from_config(Config::default());

        assert_ne!(ctx.config.seed, 0);
    }
}
