use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use cavity_sat::{
    config::Config,
    context::{Context, ContextState},
    reports::Report,
};

fn solved_context(variables: usize, alpha: f64, seed: u64, fraction: f64) -> (Report, Context) {
    let mut ctx = Context::from_config(Config {
        seed,
        fraction,
        ..Config::default()
    });
    ctx.random_ksat(variables, alpha, 3);

    let report = ctx.solve();
    (report, ctx)
}

mod three_sat {
    use super::*;

    #[test]
    fn below_the_threshold_satisfiable() {
        let (report, ctx) = solved_context(100, 3.0, 42, 0.05);

        assert_eq!(report, Report::Satisfiable);
        assert!(ctx.graph.formula_satisfied());
    }

    #[test]
    fn below_the_threshold_deterministic() {
        let (first_report, first) = solved_context(100, 3.0, 42, 0.05);
        let (second_report, second) = solved_context(100, 3.0, 42, 0.05);

        assert_eq!(first_report, second_report);
        assert_eq!(first.graph.valuation(), second.graph.valuation());
        assert_eq!(first.graph.surveys(), second.graph.surveys());
    }
}

mod paramagnetic {
    use super::*;

    #[test]
    fn a_loose_formula_falls_back_to_local_search() {
        // At this ratio the surveys carry no structure, so the solve should
        // reach local search, and local search should succeed.
        let (report, ctx) = solved_context(60, 2.0, 23, 0.04);

        assert_eq!(report, Report::Satisfiable);
        assert!(ctx.graph.formula_satisfied());
        assert!(ctx.counters.walksat_flips > 0);
        assert_eq!(ctx.graph.unassigned_count(), 0);
    }
}

mod near_threshold {
    use super::*;

    #[test]
    fn reproducible_byte_for_byte() {
        let (first_report, first) = solved_context(500, 4.26, 7, 0.04);
        let (second_report, second) = solved_context(500, 4.26, 7, 0.04);

        assert_eq!(first_report, second_report);
        assert_eq!(first.graph.surveys(), second.graph.surveys());
        assert_eq!(first.graph.valuation(), second.graph.valuation());
        assert_eq!(
            first.counters.survey_sweeps,
            second.counters.survey_sweeps
        );

        if first_report == Report::Satisfiable {
            assert!(first.graph.formula_satisfied());
        }
    }

    #[test]
    fn decimation_strictly_shrinks_the_unassigned_set() {
        let mut ctx = Context::from_config(Config {
            seed: 19,
            ..Config::default()
        });
        ctx.random_ksat(150, 4.0, 3);

        let report = ctx.solve();

        if report == Report::Satisfiable {
            assert!(ctx.graph.formula_satisfied());
        }

        // Each round fixes at least one fresh variable.
        assert!(ctx.counters.total_assignments >= ctx.counters.decimation_rounds);
    }
}

mod cancellation {
    use super::*;

    #[test]
    fn a_raised_flag_cancels_at_the_first_boundary() {
        let mut ctx = Context::from_config(Config {
            seed: 5,
            ..Config::default()
        });
        ctx.random_ksat(50, 4.2, 3);

        let flag = Arc::new(AtomicBool::new(false));
        ctx.set_cancel_flag(flag.clone());
        flag.store(true, Ordering::Relaxed);

        assert_eq!(ctx.solve(), Report::Cancelled);
        assert_eq!(ctx.state, ContextState::Inconclusive(Report::Cancelled));
    }
}
