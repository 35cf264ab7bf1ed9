use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{config::Config, db::graph::FactorGraph, reports::Report};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// All mutable state of a solve lives here: the factor graph, the random
/// number generator, and the counters.
/// Every procedure is a method on the context, and every call returns before
/// the next begins --- the solve is strictly sequential.
///
/// # Example
///
/// ```rust
/// # use cavity_sat::context::GenericContext;
/// # use cavity_sat::generic::minimal_pcg::MinimalPCG32;
/// # use cavity_sat::config::Config;
/// use rand::SeedableRng;
///
/// let context = GenericContext {
///     config: Config::default(),
///     rng: MinimalPCG32::seed_from_u64(23),
///     ..GenericContext::fresh()
/// };
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The factor graph of the formula.
    pub graph: FactorGraph,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// An optional flag which, when raised, cancels the solve at the next
    /// sweep boundary.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl<R: rand::Rng + Default> GenericContext<R> {
    /// A context with no formula, a default configuration, and an unseeded
    /// source of randomness.
    ///
    /// Mostly of use with struct update syntax, as in the struct example.
    pub fn fresh() -> Self {
        GenericContext {
            config: Config::default(),
            counters: Counters::default(),
            graph: FactorGraph::default(),
            state: ContextState::Configuration,
            rng: R::default(),
            cancel: None,
        }
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// A high-level report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// Installs a cancellation flag, polled at sweep boundaries.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    /// Whether cancellation has been requested.
    pub(crate) fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
