use rand::SeedableRng;

use crate::{
    config::Config, context::Counters, db::graph::FactorGraph,
    generic::minimal_pcg::MinimalPCG32,
};

use super::{ContextState, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// A seed of 0 requests a seed drawn from entropy; the drawn seed is
    /// recorded in the configuration of the context so the solve can be
    /// reproduced.
    pub fn from_config(mut config: Config) -> Self {
        while config.seed == 0 {
            config.seed = rand::random();
        }

        Self {
            state: ContextState::Configuration,

            counters: Counters::default(),

            graph: FactorGraph::default(),

            rng: MinimalPCG32::seed_from_u64(config.seed),

            config,

            cancel: None,
        }
    }
}
