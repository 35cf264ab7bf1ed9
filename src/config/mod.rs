/*!
Configuration of a context.

All knobs for a solve are contained in a [Config], which is handed to a
context when the context is created.
The configuration is read throughout the solve, and aside from the seed
(which may be overwritten when drawn from entropy) is never mutated.
*/

/// The threshold below which `1 − survey` (or a subsurvey) is treated as zero.
///
/// Surveys saturate at one, and a saturated survey would introduce a true zero
/// factor into the cavity subproducts.
/// Saturation is instead tracked with counters, and this constant fixes the
/// margin within which a survey counts as saturated.
pub const ZERO_EPSILON: f64 = 1e-16;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of survey update sweeps per propagation run.
    pub sp_max_iterations: usize,

    /// The threshold on the largest survey change of a sweep below which the
    /// surveys count as converged.
    pub sp_epsilon: f64,

    /// The threshold on the mean max-bias of unassigned variables below which
    /// the formula counts as paramagnetic and the solve is handed to local
    /// search.
    pub paramagnetic_threshold: f64,

    /// The fraction of unassigned variables fixed on each decimation round.
    ///
    /// At least one variable is fixed per round, regardless of the fraction.
    pub fraction: f64,

    /// The flip budget for local search, if set.
    ///
    /// Otherwise, the budget is 100 · (variable count), fixed when local
    /// search is called.
    pub walksat_max_flips: Option<usize>,

    /// The probability of a noise flip (over a greedy flip) during local
    /// search.
    pub walksat_noise: f64,

    /// The seed for the random number generator.
    ///
    /// A seed of 0 requests a seed drawn from entropy, recorded here when the
    /// context is created so the solve can be reproduced.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sp_max_iterations: 1000,

            sp_epsilon: 0.01,

            paramagnetic_threshold: 0.01,

            fraction: 0.04,

            walksat_max_flips: None,

            walksat_noise: 0.5,

            seed: 0,
        }
    }
}
