/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of survey update sweeps, across all propagation runs.
    pub survey_sweeps: usize,

    /// A count of decimation rounds.
    pub decimation_rounds: usize,

    /// A count of all assignments made, by decimation or propagation.
    pub total_assignments: usize,

    /// A count of assignments made by fixing a biased variable.
    pub decimated_assignments: usize,

    /// A count of local search flips.
    pub walksat_flips: usize,
}
