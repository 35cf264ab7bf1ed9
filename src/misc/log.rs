/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library
and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const BUILDER: &str = "builder";
    pub const DECIMATION: &str = "decimation";
    pub const SIMPLIFY: &str = "simplify";
    pub const SURVEYS: &str = "surveys";
    pub const WALKSAT: &str = "walksat";
}
