//! Generic structures with no direct tie to satisfiability.

pub mod minimal_pcg;
