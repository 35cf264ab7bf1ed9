//! A library for satisfying boolean formulas in conjunctive normal form by
//! message passing.
//!
//! cavity_sat implements survey propagation with decimation: cavity surveys
//! are passed between clauses and variables of a factor graph until they
//! settle, the most strongly biased variables are fixed to their preferred
//! values, the formula is simplified by unit propagation, and the cycle
//! repeats on what remains.
//! When the surveys carry no structural information --- the trivial fixpoint,
//! or a paramagnetic bias profile --- the simplified formula is handed to
//! noisy local search instead.
//!
//! The approach shines on uniform random k-SAT near the satisfiability
//! threshold, where complete solvers struggle, and is incomplete everywhere:
//! a contradiction found under decimated fixings refutes the run, not the
//! formula.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built with a [configuration](config), and a formula is added
//! though [DIMACS](crate::builder::dimacs) input,
//! [programmatic clauses](crate::builder), or
//! [random generation](crate::context::GenericContext::random_ksat).
//! A solve mutates exactly one structure, the [factor graph](db), and every
//! phase of the algorithm is a context method under [procedures]:
//!
//! - [surveys](procedures::surveys) --- the survey update of one clause, and
//!   the in-place subproduct cache which makes it cheap.
//! - [sweeps](procedures::sweeps) --- iteration to convergence, divergence,
//!   or triviality.
//! - [simplify](procedures::simplify) --- assignment and recursive unit
//!   propagation.
//! - [decimate](procedures::decimate) --- the loop fixing biased variables.
//! - [walksat](procedures::walksat) --- the local search fallback.
//! - [solve](procedures::solve) --- the entry point tying these together.
//!
//! Determinism is taken seriously: for a fixed formula, seed, and
//! configuration, a solve reproduces its surveys, its decimation order, and
//! its result, element for element.
//! A seed of 0 asks for one drawn from entropy, recorded in the context's
//! configuration for replay.
//!
//! # Example
//!
//! ```rust
//! # use cavity_sat::config::Config;
//! # use cavity_sat::context::Context;
//! # use cavity_sat::reports::Report;
//! let mut the_context = Context::from_config(Config {
//!     seed: 42,
//!     ..Config::default()
//! });
//!
//! the_context.random_ksat(100, 3.5, 3);
//!
//! if the_context.solve() == Report::Satisfiable {
//!     assert!(the_context.graph.formula_satisfied());
//! }
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are
//! made, under a handful of targets listed in [misc::log].
//! No log implementation is provided; with
//! [env_logger](https://docs.rs/env_logger/latest/env_logger/), e.g.,
//! `RUST_LOG=decimation …` narrows output to the decimation loop.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod types;
