//! vibrant-layout: per-entity layout variables resolved by a linear constraint solver.
//!
//! A [`LayoutUniverse`] owns the solver, the four viewport boundary variables
//! and the last resolved value of every tracked variable. Adapters project
//! those values into their own transform types; nothing flows back.

pub mod error;
pub mod solver;
pub mod universe;

pub use error::LayoutError;
pub use solver::LinearSolver;
pub use universe::{Bounds, LayoutFrame, LayoutUniverse, LayoutVars};

// Constraint vocabulary, re-exported so callers need no direct cassowary dependency.
pub use cassowary::strength;
pub use cassowary::WeightedRelation::{EQ, GE, LE};
pub use cassowary::{Constraint, Expression, Solver, Variable};
