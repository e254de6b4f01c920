//! The solver seam.

use crate::error::LayoutError;
use cassowary::{Constraint, Solver, Variable};

/// Incremental linear constraint solver.
///
/// The layout universe only needs to add and remove constraints and read
/// variable values back; the simplex itself stays behind this trait.
pub trait LinearSolver {
    fn add_constraint(&mut self, constraint: Constraint) -> Result<(), LayoutError>;

    fn remove_constraint(&mut self, constraint: &Constraint) -> Result<(), LayoutError>;

    /// Swap `old` for `new`. If `new` is rejected, `old` is put back and the
    /// rejection is returned.
    fn replace_constraint(&mut self, old: &Constraint, new: Constraint) -> Result<(), LayoutError> {
        self.remove_constraint(old)?;
        if let Err(err) = self.add_constraint(new) {
            if let Err(restore) = self.add_constraint(old.clone()) {
                log::warn!("failed to restore replaced constraint: {restore}");
            }
            return Err(err);
        }
        Ok(())
    }

    /// Bring variable values up to date with the current constraint set.
    fn resolve(&mut self);

    fn value(&self, variable: Variable) -> f64;
}

impl LinearSolver for Solver {
    fn add_constraint(&mut self, constraint: Constraint) -> Result<(), LayoutError> {
        Solver::add_constraint(self, constraint).map_err(LayoutError::from)
    }

    fn remove_constraint(&mut self, constraint: &Constraint) -> Result<(), LayoutError> {
        Solver::remove_constraint(self, constraint).map_err(LayoutError::from)
    }

    fn resolve(&mut self) {
        // Values are optimized on every edit; this only drains the change list.
        let _ = self.fetch_changes();
    }

    fn value(&self, variable: Variable) -> f64 {
        self.get_value(variable)
    }
}
