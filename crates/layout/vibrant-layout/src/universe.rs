//! Boundary variables, viewport stays and the resolved-value cache.

use crate::error::LayoutError;
use crate::solver::LinearSolver;
use cassowary::strength::REQUIRED;
use cassowary::WeightedRelation::EQ;
use cassowary::{Constraint, Solver, Variable};
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

/// Viewport edges. `left` and `top` are pinned to zero; `right` and `bottom`
/// follow the viewport size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub left: Variable,
    pub right: Variable,
    pub top: Variable,
    pub bottom: Variable,
}

/// Solver variables describing one laid-out entity.
///
/// `x`/`y` address the same point the entity's transform uses as its
/// position (the center for rectangles).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutVars {
    pub x: Variable,
    pub y: Variable,
    pub width: Variable,
    pub height: Variable,
}

impl LayoutVars {
    /// Four fresh, unconstrained variables.
    pub fn new() -> Self {
        Self {
            x: Variable::new(),
            y: Variable::new(),
            width: Variable::new(),
            height: Variable::new(),
        }
    }

    pub fn variables(&self) -> [Variable; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

impl Default for LayoutVars {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved values of a [`LayoutVars`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn check_viewport(width: f64, height: f64) -> Result<(), LayoutError> {
    if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidViewport { width, height })
    }
}

pub struct LayoutUniverse<S = Solver> {
    solver: S,
    bounds: Bounds,
    viewport: [f64; 2],
    right_stay: Constraint,
    bottom_stay: Constraint,
    owned: HashMap<LayoutVars, Vec<Constraint>>,
    tracked: HashSet<Variable>,
    values: HashMap<Variable, f64>,
}

impl LayoutUniverse<Solver> {
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        Self::with_solver(Solver::new(), width, height)
    }
}

impl<S: LinearSolver> LayoutUniverse<S> {
    /// Pin the boundaries on a fresh `solver` and resolve them once.
    pub fn with_solver(mut solver: S, width: f64, height: f64) -> Result<Self, LayoutError> {
        check_viewport(width, height)?;

        let bounds = Bounds {
            left: Variable::new(),
            right: Variable::new(),
            top: Variable::new(),
            bottom: Variable::new(),
        };
        let right_stay = bounds.right | EQ(REQUIRED) | width;
        let bottom_stay = bounds.bottom | EQ(REQUIRED) | height;

        solver.add_constraint(bounds.left | EQ(REQUIRED) | 0.0)?;
        solver.add_constraint(bounds.top | EQ(REQUIRED) | 0.0)?;
        solver.add_constraint(right_stay.clone())?;
        solver.add_constraint(bottom_stay.clone())?;

        let mut universe = Self {
            solver,
            bounds,
            viewport: [width, height],
            right_stay,
            bottom_stay,
            owned: HashMap::new(),
            tracked: [bounds.left, bounds.right, bounds.top, bounds.bottom]
                .into_iter()
                .collect(),
            values: HashMap::new(),
        };
        universe.resolve();
        Ok(universe)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn viewport(&self) -> [f64; 2] {
        self.viewport
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Add every constraint for `vars` or none of them.
    ///
    /// On rejection the constraints added so far are removed again and the
    /// error is returned; the universe is left as it was.
    pub fn register(
        &mut self,
        vars: LayoutVars,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), LayoutError> {
        let mut added: Vec<Constraint> = Vec::new();
        for constraint in constraints {
            if let Err(err) = self.solver.add_constraint(constraint.clone()) {
                log::warn!(
                    "layout constraint rejected ({}), rolling back {} added",
                    err.category(),
                    added.len()
                );
                for done in added.iter().rev() {
                    if let Err(undo) = self.solver.remove_constraint(done) {
                        log::warn!("failed to roll back layout constraint: {undo}");
                    }
                }
                return Err(err);
            }
            added.push(constraint);
        }

        self.track(vars);
        if let Some(owned) = self.owned.get_mut(&vars) {
            owned.extend(added);
        }
        Ok(())
    }

    /// Track `vars` so `resolve` caches their values, without constraining them.
    pub fn track(&mut self, vars: LayoutVars) {
        self.tracked.extend(vars.variables());
        self.owned.entry(vars).or_default();
    }

    pub fn is_tracked(&self, vars: &LayoutVars) -> bool {
        self.owned.contains_key(vars)
    }

    /// Constraints currently owned by `vars`.
    pub fn constraints(&self, vars: &LayoutVars) -> &[Constraint] {
        self.owned.get(vars).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop the constraints owned by `vars` and forget its variables.
    ///
    /// Every constraint is attempted; the first failure is returned.
    pub fn release(&mut self, vars: &LayoutVars) -> Result<(), LayoutError> {
        let mut first_err = None;
        for constraint in self.owned.remove(vars).unwrap_or_default() {
            if let Err(err) = self.solver.remove_constraint(&constraint) {
                first_err.get_or_insert(err);
            }
        }
        for var in vars.variables() {
            self.tracked.remove(&var);
            self.values.remove(&var);
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Re-pin `right`/`bottom` to a new viewport size and resolve.
    ///
    /// Both stays change or neither does.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), LayoutError> {
        check_viewport(width, height)?;
        if self.viewport == [width, height] {
            return Ok(());
        }

        let right_stay = self.bounds.right | EQ(REQUIRED) | width;
        let bottom_stay = self.bounds.bottom | EQ(REQUIRED) | height;

        self.solver
            .replace_constraint(&self.right_stay, right_stay.clone())?;
        if let Err(err) = self
            .solver
            .replace_constraint(&self.bottom_stay, bottom_stay.clone())
        {
            if let Err(restore) = self
                .solver
                .replace_constraint(&right_stay, self.right_stay.clone())
            {
                log::warn!("failed to restore right boundary: {restore}");
            }
            return Err(err);
        }

        log::debug!(
            "layout viewport {}x{} -> {width}x{height}",
            self.viewport[0],
            self.viewport[1]
        );
        self.right_stay = right_stay;
        self.bottom_stay = bottom_stay;
        self.viewport = [width, height];
        self.resolve();
        Ok(())
    }

    /// Refresh the cached value of every tracked variable.
    pub fn resolve(&mut self) {
        self.solver.resolve();
        for &var in &self.tracked {
            self.values.insert(var, self.solver.value(var));
        }
    }

    /// Last resolved value of `var`.
    ///
    /// # Panics
    /// If `var` has not been resolved since it was tracked.
    pub fn value(&self, var: Variable) -> f64 {
        match self.try_value(var) {
            Some(v) => v,
            None => panic!("layout variable {var:?} read before it was resolved"),
        }
    }

    pub fn try_value(&self, var: Variable) -> Option<f64> {
        self.values.get(&var).copied()
    }

    /// # Panics
    /// If any of the variables has not been resolved.
    pub fn frame(&self, vars: &LayoutVars) -> LayoutFrame {
        LayoutFrame {
            x: self.value(vars.x),
            y: self.value(vars.y),
            width: self.value(vars.width),
            height: self.value(vars.height),
        }
    }

    pub fn try_frame(&self, vars: &LayoutVars) -> Option<LayoutFrame> {
        Some(LayoutFrame {
            x: self.try_value(vars.x)?,
            y: self.try_value(vars.y)?,
            width: self.try_value(vars.width)?,
            height: self.try_value(vars.height)?,
        })
    }
}
