//! Chromatic assignment via integer programming
//!
//! Formulates graph coloring over the region-adjacency graph as a 0/1
//! program: one binary per region and color slot, exactly one slot per
//! region, and no shared slot across an edge. An integer `chromatic`
//! variable is bounded below by every used slot index, which either gets
//! pinned to the palette size (feasibility test) or minimized (chromatic
//! number). Solving is delegated to `good_lp`'s pure-Rust `microlp` backend;
//! the model is static, so any infeasible or unbounded resolution is final.

use good_lp::{
    Expression, ResolutionError, Solution, SolverModel, Variable, constraint, microlp, variable,
    variables,
};

use crate::coloring::adjacency::AdjacencyGraph;
use crate::coloring::palette::{Color, ColorAssignment};
use crate::io::error::{GenerationError, Result, invalid_parameter, solver_error};

/// How the solver treats the palette size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Pin the chromatic variable to the palette size and test feasibility;
    /// any satisfying assignment is accepted
    Fixed,
    /// Minimize the chromatic number, then check it fits the palette
    Minimize,
}

/// Solve for one palette color per region such that adjacent regions differ
///
/// The selected color slot of each region indexes into `palette`.
///
/// # Errors
///
/// Returns [`GenerationError::PaletteInsufficiency`] when no assignment with
/// at most `palette.len()` colors exists, and [`GenerationError::Solver`] for
/// any other backend resolution failure. Both are fatal; there is no partial
/// output.
pub fn solve_coloring(
    graph: &AdjacencyGraph,
    palette: &[Color],
    mode: ColorMode,
) -> Result<ColorAssignment> {
    let n = graph.region_count();
    let k = palette.len();

    if k == 0 {
        return Err(invalid_parameter(
            "colors",
            &"[]",
            &"palette must contain at least one color",
        ));
    }
    if n == 0 {
        return Ok(ColorAssignment::new());
    }

    let mut vars = variables!();

    // n slots are a trivial upper bound on the colors any solution needs
    let assign: Vec<Vec<Variable>> = (0..n)
        .map(|_| (0..n).map(|_| vars.add(variable().binary())).collect())
        .collect();
    let chromatic = vars.add(
        variable()
            .integer()
            .min(1.0)
            .max(n.max(k) as f64),
    );

    let mut model = vars.minimise(chromatic).using(microlp);

    // Each region selects exactly one color slot
    for row in &assign {
        let selected: Expression = row.iter().copied().sum();
        model = model.with(constraint!(selected == 1.0));
    }

    // Adjacent regions cannot share a slot
    for &(u, v) in graph.edges() {
        for slot in 0..n {
            let (Some(a), Some(b)) = (
                assign.get(u as usize).and_then(|row| row.get(slot)),
                assign.get(v as usize).and_then(|row| row.get(slot)),
            ) else {
                continue;
            };
            model = model.with(constraint!(*a + *b <= 1.0));
        }
    }

    // Any used slot pushes the chromatic number to at least slot + 1
    for row in &assign {
        for (slot, v) in row.iter().enumerate() {
            model = model.with(constraint!(chromatic >= ((slot + 1) as f64) * *v));
        }
    }

    if mode == ColorMode::Fixed {
        model = model.with(constraint!(chromatic == k as f64));
    }

    let solution = model.solve().map_err(|err| match err {
        ResolutionError::Infeasible => GenerationError::PaletteInsufficiency {
            required: None,
            available: k,
        },
        other => solver_error(&other),
    })?;

    if mode == ColorMode::Minimize {
        let needed = solution.value(chromatic).round() as u32;
        if needed as usize > k {
            return Err(GenerationError::PaletteInsufficiency {
                required: Some(needed),
                available: k,
            });
        }
    }

    let mut assignment = ColorAssignment::new();
    for (dense, row) in assign.iter().enumerate() {
        let slot = row
            .iter()
            .position(|v| solution.value(*v) > 0.5)
            .ok_or_else(|| solver_error(&"no color slot selected for a region"))?;
        let color = palette
            .get(slot)
            .copied()
            .ok_or_else(|| solver_error(&format!("slot {slot} exceeds the palette")))?;
        let region = graph
            .region_id(dense as u32)
            .ok_or_else(|| solver_error(&"dense id without a region"))?;
        assignment.insert(region, color);
    }

    Ok(assignment)
}
