//! Constraint model construction and solving.
//!
//! Every widget contributes two unknowns, its solved vertical position and
//! its solved height. Hiding is an equality (`height == 0`), stacking is a
//! lower bound against the direct-above neighbors, and a hard non-overlap
//! backstop guards every horizontally-overlapping visible pair regardless
//! of adjacency. The tiered simplex solver then settles each position at
//! its greatest lower bound.

use std::collections::HashMap;

use cassowary::WeightedRelation::{EQ, GE};
use cassowary::strength::{MEDIUM, REQUIRED, WEAK};
use cassowary::{Constraint, Solver, Variable};
use tracing::debug;

use crate::{Error, Options, Result, Widget, adjacency};

/// Solver unknowns for one widget.
struct Unknowns {
    /// Solved vertical position.
    y: Variable,
    /// Solved height.
    h: Variable,
}

/// Reduce a direct-above set to the neighbor(s) whose original bottom edge
/// is maximal. Exact ties keep every tied candidate, so a visible neighbor
/// tied with a hidden one still contributes its larger bound.
fn nearest_above(widgets: &[Widget], set: &[usize]) -> Vec<usize> {
    let lowest = set
        .iter()
        .map(|&n| widgets[n].bottom())
        .fold(f64::NEG_INFINITY, f64::max);
    set.iter().copied().filter(|&n| widgets[n].bottom() == lowest).collect()
}

/// Build the constraint system for a slice of widgets in reading order.
fn build(widgets: &[Widget], vars: &[Unknowns], options: Options) -> Vec<Constraint> {
    let above = adjacency::direct_above(widgets);
    let mut constraints = Vec::new();

    for (i, w) in widgets.iter().enumerate() {
        // Hiding collapses the emitted height to zero; a visible widget
        // keeps its authored height exactly.
        let height = if w.hidden { 0.0 } else { w.height };
        constraints.push(vars[i].h | EQ(REQUIRED) | height);

        // Canvas floor.
        constraints.push(vars[i].y | GE(REQUIRED) | 0.0);

        // Downward pressure: without it the inequality system is satisfied
        // by leaving every widget where it is, and nothing would collapse.
        // Weak, so any bound above outranks it.
        constraints.push(vars[i].y | EQ(WEAK) | 0.0);

        if above[i].is_empty() {
            // Root: anchored near its authored position.
            constraints.push(vars[i].y | GE(MEDIUM) | w.y);
        } else {
            let neighbors = if options.measure_only_nearest_above {
                nearest_above(widgets, &above[i])
            } else {
                above[i].clone()
            };
            for n in neighbors {
                // Preserve the authored gap, except below a collapsed
                // widget when collapse spacing is on.
                let spacing = if widgets[n].hidden && options.collapse_spacing {
                    0.0
                } else {
                    widgets[n].rect().vspan().gap_to(&w.rect().vspan())
                };
                constraints.push(vars[i].y | GE(MEDIUM) | vars[n].y + vars[n].h + spacing);
            }
        }

        // Hard non-overlap backstop: a visible widget never sits above the
        // bottom edge of any visible widget that precedes it and overlaps it
        // horizontally, whether or not adjacency reduction kept it. Uses the
        // original height, which a visible widget retains. Hidden widgets
        // are exempt on both sides: their solved height is zero, so they
        // cannot collide with anything.
        if !w.hidden {
            for j in 0..i {
                if !widgets[j].hidden && widgets[j].rect().overlaps_horizontally(&w.rect()) {
                    constraints.push(vars[i].y | GE(REQUIRED) | vars[j].y + widgets[j].height);
                }
            }
        }
    }

    constraints
}

/// Solve the widget system and return the reflowed copies, in the same
/// (reading) order as the input slice.
pub fn solve(widgets: &[Widget], options: Options) -> Result<Vec<Widget>> {
    let vars: Vec<Unknowns> = widgets
        .iter()
        .map(|_| Unknowns {
            y: Variable::new(),
            h: Variable::new(),
        })
        .collect();

    let constraints = build(widgets, &vars, options);
    debug!(constraints = constraints.len(), "constraint model built");

    let mut solver = Solver::new();
    for c in constraints {
        solver
            .add_constraint(c)
            .map_err(|e| Error::Infeasible(format!("{e:?}")))?;
    }

    // Variables the solver never moved stay at their default of zero.
    let mut values: HashMap<Variable, f64> = HashMap::new();
    for &(var, value) in solver.fetch_changes() {
        values.insert(var, value);
    }
    let value = |v: Variable| values.get(&v).copied().unwrap_or(0.0);

    Ok(widgets
        .iter()
        .zip(&vars)
        .map(|(w, u)| {
            let mut out = w.clone();
            out.y = value(u.y);
            out.height = value(u.h);
            out
        })
        .collect())
}
