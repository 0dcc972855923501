use tracing::debug;

use crate::Widget;

/// Compute the direct-above neighbor sets for a slice of widgets already in
/// reading order. Entry `i` holds the indices of the widgets directly above
/// widget `i`: the nearest horizontally-overlapping rectangles not shadowed
/// by a closer one in between.
///
/// The relation is index-based into the sorted slice and recomputed from
/// scratch on every invocation.
pub fn direct_above(widgets: &[Widget]) -> Vec<Vec<usize>> {
    // Raw above set: every earlier widget in reading order that lies
    // strictly above us (bottom edge at or above our top) and whose
    // horizontal extent overlaps ours. The sort guarantees earlier widgets
    // are not below us; touching edges do not count as overlap.
    let mut above: Vec<Vec<usize>> = vec![Vec::new(); widgets.len()];
    for i in 0..widgets.len() {
        for j in 0..i {
            if widgets[j].bottom() <= widgets[i].y
                && widgets[j].rect().overlaps_horizontally(&widgets[i].rect())
            {
                above[i].push(j);
            }
        }
    }

    // Shadow reduction: drop a candidate when another candidate in the same
    // set already has it in its own above set. What survives are the
    // maximal (nearest, unobstructed) neighbors.
    let direct: Vec<Vec<usize>> = above
        .iter()
        .map(|set| {
            set.iter()
                .copied()
                .filter(|&c| !set.iter().any(|&c2| c2 != c && above[c2].contains(&c)))
                .collect()
        })
        .collect();

    debug!(
        widgets = widgets.len(),
        edges = direct.iter().map(Vec::len).sum::<usize>(),
        "adjacency graph built"
    );
    direct
}
