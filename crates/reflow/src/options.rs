/// Policy knobs for a single reflow invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// When true, a hidden neighbor contributes zero spacing below it, fully
    /// eliminating its vertical footprint. When false, the authored gap
    /// below a hidden widget is preserved even though its height collapses
    /// to zero.
    pub collapse_spacing: bool,

    /// When true, spacing constraints are generated only against the
    /// bottom-most direct-above neighbor(s), with exact ties keeping every
    /// tied candidate. When false, a spacing constraint is generated against
    /// every direct-above neighbor.
    pub measure_only_nearest_above: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            collapse_spacing: true,
            measure_only_nearest_above: true,
        }
    }
}
