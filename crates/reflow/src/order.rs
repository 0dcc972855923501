use crate::Widget;

/// Sort widgets into reading order: by top edge, then by left edge. The sort
/// is stable, so widgets tied on both keys keep their input order; later
/// stages rely on index position to mean "cannot be below".
pub fn reading_order(widgets: &mut [Widget]) {
    widgets.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
}
