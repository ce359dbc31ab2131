/// Circle-circle overlap.
///
/// True iff the distance between the two centres is strictly less than the
/// sum of the radii, so circles that only touch do not overlap.
pub fn circles_overlap(ax: f64, ay: f64, ar: f64, bx: f64, by: f64, br: f64) -> bool {
    (ax - bx).hypot(ay - by) < ar + br
}
