//! Stack-based scanline flood fill.

/// A surface the flood fill can query and mutate.
///
/// The predicate and the write go through one receiver because filling
/// typically mutates the same state the predicate reads: the usual
/// implementation tests a cell's colour against a captured source
/// colour, so cells stop being fillable the moment they are filled and
/// no separate visited set is needed. `fillable` must be consistent
/// for a fixed surface state; the fill does not re-check cells after
/// writing them.
pub trait FloodSurface {
    /// Whether the cell at `(x, y)` belongs to the region being filled.
    /// Only called with coordinates inside the fill bounds.
    fn fillable(&self, x: i32, y: i32) -> bool;

    /// Fill the cell at `(x, y)`. Called exactly once per region cell.
    fn fill(&mut self, x: i32, y: i32);
}

/// Flood-fill the 4-connected region around `(x, y)`.
///
/// Visits every fillable pixel reachable from the seed without
/// crossing a non-fillable pixel, restricted to
/// `[0, width) × [0, height)`. Rows are processed left to right; new
/// rows are discovered through a LIFO stack of seed points, one per
/// fillable run in the rows above and below the current scan, so stack
/// depth stays proportional to the number of runs rather than the
/// region area. A seed outside the bounds is a no-op.
pub fn flood_fill(
    surface: &mut impl FloodSurface,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    let width = width as i32;
    let height = height as i32;

    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }

    let mut stack = vec![(x, y)];

    while let Some((x, y)) = stack.pop() {
        // Walk left to the start of this row's fillable run.
        let mut x1 = x;
        while x1 >= 0 && surface.fillable(x1, y) {
            x1 -= 1;
        }
        x1 += 1;

        let mut is_above = false;
        let mut is_below = false;

        // Fill rightward, seeding at most one point per run in the
        // rows above and below. The flags reset when a run ends so a
        // later run in the same row gets its own seed.
        while x1 < width && surface.fillable(x1, y) {
            surface.fill(x1, y);

            if !is_above && y > 0 && surface.fillable(x1, y - 1) {
                stack.push((x1, y - 1));
                is_above = true;
            } else if is_above && y > 0 && !surface.fillable(x1, y - 1) {
                is_above = false;
            }

            if !is_below && y < height - 1 && surface.fillable(x1, y + 1) {
                stack.push((x1, y + 1));
                is_below = true;
            } else if is_below && y < height - 1 && !surface.fillable(x1, y + 1) {
                is_below = false;
            }

            x1 += 1;
        }
    }
}
