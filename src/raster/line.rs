//! Discrete line rasterization.

/// Visit every pixel on the line from `(x0, y0)` to `(x1, y1)`
/// inclusive, in order, using Bresenham's algorithm.
///
/// Integer arithmetic only; the first call is always the exact start
/// point and no pixel is visited twice along the way. Used to connect
/// consecutive pointer samples into a continuous stroke.
pub fn line(mut x0: i32, mut y0: i32, x1: i32, y1: i32, mut visit: impl FnMut(i32, i32)) {
    visit(x0, y0);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    while x0 != x1 || y0 != y1 {
        let err2 = 2 * err;

        if err2 > -dy {
            err -= dy;
            x0 += sx;
        }

        if err2 < dx {
            err += dx;
            y0 += sy;
        }

        visit(x0, y0);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn collect(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        line(x0, y0, x1, y1, |x, y| points.push((x, y)));
        points
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(collect(0, 0, 3, 0), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_vertical() {
        assert_eq!(collect(2, 1, 2, -2), vec![(2, 1), (2, 0), (2, -1), (2, -2)]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(collect(5, 5, 5, 5), vec![(5, 5)]);
    }

    #[test]
    fn test_starts_at_seed() {
        let points = collect(7, -3, 0, 0);
        assert_eq!(points[0], (7, -3));
        assert_eq!(*points.last().unwrap(), (0, 0));
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(collect(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_shallow_slope_visits_every_column_once() {
        let points = collect(0, 0, 9, 3);

        assert_eq!(points.len(), 10);
        for (i, &(x, _)) in points.iter().enumerate() {
            assert_eq!(x, i as i32);
        }
    }

    #[test]
    fn test_steep_slope_visits_every_row_once() {
        let points = collect(0, 0, 3, 9);

        assert_eq!(points.len(), 10);
        for (i, &(_, y)) in points.iter().enumerate() {
            assert_eq!(y, i as i32);
        }
    }

    #[test]
    fn test_symmetry() {
        let forward: HashSet<_> = collect(1, 2, 8, 5).into_iter().collect();
        let backward: HashSet<_> = collect(8, 5, 1, 2).into_iter().collect();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_no_duplicate_pixels() {
        let points = collect(-4, 7, 11, -2);
        let unique: HashSet<_> = points.iter().copied().collect();

        assert_eq!(unique.len(), points.len());
    }
}
