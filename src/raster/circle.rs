//! Midpoint (Bresenham) circle.

use super::saturate;
use crate::geometry::{CircleRequest, GridCell};
use std::iter::FusedIterator;

/// Bresenham's circle: walks one octant and mirrors each point eight ways.
///
/// Starts at `(0, r)` with decision variable `d = 3 - 2r` and runs while
/// `y >= x`. Every mirrored point is yielded, so cells on the axes and on
/// the diagonals appear more than once; a set-backed sink absorbs them.
#[derive(Debug, Clone)]
pub struct BresenhamCircle {
    xc: i64,
    yc: i64,
    x: i64,
    y: i64,
    d: i64,
    mirror: u8,
}

impl BresenhamCircle {
    /// Start rasterizing `circle`.
    #[must_use]
    pub fn new(circle: CircleRequest) -> Self {
        let r = i64::from(circle.radius);
        Self {
            xc: i64::from(circle.center.x),
            yc: i64::from(circle.center.y),
            x: 0,
            y: r,
            d: 3 - 2 * r,
            mirror: 0,
        }
    }

    /// Offset of the current octant point under mirror `k` (0..8).
    fn offset(&self, k: u8) -> (i64, i64) {
        let (x, y) = (self.x, self.y);
        match k {
            0 => (x, y),
            1 => (-x, y),
            2 => (x, -y),
            3 => (-x, -y),
            4 => (y, x),
            5 => (-y, x),
            6 => (y, -x),
            _ => (-y, -x),
        }
    }

    fn advance(&mut self) {
        self.x += 1;
        if self.d > 0 {
            self.y -= 1;
            self.d += 4 * (self.x - self.y) + 10;
        } else {
            self.d += 4 * self.x + 6;
        }
    }
}

impl Iterator for BresenhamCircle {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.y < self.x {
            return None;
        }

        let (ox, oy) = self.offset(self.mirror);
        let cell = GridCell::new(saturate(self.xc + ox), saturate(self.yc + oy));

        self.mirror += 1;
        if self.mirror == 8 {
            self.mirror = 0;
            self.advance();
        }
        Some(cell)
    }
}

impl FusedIterator for BresenhamCircle {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn circle_set(xc: i32, yc: i32, r: i32) -> BTreeSet<(i32, i32)> {
        let req = CircleRequest::new(GridCell::new(xc, yc), r).unwrap();
        BresenhamCircle::new(req).map(Into::into).collect()
    }

    #[test]
    fn test_zero_radius_is_center_only() {
        let req = CircleRequest::new(GridCell::new(4, 9), 0).unwrap();
        let raw: Vec<GridCell> = BresenhamCircle::new(req).collect();
        // One octant step, eight mirrors, all on the center.
        assert_eq!(raw.len(), 8);
        assert_eq!(circle_set(4, 9, 0), BTreeSet::from([(4, 9)]));
    }

    #[test]
    fn test_radius_one() {
        let expected = BTreeSet::from([
            (0, 1),
            (0, -1),
            (1, 0),
            (-1, 0),
        ]);
        // d = 1 > 0 after the first octant point, so y drops below x.
        assert_eq!(circle_set(0, 0, 1), expected);
    }

    #[test]
    fn test_radius_five_octant_symmetry() {
        let set = circle_set(0, 0, 5);
        for &(x, y) in &set {
            for mirrored in [
                (x, y),
                (-x, y),
                (x, -y),
                (-x, -y),
                (y, x),
                (-y, x),
                (y, -x),
                (-y, -x),
            ] {
                assert!(set.contains(&mirrored), "missing {mirrored:?} for ({x}, {y})");
            }
        }
        assert!(set.contains(&(5, 0)));
        assert!(set.contains(&(0, -5)));
    }

    #[test]
    fn test_radius_five_first_octant() {
        let req = CircleRequest::new(GridCell::ORIGIN, 5).unwrap();
        let octant: Vec<(i32, i32)> = BresenhamCircle::new(req)
            .step_by(8)
            .map(Into::into)
            .collect();
        assert_eq!(octant, vec![(0, 5), (1, 5), (2, 4), (3, 3)]);
    }

    #[test]
    fn test_points_stay_near_radius() {
        for r in 1..40 {
            for (x, y) in circle_set(0, 0, r) {
                let dist = f64::from(x).hypot(f64::from(y));
                assert!(
                    (dist - f64::from(r)).abs() < 1.5,
                    "r={r}: ({x}, {y}) at {dist}"
                );
            }
        }
    }

    #[test]
    fn test_translation_by_center() {
        let at_origin = circle_set(0, 0, 7);
        let shifted = circle_set(30, -4, 7);
        let moved: BTreeSet<(i32, i32)> = at_origin
            .iter()
            .map(|&(x, y)| (x + 30, y - 4))
            .collect();
        assert_eq!(moved, shifted);
    }

    #[test]
    fn test_fused_after_end() {
        let req = CircleRequest::new(GridCell::ORIGIN, 3).unwrap();
        let mut it = BresenhamCircle::new(req);
        while it.next().is_some() {}
        assert_eq!(it.next(), None);
    }
}
