use crucible_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(12, 12);
        assert_eq!(manhattan(a, b), 24);
        assert_eq!(manhattan(b, a), 24);
        assert_eq!(manhattan(Point::new(3, -1), Point::new(-2, 4)), 10);
        assert_eq!(manhattan(a, a), 0);
    }
}
