/// An axis-aligned rectangle with its origin in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    #[inline]
    pub fn new(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self { pos, size }
    }

    /// The exclusive far corner. Computed in u64 so rectangles touching the
    /// edge of a `u32::MAX` sized bin don't wrap.
    pub fn max(&self) -> (u64, u64) {
        (
            u64::from(self.pos.0) + u64::from(self.size.0),
            u64::from(self.pos.1) + u64::from(self.size.1),
        )
    }

    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }

    /// Whether the two rectangles share any interior area. Rectangles that
    /// only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();

        let x_overlap = u64::from(self.pos.0) < b_max.0 && u64::from(other.pos.0) < a_max.0;
        let y_overlap = u64::from(self.pos.1) < b_max.1 && u64::from(other.pos.1) < a_max.1;

        x_overlap && y_overlap
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();

        self.pos.0 <= other.pos.0
            && self.pos.1 <= other.pos.1
            && b_max.0 <= a_max.0
            && b_max.1 <= a_max.1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overlapping() {
        let a = Rect::new((0, 0), (10, 10));
        let b = Rect::new((5, 5), (10, 10));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges() {
        let a = Rect::new((0, 0), (5, 5));

        assert!(!a.intersects(&Rect::new((5, 0), (5, 5))));
        assert!(!a.intersects(&Rect::new((0, 5), (5, 5))));
        assert!(!a.intersects(&Rect::new((5, 5), (5, 5))));
    }

    #[test]
    fn nested() {
        let outer = Rect::new((0, 0), (10, 10));
        let inner = Rect::new((2, 3), (4, 4));

        assert!(outer.intersects(&inner));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn contains_edge() {
        let bin = Rect::new((0, 0), (10, 10));

        assert!(bin.contains(&Rect::new((5, 5), (5, 5))));
        assert!(!bin.contains(&Rect::new((6, 5), (5, 5))));
    }

    #[test]
    fn huge_rects_dont_wrap() {
        let a = Rect::new((u32::MAX - 1, 0), (1, 1));

        assert_eq!(a.max(), (u64::from(u32::MAX), 1));
        assert!(!a.intersects(&Rect::new((0, 0), (1, 1))));
    }
}
