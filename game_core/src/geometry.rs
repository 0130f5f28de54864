/// Axis-aligned integer rectangle, y-down coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Move the rectangle so its left edge sits at `x`
    pub fn set_left(&mut self, x: i32) {
        self.x = x;
    }

    /// Move the rectangle so its right edge sits at `x`
    pub fn set_right(&mut self, x: i32) {
        self.x = x - self.w;
    }

    /// Move the rectangle so its top edge sits at `y`
    pub fn set_top(&mut self, y: i32) {
        self.y = y;
    }

    /// Move the rectangle so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: i32) {
        self.y = y - self.h;
    }

    /// Strict overlap test: rectangles that merely touch along an edge
    /// do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.center_x(), 25);
        assert_eq!(rect.center_y(), 40);
    }

    #[test]
    fn test_edge_setters_shift_origin() {
        let mut rect = Rect::new(0, 0, 30, 40);

        rect.set_right(100);
        assert_eq!(rect.x, 70, "set_right should place right edge at 100");

        rect.set_left(5);
        assert_eq!(rect.x, 5);

        rect.set_bottom(200);
        assert_eq!(rect.y, 160, "set_bottom should place bottom edge at 200");

        rect.set_top(3);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_rects_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 10, 10);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_edge_touching_rects_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let beside = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.overlaps(&beside), "shared vertical edge is not overlap");
        assert!(!a.overlaps(&below), "shared horizontal edge is not overlap");
    }
}
