//! Cell geometry shared by the page model, the presenter and the renderer.
//!
//! Coordinates are signed so that boxes expanded by padding or scrolled past
//! the origin stay representable. Widths and heights are never negative.

/// A point in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, offset: Offset) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

/// A scroll position or translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// An axis-aligned box in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    pub fn translate(&self, offset: Offset) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Grow the box by `padding` on all four sides.
    pub fn expand(&self, padding: i32) -> Self {
        Self::new(
            self.x - padding,
            self.y - padding,
            (self.width + padding * 2).max(0),
            (self.height + padding * 2).max(0),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Box of `width` x `height` centered within `self`.
    pub fn centered(&self, width: i32, height: i32) -> Self {
        Self::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }

    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right > left && bottom > top).then(|| Bounds::new(left, top, right - left, bottom - top))
    }
}

/// Frame around a viewport-relative `rect`, in document coordinates.
///
/// `top = rect.top + scroll.y - padding`, `left = rect.left + scroll.x - padding`,
/// and both dimensions grow by twice the padding.
pub fn highlight_bounds(rect: Bounds, scroll: Offset, padding: i32) -> Bounds {
    rect.translate(scroll).expand(padding)
}

/// Top-left corner of a panel anchored below-and-right of a viewport-relative `rect`.
pub fn panel_anchor(rect: Bounds, scroll: Offset, offset_x: i32, offset_y: i32) -> Point {
    Point::new(
        rect.left() + scroll.x + offset_x,
        rect.bottom() + scroll.y + offset_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_bounds_adds_scroll_and_padding() {
        let rect = Bounds::new(10, 5, 20, 3);
        let frame = highlight_bounds(rect, Offset::new(2, 40), 1);
        assert_eq!(frame, Bounds::new(11, 44, 22, 5));
    }

    #[test]
    fn test_highlight_bounds_of_zero_rect_without_padding() {
        assert_eq!(
            highlight_bounds(Bounds::ZERO, Offset::new(7, 9), 0),
            Bounds::new(7, 9, 0, 0)
        );
    }

    #[test]
    fn test_panel_anchor_uses_left_and_bottom() {
        let rect = Bounds::new(4, 10, 12, 3);
        assert_eq!(
            panel_anchor(rect, Offset::new(0, 20), 1, 1),
            Point::new(5, 34)
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let b = Bounds::new(0, 0, 2, 2);
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(1, 1)));
        assert!(!b.contains(Point::new(2, 1)));
        assert!(!b.contains(Point::new(1, 2)));
    }

    #[test]
    fn test_empty_bounds_contain_nothing() {
        assert!(!Bounds::ZERO.contains(Point::new(0, 0)));
    }

    #[test]
    fn test_centered() {
        let viewport = Bounds::new(0, 0, 80, 24);
        assert_eq!(viewport.centered(40, 10), Bounds::new(20, 7, 40, 10));
    }

    #[test]
    fn test_intersection() {
        let a = Bounds::new(0, 0, 10, 10);
        let b = Bounds::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Bounds::new(5, 5, 5, 5)));
        assert_eq!(a.intersection(&Bounds::new(20, 20, 1, 1)), None);
    }
}
