#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the last column. Widened so a rect ending at the edge of
    /// the coordinate space still covers its last column.
    pub const fn right(&self) -> u32 {
        self.x as u32 + self.width as u32
    }

    /// One past the last row.
    pub const fn bottom(&self) -> u32 {
        self.y as u32 + self.height as u32
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && u32::from(x) < self.right() && y >= self.y && u32::from(y) < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 4));
        assert!(!rect.contains(6, 4));
        assert!(!rect.contains(5, 5));
        assert!(!rect.contains(1, 3));
    }

    #[test]
    fn test_contains_last_coordinate() {
        let rect = Rect::new(u16::MAX - 5, u16::MAX - 1, 6, 2);
        assert_eq!(rect.right(), u32::from(u16::MAX) + 1);
        assert!(rect.contains(u16::MAX, u16::MAX));
        assert!(rect.contains(u16::MAX - 5, u16::MAX - 1));
        assert!(!rect.contains(u16::MAX - 6, u16::MAX));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::new(4, 4, 0, 3);
        assert!(rect.is_empty());
        assert!(!rect.contains(4, 4));
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
