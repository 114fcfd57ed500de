#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Size {
        Size { w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }
}

/// The rectangle of size `inner` centered within a window of size `outer`.
///
/// When `inner` is larger than `outer` the offset goes negative and the
/// rectangle hangs over every edge by the same amount.
pub fn centered(outer: Size, inner: Size) -> Rect {
    let x = (outer.w as i64 - inner.w as i64) / 2;
    let y = (outer.h as i64 - inner.h as i64) / 2;
    Rect::new(x as i32, y as i32, inner.w, inner.h)
}

#[cfg(feature = "sdl2")]
impl From<Rect> for sdl2::rect::Rect {
    #[inline]
    fn from(value: Rect) -> Self {
        sdl2::rect::Rect::new(value.x, value.y, value.w, value.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_in_window() {
        let r = centered(Size::new(640, 480), Size::new(48, 48));
        assert_eq!(r, Rect::new(296, 216, 48, 48));
    }

    #[test]
    fn centered_odd_remainder_rounds_down() {
        let r = centered(Size::new(11, 10), Size::new(4, 4));
        assert_eq!(r, Rect::new(3, 3, 4, 4));
    }

    #[test]
    fn centered_larger_than_window() {
        let r = centered(Size::new(40, 40), Size::new(48, 60));
        assert_eq!(r, Rect::new(-4, -10, 48, 60));
    }
}
