use ratatui::layout::{Rect, Size};

/// Return a `Rect` of the given size centered within `area`.  If `size` is
/// larger than `area` in either dimension, the result is shrunk to fit.
/// When the leftover space is odd, the extra cell goes below or to the right.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x.saturating_add((area.width - width) / 2),
        y: area.y.saturating_add((area.height - height) / 2),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(40, 24), Rect::new(20, 0, 40, 24))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(25, 3), Rect::new(27, 10, 25, 3))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(9, 4), Rect::new(10, 10, 9, 4))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(30, 4), Rect::new(5, 10, 20, 4))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(20, 10), Rect::new(5, 7, 20, 10))]
    #[case(Rect::ZERO, Size::new(3, 3), Rect::ZERO)]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
