use crate::foundation::core::{Point, Rect};
use crate::layout::measure::LineExtent;

/// Which point of a line box a text position refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Left edge, top of the line box.
    #[default]
    LeftTop,
    /// Horizontal and vertical center of the line box.
    MiddleMiddle,
    /// Right edge, on the baseline.
    RightBaseline,
}

impl Anchor {
    /// Top-left corner of a line box with `extent` whose anchor point sits at `at`.
    pub fn top_left(self, at: Point, extent: LineExtent) -> Point {
        match self {
            Self::LeftTop => at,
            Self::MiddleMiddle => Point::new(
                at.x - extent.width * 0.5,
                at.y - extent.height() * 0.5,
            ),
            Self::RightBaseline => Point::new(at.x - extent.width, at.y - extent.ascent),
        }
    }

    /// Line box with `extent` whose anchor point sits at `at`.
    pub fn rect(self, at: Point, extent: LineExtent) -> Rect {
        let p = self.top_left(at, extent);
        Rect::new(p.x, p.y, p.x + extent.width, p.y + extent.height())
    }
}
