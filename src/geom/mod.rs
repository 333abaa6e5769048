mod anchors;
mod point;
mod rect;

pub use anchors::Anchors;
pub use point::Point;
pub use rect::Rect;
