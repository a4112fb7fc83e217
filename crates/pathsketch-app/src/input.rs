//! Pointer-position translation from client coordinates to canvas pixels.

use kurbo::{Point, Rect, Size};

/// A raw pointer event position, mouse or touch.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse position in client (CSS) coordinates.
    Mouse(Point),
    /// Active touches in client coordinates. Only the first one is used.
    Touch(Vec<Point>),
}

impl PointerInput {
    /// Client position of the pointer, if any.
    pub fn client_position(&self) -> Option<Point> {
        match self {
            PointerInput::Mouse(point) => Some(*point),
            PointerInput::Touch(touches) => touches.first().copied(),
        }
    }

    /// Position in canvas backing-store pixels.
    pub fn device_position(&self, element: Rect, backing: Size) -> Option<Point> {
        device_position(self.client_position()?, element, backing)
    }
}

/// Map a client position onto the canvas backing store.
///
/// `element` is the canvas element's on-screen rectangle and `backing` the
/// pixel size of its backing store. Returns `None` for a zero-sized element.
pub fn device_position(client: Point, element: Rect, backing: Size) -> Option<Point> {
    if element.width() <= 0.0 || element.height() <= 0.0 {
        log::debug!("Ignoring pointer over zero-sized element {:?}", element);
        return None;
    }

    let scale_x = backing.width / element.width();
    let scale_y = backing.height / element.height();
    Some(Point::new(
        (client.x - element.x0) * scale_x,
        (client.y - element.y0) * scale_y,
    ))
}
