use serde::Deserialize;

/// A face location as reported by the recognition service.
///
/// All four fields are fractions of the image dimensions in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A bounding box projected onto a concrete image, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    /// Projects the normalized box onto an image of the given size.
    ///
    /// The right/bottom edges are summed in f64 and truncated once;
    /// truncating `left` and `width` separately rounds differently.
    pub fn to_pixel_rect(&self, image_width: u32, image_height: u32) -> PixelRect {
        let w = image_width as f64;
        let h = image_height as f64;
        PixelRect {
            left: (self.left * w) as i32,
            top: (self.top * h) as i32,
            right: ((self.left + self.width) * w) as i32,
            bottom: ((self.top + self.height) * h) as i32,
        }
    }
}

impl PixelRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
