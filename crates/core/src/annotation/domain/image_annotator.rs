use image::RgbImage;

use crate::shared::celebrity::Celebrity;

/// Draws labeled boxes for qualifying faces onto an image in place.
pub trait ImageAnnotator: Send {
    /// Returns the number of faces drawn. Drawing is infallible;
    /// off-canvas geometry is clipped.
    fn annotate(&self, image: &mut RgbImage, faces: &[Celebrity]) -> usize;
}
