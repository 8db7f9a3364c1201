use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::annotation::domain::image_annotator::ImageAnnotator;
use crate::shared::bounding_box::PixelRect;
use crate::shared::celebrity::Celebrity;
use crate::shared::constants::{
    BOX_COLOR, BOX_STROKE_WIDTH, DEFAULT_MATCH_CONFIDENCE_THRESHOLD, LABEL_FONT_SIZE,
    LABEL_OFFSET_Y, LABEL_TEXT_COLOR,
};

/// Draws a hollow box and a name label for every qualifying face.
pub struct LabeledBoxAnnotator {
    font: FontVec,
    threshold: f64,
    font_size: f32,
}

impl LabeledBoxAnnotator {
    pub fn new(font: FontVec) -> Self {
        Self {
            font,
            threshold: DEFAULT_MATCH_CONFIDENCE_THRESHOLD,
            font_size: LABEL_FONT_SIZE,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Stroke is built from concentric one-pixel rects growing outward,
    /// so the face itself stays uncovered.
    fn draw_outline(&self, image: &mut RgbImage, rect: &PixelRect) {
        let width = rect.width().max(1) as u32;
        let height = rect.height().max(1) as u32;
        for i in 0..BOX_STROKE_WIDTH {
            let offset = Rect::at(rect.left - i as i32, rect.top - i as i32)
                .of_size(width + 2 * i, height + 2 * i);
            draw_hollow_rect_mut(image, offset, Rgb(BOX_COLOR));
        }
    }

    /// The anchor may sit above the canvas for faces near the top edge;
    /// the label is then clipped rather than moved.
    fn draw_label(&self, image: &mut RgbImage, name: &str, x: i32, y: i32) {
        let scale = PxScale::from(self.font_size);
        let (text_width, text_height) = text_size(scale, &self.font, name);
        if text_width > 0 && text_height > 0 {
            let background = Rect::at(x, y).of_size(text_width, text_height);
            draw_filled_rect_mut(image, background, Rgb(BOX_COLOR));
        }
        draw_text_mut(image, Rgb(LABEL_TEXT_COLOR), x, y, scale, &self.font, name);
    }
}

impl ImageAnnotator for LabeledBoxAnnotator {
    fn annotate(&self, image: &mut RgbImage, faces: &[Celebrity]) -> usize {
        let mut drawn = 0;
        for face in faces {
            if !face.qualifies(self.threshold) {
                continue;
            }
            let rect = face
                .bounding_box
                .to_pixel_rect(image.width(), image.height());
            self.draw_outline(image, &rect);
            self.draw_label(image, &face.name, rect.left, rect.top - LABEL_OFFSET_Y);
            drawn += 1;
        }
        drawn
    }
}
