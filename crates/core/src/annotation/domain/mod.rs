pub mod image_annotator;
