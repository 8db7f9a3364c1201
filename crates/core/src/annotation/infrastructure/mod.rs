pub mod font_resolver;
pub mod labeled_box_annotator;
