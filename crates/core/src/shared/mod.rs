pub mod assets;
pub mod bounding_box;
pub mod celebrity;
pub mod comparison;
pub mod constants;
