/// Faces at or below this confidence get no box and no label.
pub const DEFAULT_MATCH_CONFIDENCE_THRESHOLD: f64 = 90.0;

/// Box outline stroke width in pixels.
pub const BOX_STROKE_WIDTH: u32 = 3;

pub const BOX_COLOR: [u8; 3] = [255, 0, 0];
pub const LABEL_TEXT_COLOR: [u8; 3] = [255, 255, 255];

/// Vertical distance from the box top to the label anchor.
pub const LABEL_OFFSET_Y: i32 = 20;

pub const LABEL_FONT_SIZE: f32 = 20.0;

/// Appended to the input file stem when writing the annotated copy.
pub const RESULT_SUFFIX: &str = "-result";

pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_IMAGES: &[&str] = &["bbc.jpg", "msn.jpg", "neymar-torcedores.jpg"];

pub const ENDPOINT_ENV: &str = "LIMELIGHT_ENDPOINT";
pub const API_KEY_ENV: &str = "LIMELIGHT_API_KEY";
pub const FONT_ENV: &str = "LIMELIGHT_FONT";
