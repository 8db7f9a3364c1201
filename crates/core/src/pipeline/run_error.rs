use std::path::PathBuf;

use thiserror::Error;

use crate::recognition::domain::vision_client::VisionError;

/// Failures surfaced by the pipeline use cases.
///
/// Local file problems are kept distinct from network and service
/// failures so the report names what actually went wrong.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write annotated image {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Vision(#[from] VisionError),
}
