use thiserror::Error;

use crate::shared::celebrity::Celebrity;
use crate::shared::comparison::ComparisonResult;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{operation} rejected by service ({code}): {message}")]
    Service {
        operation: &'static str,
        code: String,
        message: String,
    },
}

/// The two cloud vision operations behind one seam.
///
/// Implementations are stateless request/response, so a single handle
/// is shared across use cases without synchronization.
pub trait VisionClient: Send + Sync {
    /// An empty list is a valid result: no recognizable celebrities.
    fn recognize_celebrities(&self, image: &[u8]) -> Result<Vec<Celebrity>, VisionError>;

    fn compare_faces(&self, source: &[u8], target: &[u8])
        -> Result<ComparisonResult, VisionError>;
}
