use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::pipeline::run_error::RunError;
use crate::recognition::domain::vision_client::VisionClient;
use crate::shared::comparison::ComparisonResult;

/// Reads two images and asks the service how similar their faces are.
///
/// The response is returned exactly as the service produced it.
pub struct CompareFacesUseCase {
    client: Arc<dyn VisionClient>,
}

impl CompareFacesUseCase {
    pub fn new(client: Arc<dyn VisionClient>) -> Self {
        Self { client }
    }

    pub fn execute(&self, source: &Path, target: &Path) -> Result<ComparisonResult, RunError> {
        log::info!(
            "Comparing faces in {} and {}",
            source.display(),
            target.display()
        );
        let source_bytes = read(source)?;
        let target_bytes = read(target)?;
        Ok(self.client.compare_faces(&source_bytes, &target_bytes)?)
    }
}

fn read(path: &Path) -> Result<Vec<u8>, RunError> {
    fs::read(path).map_err(|e| RunError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })
}
