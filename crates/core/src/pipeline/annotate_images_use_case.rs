use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::annotation::domain::image_annotator::ImageAnnotator;
use crate::pipeline::run_error::RunError;
use crate::recognition::domain::vision_client::VisionClient;
use crate::shared::constants::RESULT_SUFFIX;

/// What a run produced: annotated outputs and inputs with no matches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub annotated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Sequential annotation pipeline: read → recognize → draw → write.
///
/// Each image runs to completion before the next starts. The first
/// failure aborts the run; nothing is retried.
pub struct AnnotateImagesUseCase {
    client: Arc<dyn VisionClient>,
    annotator: Box<dyn ImageAnnotator>,
}

impl AnnotateImagesUseCase {
    pub fn new(client: Arc<dyn VisionClient>, annotator: Box<dyn ImageAnnotator>) -> Self {
        Self { client, annotator }
    }

    pub fn execute(&self, inputs: &[PathBuf]) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();

        for input in inputs {
            log::info!("Recognizing celebrities in {}", input.display());
            let bytes = fs::read(input).map_err(|e| RunError::FileAccess {
                path: input.clone(),
                source: e,
            })?;

            let faces = self.client.recognize_celebrities(&bytes)?;
            if faces.is_empty() {
                summary.skipped.push(input.clone());
                continue;
            }

            let mut image = image::open(input)
                .map_err(|e| RunError::ImageDecode {
                    path: input.clone(),
                    source: e,
                })?
                .to_rgb8();
            let drawn = self.annotator.annotate(&mut image, &faces);

            let output = result_path(input);
            image.save(&output).map_err(|e| RunError::ImageWrite {
                path: output.clone(),
                source: e,
            })?;
            log::info!("{drawn} face(s) drawn, output written to {}", output.display());
            summary.annotated.push(output);
        }

        Ok(summary)
    }
}

/// Output path alongside the input: `bbc.jpg` → `bbc-result.jpg`.
pub fn result_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match input.extension().and_then(|s| s.to_str()) {
        Some(ext) => input.with_file_name(format!("{stem}{RESULT_SUFFIX}.{ext}")),
        None => input.with_file_name(format!("{stem}{RESULT_SUFFIX}")),
    }
}
