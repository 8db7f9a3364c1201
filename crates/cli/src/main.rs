use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use limelight_core::annotation::domain::image_annotator::ImageAnnotator;
use limelight_core::annotation::infrastructure::font_resolver;
use limelight_core::annotation::infrastructure::labeled_box_annotator::LabeledBoxAnnotator;
use limelight_core::pipeline::annotate_images_use_case::AnnotateImagesUseCase;
use limelight_core::pipeline::compare_faces_use_case::CompareFacesUseCase;
use limelight_core::recognition::domain::vision_client::VisionClient;
use limelight_core::recognition::infrastructure::http_vision_client::{
    ClientConfig, HttpVisionClient,
};
use limelight_core::shared::assets::AssetCatalog;
use limelight_core::shared::constants::{
    DEFAULT_IMAGES, DEFAULT_IMAGES_DIR, DEFAULT_MATCH_CONFIDENCE_THRESHOLD, ENDPOINT_ENV,
};

/// Celebrity recognition and face comparison for local images.
#[derive(Parser)]
#[command(name = "limelight")]
struct Cli {
    /// Input image files, resolved against --images-dir.
    #[arg(default_values = DEFAULT_IMAGES)]
    images: Vec<String>,

    /// Directory holding the input images.
    #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
    images_dir: PathBuf,

    /// Annotate faces strictly above this match confidence (0-100).
    #[arg(long, default_value_t = DEFAULT_MATCH_CONFIDENCE_THRESHOLD)]
    confidence: f64,

    /// Font file for the name labels (default: discovered on the system).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Recognition service base URL (overrides LIMELIGHT_ENDPOINT).
    #[arg(long)]
    endpoint: Option<String>,

    /// Source image for the comparison step (default: first input).
    #[arg(long)]
    compare_source: Option<String>,

    /// Target image for the comparison step (default: second input).
    #[arg(long)]
    compare_target: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let catalog = AssetCatalog::new(&cli.images_dir);
    let inputs: Vec<PathBuf> = cli.images.iter().map(|name| catalog.resolve(name)).collect();

    let client = build_client(&cli)?;
    let annotator = build_annotator(&cli)?;

    let use_case = AnnotateImagesUseCase::new(client.clone(), annotator);
    let summary = use_case.execute(&inputs)?;
    for skipped in &summary.skipped {
        println!("No celebrities found in {}", skipped.display());
    }

    let (source, target) = comparison_inputs(&cli, &catalog, &inputs);
    let result = CompareFacesUseCase::new(client).execute(&source, &target)?;
    println!("Comparison result: {result}");

    Ok(())
}

fn build_client(cli: &Cli) -> Result<Arc<dyn VisionClient>, Box<dyn std::error::Error>> {
    let config = match &cli.endpoint {
        Some(endpoint) => ClientConfig::new(endpoint.clone()),
        None => ClientConfig::from_env().ok_or(format!(
            "No recognition endpoint configured; pass --endpoint or set {ENDPOINT_ENV}"
        ))?,
    };
    Ok(Arc::new(HttpVisionClient::new(config)))
}

fn build_annotator(cli: &Cli) -> Result<Box<dyn ImageAnnotator>, Box<dyn std::error::Error>> {
    let font_path = font_resolver::resolve(cli.font.as_deref())?;
    log::info!("Using label font {}", font_path.display());
    let font = font_resolver::load(&font_path)?;
    Ok(Box::new(
        LabeledBoxAnnotator::new(font).with_threshold(cli.confidence),
    ))
}

fn comparison_inputs(cli: &Cli, catalog: &AssetCatalog, inputs: &[PathBuf]) -> (PathBuf, PathBuf) {
    let source = cli
        .compare_source
        .as_ref()
        .map(|name| catalog.resolve(name))
        .unwrap_or_else(|| inputs[0].clone());
    let target = cli
        .compare_target
        .as_ref()
        .map(|name| catalog.resolve(name))
        .unwrap_or_else(|| inputs[1].clone());
    (source, target)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.images.is_empty() {
        return Err("At least one input image is required".into());
    }
    if !(0.0..=100.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 100.0, got {}",
            cli.confidence
        )
        .into());
    }
    let has_compare_pair = cli.compare_source.is_some() && cli.compare_target.is_some();
    if cli.images.len() < 2 && !has_compare_pair {
        return Err(
            "Face comparison needs two input images, or --compare-source and --compare-target"
                .into(),
        );
    }
    Ok(())
}
