use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use thiserror::Error;

use crate::shared::constants::FONT_ENV;

#[derive(Error, Debug)]
pub enum FontResolveError {
    #[error("font file not found: {0}")]
    NotFound(PathBuf),
    #[error("no font file found in the system font directories; set LIMELIGHT_FONT or pass a font path")]
    NoSystemFont,
    #[error("failed to read font {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid font data in {0}")]
    Invalid(PathBuf),
}

pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// Resolve the label font.
///
/// Resolution order:
/// 1. Explicit path (from the CLI)
/// 2. `LIMELIGHT_FONT` environment variable
/// 3. First `.ttf`/`.otf` under the platform font directories
pub fn resolve(explicit: Option<&Path>) -> Result<PathBuf, FontResolveError> {
    if let Some(path) = explicit {
        return existing(path);
    }

    if let Ok(path) = std::env::var(FONT_ENV) {
        return existing(Path::new(&path));
    }

    for dir in font_dirs() {
        if let Some(found) = first_font_in(&dir) {
            return Ok(found);
        }
    }
    Err(FontResolveError::NoSystemFont)
}

/// Reads and parses a font file.
pub fn load(path: &Path) -> Result<FontVec, FontResolveError> {
    let data = fs::read(path).map_err(|e| FontResolveError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    FontVec::try_from_vec(data).map_err(|_| FontResolveError::Invalid(path.to_path_buf()))
}

fn existing(path: &Path) -> Result<PathBuf, FontResolveError> {
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(FontResolveError::NotFound(path.to_path_buf()))
    }
}

/// Platform font directories, most specific first.
fn font_dirs() -> Vec<PathBuf> {
    let mut dirs_to_scan = Vec::new();
    if let Some(dir) = dirs::font_dir() {
        dirs_to_scan.push(dir);
    }
    #[cfg(target_os = "macos")]
    {
        dirs_to_scan.push(PathBuf::from("/System/Library/Fonts"));
        dirs_to_scan.push(PathBuf::from("/Library/Fonts"));
    }
    #[cfg(target_os = "windows")]
    {
        dirs_to_scan.push(PathBuf::from(r"C:\Windows\Fonts"));
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        dirs_to_scan.push(PathBuf::from("/usr/share/fonts"));
        dirs_to_scan.push(PathBuf::from("/usr/local/share/fonts"));
    }
    dirs_to_scan
}

fn first_font_in(dir: &Path) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    for path in &entries {
        if path.is_dir() {
            if let Some(found) = first_font_in(path) {
                return Some(found);
            }
        } else if is_font_file(path) {
            return Some(path.clone());
        }
    }
    None
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
