//! Writing rendered diagrams to disk.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{error, info};

use crate::error::FenboardError;

/// Writes an SVG string to `path`, replacing any existing file.
pub fn write_svg(path: &Path, svg: &str) -> Result<(), FenboardError> {
    info!(path:? = path; "Writing SVG file");
    let mut file = File::create(path).inspect_err(|err| {
        error!(path:? = path, err:% = err; "Failed to create SVG file");
    })?;
    file.write_all(svg.as_bytes()).inspect_err(|err| {
        error!(path:? = path, err:% = err; "Failed to write SVG content");
    })?;
    Ok(())
}

/// Derives the output path of one ply: `game.svg` becomes `game-3.svg`.
///
/// ```
/// # use std::path::Path;
/// # use fenboard::export::ply_output_path;
/// let path = ply_output_path(Path::new("out/game.svg"), 3).unwrap();
/// assert_eq!(path, Path::new("out/game-3.svg"));
/// ```
///
/// # Errors
///
/// Returns [`FenboardError::Export`] if `output` has no file name.
pub fn ply_output_path(output: &Path, ply: usize) -> Result<PathBuf, FenboardError> {
    let stem = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            FenboardError::Export(format!("output path `{}` has no file name", output.display()))
        })?;
    let extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("svg");
    Ok(output.with_file_name(format!("{stem}-{ply}.{extension}")))
}
