use crate::encoder::{emit_font_block, header_lines, join_lines};
use crate::loader::{is_supported_image, load_grayscale};
use crate::models::*;
use crate::utils::sanitize_name;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Input files selected for conversion, plus the entries that were passed
/// over. Both lists are in ascending byte-wise filename order.
#[derive(Debug, Default)]
pub struct InputListing {
    pub selected: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Enumerate `dir` (non-recursive) in sorted filename order.
///
/// With `filter_extensions`, only regular files whose extension names a
/// known raster format are selected; everything else is skipped. Without
/// it, every entry is selected.
pub fn list_inputs(dir: &Path, filter_extensions: bool) -> Result<InputListing, ConvertError> {
    let read_dir_err = |source| ConvertError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        entries.push((entry.file_name(), entry.path()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut listing = InputListing::default();
    for (_, path) in entries {
        if !filter_extensions || (path.is_file() && is_supported_image(&path)) {
            listing.selected.push(path);
        } else {
            log::debug!("Skipping '{}'", path.display());
            listing.skipped.push(path);
        }
    }
    Ok(listing)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Produce the header text for `config` without touching the output file.
pub fn render(config: &ConverterConfig) -> Result<(String, ConvertReport), ConvertError> {
    let listing = list_inputs(&config.input_dir, config.filter_extensions)?;

    let mut report = ConvertReport {
        skipped: listing.skipped,
        ..Default::default()
    };
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut lines = header_lines(&config.emit);

    for path in &listing.selected {
        let file_name = file_name_of(path);
        let name = sanitize_name(&file_name);

        if let Some(first) = seen.get(&name) {
            match config.collisions {
                CollisionPolicy::Allow => {}
                CollisionPolicy::Warn => {
                    log::warn!(
                        "'{file_name}' and '{first}' both map to identifier '{name}'"
                    );
                }
                CollisionPolicy::Error => {
                    return Err(ConvertError::NameCollision {
                        name,
                        first: first.clone(),
                        second: file_name,
                    });
                }
            }
            report.collisions.push(name.clone());
        } else {
            seen.insert(name.clone(), file_name.clone());
        }

        let gray = load_grayscale(path)?;
        let record = FontRecord::from_grayscale(name, &gray)?;
        lines.extend(emit_font_block(&record, &config.emit));

        log::debug!(
            "Converted '{file_name}' as {} ({}x{})",
            record.name,
            record.width,
            record.height
        );
        report.fonts.push(ConvertedFont {
            file_name,
            name: record.name,
            width: record.width,
            height: record.height,
        });
    }

    Ok((join_lines(&lines), report))
}

/// Convert every font image in `config.input_dir` and write the header to
/// `config.output_path`.
///
/// The output file is written once, after all inputs were processed; any
/// error before that leaves an existing output untouched.
pub fn run(config: &ConverterConfig) -> Result<ConvertReport, ConvertError> {
    let (text, report) = render(config)?;

    fs::write(&config.output_path, text).map_err(|source| ConvertError::Write {
        path: config.output_path.clone(),
        source,
    })?;

    log::info!(
        "Wrote {} font(s) to '{}' ({} skipped)",
        report.fonts.len(),
        config.output_path.display(),
        report.skipped.len()
    );
    Ok(report)
}
