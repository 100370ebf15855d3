use std::path::PathBuf;

/// An 8-bit grayscale raster as produced by the decoder.
///
/// Intensities are stored row-major, top-to-bottom and left-to-right,
/// where 0 is black and 255 is white.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrayscaleImage {
    pub width: u32,
    pub height: u32,
    pub intensities: Vec<u8>,
}

impl GrayscaleImage {
    pub fn new(width: u32, height: u32, intensities: Vec<u8>) -> Result<Self, ConvertError> {
        check_len("grayscale image", width, height, intensities.len())?;
        Ok(Self {
            width,
            height,
            intensities,
        })
    }

    /// Intensity at column `x`, row `y`.
    pub fn intensity(&self, x: u32, y: u32) -> u8 {
        self.intensities[y as usize * self.width as usize + x as usize]
    }
}

/// A single font image reduced to monochrome, ready to be emitted.
///
/// `pixels` holds one byte per pixel, either `0x00` (ink) or `0xFF`
/// (background), row-major. `pixels.len() == width * height` always holds
/// for records built through [`FontRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontRecord {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl FontRecord {
    /// Row `y` of the monochrome pixels.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for FontRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(empty bitmap)");
        }

        for y in 0..self.height {
            for &pixel in self.row(y) {
                write!(f, "{}", if pixel == 0 { "@" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Options controlling the generated header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Header pulled in for the `U32`/`U8` type aliases.
    pub include_header: String,
    /// Repeat the last row line after the row loop, as existing generated
    /// headers do.
    pub duplicate_last_row: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            include_header: "core.h".to_string(),
            duplicate_last_row: true,
        }
    }
}

/// What to do when two filenames sanitize to the same identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionPolicy {
    /// Emit both declarations without comment.
    Allow,
    /// Emit both declarations and log a warning.
    #[default]
    Warn,
    /// Abort the run.
    Error,
}

impl std::str::FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(CollisionPolicy::Allow),
            "warn" => Ok(CollisionPolicy::Warn),
            "error" => Ok(CollisionPolicy::Error),
            other => Err(format!(
                "Invalid collision policy '{other}', expected allow, warn or error"
            )),
        }
    }
}

/// Locations and switches for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub emit: EmitOptions,
    /// Only decode regular files with a recognized raster image extension.
    pub filter_extensions: bool,
    pub collisions: CollisionPolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("fonts"),
            output_path: PathBuf::from("src/assets.h"),
            emit: EmitOptions::default(),
            filter_extensions: true,
            collisions: CollisionPolicy::default(),
        }
    }
}

/// One processed input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFont {
    pub file_name: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Summary of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertReport {
    pub fonts: Vec<ConvertedFont>,
    pub skipped: Vec<PathBuf>,
    pub collisions: Vec<String>,
}

#[derive(Debug)]
pub enum ConvertError {
    Io(std::io::Error),
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[cfg(feature = "decode")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    DimensionMismatch {
        what: String,
        width: u32,
        height: u32,
        actual: usize,
    },
    NameCollision {
        name: String,
        first: String,
        second: String,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Io(err) => write!(f, "IO error: {err}"),
            ConvertError::ReadDir { path, source } => {
                write!(f, "Cannot read directory '{}': {source}", path.display())
            }
            ConvertError::Write { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
            #[cfg(feature = "decode")]
            ConvertError::Decode { path, source } => {
                write!(f, "Cannot decode image '{}': {source}", path.display())
            }
            ConvertError::DimensionMismatch {
                what,
                width,
                height,
                actual,
            } => {
                write!(
                    f,
                    "Pixel count mismatch for {what}: {width}x{height} needs {} pixels, got {actual}",
                    *width as usize * *height as usize
                )
            }
            ConvertError::NameCollision {
                name,
                first,
                second,
            } => {
                write!(
                    f,
                    "Identifier '{name}' produced by both '{first}' and '{second}'"
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            ConvertError::ReadDir { source, .. } | ConvertError::Write { source, .. } => {
                Some(source)
            }
            #[cfg(feature = "decode")]
            ConvertError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

pub(crate) fn check_len(
    what: &str,
    width: u32,
    height: u32,
    actual: usize,
) -> Result<(), ConvertError> {
    if width as usize * height as usize != actual {
        return Err(ConvertError::DimensionMismatch {
            what: what.to_string(),
            width,
            height,
            actual,
        });
    }
    Ok(())
}
