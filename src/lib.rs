//! # fontheader: bitmap font images to C header declarations
//!
//! A build-time converter that reads a directory of font images, reduces each
//! one to monochrome and writes a C-like header with, per font, its width,
//! its height and a flattened byte array of `0x00`/`0xff` pixels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # #[cfg(feature = "decode")]
//! # {
//! use fontheader::{run, ConverterConfig};
//!
//! // Reads `fonts/` and writes `src/assets.h`
//! let report = run(&ConverterConfig::default())?;
//! for font in &report.fonts {
//!     println!("{} -> FONT_{} ({}x{})", font.file_name, font.name, font.width, font.height);
//! }
//! # }
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Layout
//!
//! The header starts with a banner, `#pragma once` and an `#include` of the
//! header that defines `U32` and `U8`. Each font image `my-font 1.png` then
//! contributes:
//!
//! ```text
//! const U32 FONT_MY_FONT_1_PNG_WIDTH = 2;
//! const U32 FONT_MY_FONT_1_PNG_HEIGHT = 2;
//! const U8 FONT_MY_FONT_1_PNG_BYTES[] = {
//!     0xff, 0x00,
//!     0x00, 0xff,
//!     0x00, 0xff,
//! };
//! ```
//!
//! Only pure white pixels become `0xff`; everything else is ink. The last row
//! is repeated by default so that output stays byte-identical with headers
//! generated earlier; see [`EmitOptions::duplicate_last_row`].
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<T, ConvertError>`. A run either
//! processes every input and writes the header, or fails without touching
//! the output file.

#[cfg(feature = "decode")]
mod converter;
mod encoder;
#[cfg(feature = "decode")]
pub mod loader;
mod models;
mod utils;

#[cfg(feature = "decode")]
pub use crate::converter::{list_inputs, render, run, InputListing};
pub use crate::encoder::{
    declaration_names, emit_font_block, header_lines, join_lines, to_header_string, BANNER,
};
#[cfg(feature = "decode")]
pub use crate::loader::load_grayscale;
pub use crate::models::*;
pub use crate::utils::{binarize, is_valid_identifier, sanitize_name};

impl FontRecord {
    /// Build a record from already binarized pixels.
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, ConvertError> {
        let name = name.into();
        models::check_len(&name, width, height, pixels.len())?;
        Ok(Self {
            name,
            width,
            height,
            pixels,
        })
    }

    /// Binarize a grayscale image into a record named `name`.
    pub fn from_grayscale(
        name: impl Into<String>,
        image: &GrayscaleImage,
    ) -> Result<Self, ConvertError> {
        let pixels = image.intensities.iter().map(|&v| binarize(v)).collect();
        Self::new(name, image.width, image.height, pixels)
    }
}
