use crate::models::*;
use crate::utils::is_valid_identifier;
use std::fmt::Write;

pub const BANNER: &str = "/* Auto-generated */";

/// Declaration names for a font identifier, in emission order:
/// width, height, bytes.
pub fn declaration_names(name: &str) -> [String; 3] {
    [
        format!("FONT_{name}_WIDTH"),
        format!("FONT_{name}_HEIGHT"),
        format!("FONT_{name}_BYTES"),
    ]
}

/// The fixed lines every generated header starts with.
pub fn header_lines(options: &EmitOptions) -> Vec<String> {
    vec![
        BANNER.to_string(),
        "#pragma once".to_string(),
        format!("#include \"{}\"", options.include_header),
        String::new(),
    ]
}

fn row_line(row: &[u8]) -> String {
    let mut line = String::with_capacity(4 + row.len() * 6);
    line.push_str("    ");
    for &pixel in row {
        let _ = write!(line, "0x{pixel:02x}, ");
    }
    line
}

/// Emit the declarations for one font.
///
/// Lines: width constant, height constant, array opening, one line per
/// pixel row, closing brace, blank separator. With
/// [`EmitOptions::duplicate_last_row`] set, the last row line is repeated
/// before the closing brace.
pub fn emit_font_block(record: &FontRecord, options: &EmitOptions) -> Vec<String> {
    let [width_name, height_name, bytes_name] = declaration_names(&record.name);
    if !is_valid_identifier(&bytes_name) {
        log::warn!("'{bytes_name}' is not a valid C identifier");
    }

    let mut lines = Vec::with_capacity(record.height as usize + 6);
    lines.push(format!("const U32 {width_name} = {};", record.width));
    lines.push(format!("const U32 {height_name} = {};", record.height));
    lines.push(format!("const U8 {bytes_name}[] = {{"));

    let mut last_row = None;
    for y in 0..record.height {
        let line = row_line(record.row(y));
        lines.push(line.clone());
        last_row = Some(line);
    }
    if options.duplicate_last_row {
        if let Some(line) = last_row {
            lines.push(line);
        }
    }

    lines.push("};".to_string());
    lines.push(String::new());
    lines
}

/// Join header lines and blocks with `\n`, without a trailing newline.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Render a complete header for the given fonts, in the given order.
pub fn to_header_string(records: &[FontRecord], options: &EmitOptions) -> String {
    let mut lines = header_lines(options);
    for record in records {
        lines.extend(emit_font_block(record, options));
    }
    join_lines(&lines)
}
