use regex::Regex;
use std::sync::OnceLock;

/// Derive a declaration identifier from a font image filename.
///
/// Every `.`, `-` and space becomes `_`, then the result is uppercased.
/// Distinct filenames may map to the same identifier; callers decide how to
/// treat that (see [`crate::CollisionPolicy`]).
pub fn sanitize_name(filename: &str) -> String {
    filename.replace(['.', '-', ' '], "_").to_uppercase()
}

/// Reduce a grayscale intensity to monochrome.
///
/// Only pure white (255) is background; every other intensity is ink.
pub fn binarize(intensity: u8) -> u8 {
    if intensity == 255 {
        255
    } else {
        0
    }
}

static RE_C_IDENTIFIER_LOCK: OnceLock<Regex> = OnceLock::new();
fn get_re_c_identifier() -> &'static Regex {
    RE_C_IDENTIFIER_LOCK.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap())
}

/// Check whether `name` can be used verbatim as a C identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    get_re_c_identifier().is_match(name)
}
