//! Named pattern matchers for fragment names and legacy script lines.
//!
//! Each matcher compiles its pattern once and returns a structured
//! capture, keeping directory traversal and file reading out of the
//! matching logic. The conventions come from the original dataset:
//! fragment files like `D11C_CL.obj` or `D35C_ACL.obj`, numeric leftovers
//! like `608_1.obj`, and Delphi-generated positioning lines.

use std::sync::OnceLock;

use regex::Regex;

use arcada_types::{ToothNumber, Vec3};

/// Signed decimal with optional fraction and exponent.
const FLOAT: &str = r"[-+]?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?";

fn fragment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The leading `D` must be uppercase; the extension may be any case.
    RE.get_or_init(|| {
        Regex::new(r"^D(?P<tooth>\d{2})(?P<section>[A-Z])_(?P<part>[A-Za-z0-9]+)\.(?i:obj)$")
            .expect("fragment name pattern")
    })
}

fn numeric_stem_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+[A-Za-z0-9_]*$").expect("numeric stem pattern"))
}

fn tooth_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^D(?P<tooth>\d{2})[A-Z]_").expect("tooth prefix pattern"))
}

fn legacy_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"cbTemp1\.Name := 'AxisglDente(?P<tooth>\d{2})';").expect("marker pattern")
    })
}

fn legacy_vector_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"AbsolutePosition := TVector\(\s*(?P<x>{FLOAT})\s*,\s*(?P<y>{FLOAT})\s*,\s*(?P<z>{FLOAT})\s*,\s*1\s*\)"
        ))
        .expect("vector pattern")
    })
}

/// Structured capture from a fragment filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentName {
    /// Two-digit tooth number after the `D` prefix.
    pub tooth: ToothNumber,
    /// Section letter as written, not yet mapped to a section.
    pub section_letter: char,
    /// Free-form part label between the underscore and the extension.
    pub part: String,
}

/// Matches a filename against the `D<tooth><section>_<part>.obj` convention.
pub fn fragment_name(name: &str) -> Option<FragmentName> {
    let caps = fragment_re().captures(name)?;
    Some(FragmentName {
        tooth: two_digits(caps.name("tooth")?.as_str())?,
        section_letter: caps.name("section")?.as_str().chars().next()?,
        part: caps.name("part")?.as_str().to_string(),
    })
}

/// True if a filename stem is digits optionally followed by word characters,
/// the shape of leftover export names like `608`, `608_1`, or `237`.
pub fn numeric_stem(stem: &str) -> bool {
    numeric_stem_re().is_match(stem)
}

/// Extracts the tooth number from an assembly object name such as
/// `D32C_Coroa`, using the same case-sensitive `D` prefix as filenames.
pub fn tooth_prefix(object_name: &str) -> Option<ToothNumber> {
    let caps = tooth_prefix_re().captures(object_name)?;
    two_digits(caps.name("tooth")?.as_str())
}

/// Matches a legacy script line naming a tooth axis control.
pub fn legacy_marker(line: &str) -> Option<ToothNumber> {
    let caps = legacy_marker_re().captures(line)?;
    two_digits(caps.name("tooth")?.as_str())
}

/// Matches a legacy script line carrying a homogeneous position vector
/// with a literal trailing `1`.
pub fn legacy_vector(line: &str) -> Option<Vec3> {
    let caps = legacy_vector_re().captures(line)?;
    let x = caps.name("x")?.as_str().parse().ok()?;
    let y = caps.name("y")?.as_str().parse().ok()?;
    let z = caps.name("z")?.as_str().parse().ok()?;
    Some(Vec3::new(x, y, z))
}

/// Filename with its last extension stripped; the whole name when there
/// is nothing to strip.
pub fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

fn two_digits(digits: &str) -> Option<ToothNumber> {
    digits.parse::<u8>().ok().map(ToothNumber)
}
