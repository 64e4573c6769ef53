//! Fragment filename classification and directory scanning.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use arcada_types::{ArcadaError, ArcadaResult, Section, ToothNumber};

use crate::manifest::ToothEntry;
use crate::patterns;

/// What a single filename turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Follows the `D<tooth><section>_<part>.obj` convention.
    Matched {
        tooth: ToothNumber,
        section: Section,
        part: String,
    },
    /// Numeric stem such as `608.obj` or `608_1.obj`; resolved later by
    /// geometric proximity.
    NumericCandidate,
    /// Matches no convention; surfaces in the `ignored_files` diagnostic.
    Unrecognized,
}

/// Classifies one filename. Pure and total: every name falls into
/// exactly one of the three classes.
pub fn classify(name: &str) -> Classification {
    if let Some(capture) = patterns::fragment_name(name) {
        // The section letter may be any uppercase letter; only C, R, and N
        // denote known sections.
        return match Section::from_letter(capture.section_letter) {
            Some(section) => Classification::Matched {
                tooth: capture.tooth,
                section,
                part: capture.part,
            },
            None => Classification::Unrecognized,
        };
    }
    if patterns::numeric_stem(patterns::file_stem(name)) {
        Classification::NumericCandidate
    } else {
        Classification::Unrecognized
    }
}

/// Everything a fragments-directory scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScannedFragments {
    /// Matched fragments bucketed by raw tooth number; range checking
    /// happens later, at the manifest boundary.
    pub by_tooth: BTreeMap<ToothNumber, ToothEntry>,
    /// Unrecognized filenames, sorted.
    pub ignored: Vec<String>,
    /// Numeric-candidate filenames, sorted.
    pub numeric: Vec<String>,
}

/// Classifies every entry of the fragments directory.
///
/// The directory itself is a required input: failure to read it is an
/// error, unlike the optional legacy and assembly files.
pub fn scan_fragments(dir: &Path) -> ArcadaResult<ScannedFragments> {
    let entries = fs::read_dir(dir).map_err(|e| ArcadaError::io(dir, e))?;

    let mut scan = ScannedFragments::default();
    for entry in entries {
        let entry = entry.map_err(|e| ArcadaError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        match classify(&name) {
            Classification::Matched { tooth, section, .. } => {
                scan.by_tooth
                    .entry(tooth)
                    .or_default()
                    .section_mut(section)
                    .push(name);
            }
            Classification::NumericCandidate => scan.numeric.push(name),
            Classification::Unrecognized => {
                debug!(file = %name, "unrecognized fragment name");
                scan.ignored.push(name);
            }
        }
    }

    for entry in scan.by_tooth.values_mut() {
        entry.normalize();
    }
    scan.ignored.sort();
    scan.numeric.sort();
    Ok(scan)
}
