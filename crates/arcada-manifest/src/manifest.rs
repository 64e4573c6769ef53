//! Manifest data model.
//!
//! These types define the output contract of the pipeline. The serialized
//! field order is part of that contract: downstream viewers read
//! `teeth.<id>.C/R/N` lists and load fragment files by the names inside.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use arcada_types::{Section, ToothId, Vec3};

/// Fragment lists for one tooth, one list per section, plus the
/// best-available spatial anchor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToothEntry {
    /// Crown fragments.
    #[serde(rename = "C")]
    pub crown: Vec<String>,
    /// Root fragments.
    #[serde(rename = "R")]
    pub root: Vec<String>,
    /// Nucleus fragments.
    #[serde(rename = "N")]
    pub nucleus: Vec<String>,
    /// Assembly-derived centroid when available, legacy coordinate otherwise.
    pub position_hint: Option<Vec3>,
}

impl ToothEntry {
    /// Mutable access to the fragment list for one section.
    pub fn section_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Crown => &mut self.crown,
            Section::Root => &mut self.root,
            Section::Nucleus => &mut self.nucleus,
        }
    }

    /// Total fragment count across all sections.
    pub fn file_count(&self) -> usize {
        self.crown.len() + self.root.len() + self.nucleus.len()
    }

    /// All fragment names in the entry, section by section.
    pub fn file_names(&self) -> impl Iterator<Item = &String> {
        self.crown
            .iter()
            .chain(self.root.iter())
            .chain(self.nucleus.iter())
    }

    /// Sorts each section list ascending and drops duplicates.
    pub fn normalize(&mut self) {
        for list in [&mut self.crown, &mut self.root, &mut self.nucleus] {
            list.sort();
            list.dedup();
        }
    }
}

/// One numeric-candidate fragment resolved to a tooth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Tooth that won the nearest-centroid comparison.
    pub tooth: ToothId,
    /// Centroid the fragment was compared with.
    pub center: Vec3,
    /// Euclidean distance from that centroid to the winning hint.
    pub distance: f64,
}

/// Human-readable meaning of the section letters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionLegend {
    #[serde(rename = "C")]
    pub crown: String,
    #[serde(rename = "R")]
    pub root: String,
    #[serde(rename = "N")]
    pub nucleus: String,
}

impl Default for SectionLegend {
    fn default() -> Self {
        Self {
            crown: "Coroa (crown) faces/patches".to_string(),
            root: "Raiz (root) + Canal".to_string(),
            nucleus: "Núcleo/NUC (internal core)".to_string(),
        }
    }
}

/// Diagnostics accompanying the tooth mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notes {
    /// Filenames that matched no naming convention, sorted.
    pub ignored_files: Vec<String>,
    /// Every numeric-named fragment, assigned or not, sorted.
    pub numeric_candidates: Vec<String>,
    /// Fragments dropped because their tooth number is not permanent, sorted.
    #[serde(default)]
    pub excluded_non_permanent: Vec<String>,
    /// Section letter legend.
    pub sections: SectionLegend,
    /// Resolved numeric fragments, keyed by filename.
    pub numeric_assignments: BTreeMap<String, Assignment>,
}

/// The build artifact: tooth mapping plus diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Permanent teeth in ascending numeric order.
    pub teeth: BTreeMap<ToothId, ToothEntry>,
    /// Everything the build noticed but could not place.
    pub notes: Notes,
}
