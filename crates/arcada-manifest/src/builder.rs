//! Manifest assembly.
//!
//! Orchestrates the pipeline: fragment scan, legacy positions, assembly
//! centroids, numeric resolution, range filtering, and the atomic write
//! of the artifact. Rebuilding from unchanged inputs produces
//! byte-identical output; every intermediate container is ordered.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use arcada_types::{ArcadaError, ArcadaResult, ToothId, ToothNumber, Vec3};

use crate::assembly;
use crate::classify;
use crate::layout::DatasetLayout;
use crate::legacy;
use crate::manifest::{Assignment, Manifest, Notes, SectionLegend, ToothEntry};
use crate::resolve;

/// Builds the manifest from the dataset without writing it.
pub fn build_manifest(layout: &DatasetLayout) -> ArcadaResult<Manifest> {
    // Scan and bucket fragment files.
    let scan = classify::scan_fragments(&layout.models_dir)?;
    let classify::ScannedFragments {
        mut by_tooth,
        ignored,
        numeric,
    } = scan;
    info!(
        teeth = by_tooth.len(),
        ignored = ignored.len(),
        numeric = numeric.len(),
        "scanned fragment directory"
    );

    // Legacy coordinates are the fallback hints.
    let legacy_positions = legacy::extract_positions(&layout.legacy_script)?;
    for (tooth, entry) in by_tooth.iter_mut() {
        if let Some(&position) = legacy_positions.get(tooth) {
            entry.position_hint = Some(position);
        }
    }

    // Assembly-derived centroids override legacy coordinates. Teeth with
    // no fragment files gain no entry here.
    let tooth_centroids = assembly::tooth_centroids(&layout.assembly_obj)?;
    for (tooth, centroid) in &tooth_centroids {
        if let Some(entry) = by_tooth.get_mut(tooth) {
            debug!(tooth = %tooth, "assembly centroid overrides position hint");
            entry.position_hint = Some(*centroid);
        }
    }
    info!(
        legacy = legacy_positions.len(),
        assembly = tooth_centroids.len(),
        "gathered position hints"
    );

    // Object centroids feed the numeric-fragment resolver.
    let object_centroids = assembly::object_centroids(&layout.assembly_obj)?;

    // Resolve numeric candidates against permanent teeth holding a hint.
    let mut hints: BTreeMap<ToothId, Vec3> = BTreeMap::new();
    for (&number, entry) in &by_tooth {
        if let (Some(id), Some(position)) = (number.validate(), entry.position_hint) {
            hints.insert(id, position);
        }
    }

    let mut assignments: BTreeMap<String, Assignment> = BTreeMap::new();
    for name in &numeric {
        let centroid =
            match resolve::candidate_centroid(&layout.models_dir, name, &object_centroids)? {
                Some(centroid) => centroid,
                None => continue,
            };
        let (tooth, distance) = match resolve::nearest_tooth(centroid, &hints) {
            Some(winner) => winner,
            None => continue,
        };
        if let Some(entry) = by_tooth.get_mut(&ToothNumber::from(tooth)) {
            entry.crown.push(name.clone());
            debug!(fragment = %name, tooth = %tooth, distance, "assigned numeric fragment");
            assignments.insert(
                name.clone(),
                Assignment {
                    tooth,
                    center: centroid,
                    distance,
                },
            );
        }
    }
    info!(
        assigned = assignments.len(),
        candidates = numeric.len(),
        "resolved numeric fragments"
    );

    // Range check: only permanent teeth reach the manifest.
    let mut teeth: BTreeMap<ToothId, ToothEntry> = BTreeMap::new();
    let mut excluded_non_permanent: Vec<String> = Vec::new();
    for (number, entry) in by_tooth {
        match number.validate() {
            Some(id) => {
                teeth.insert(id, entry);
            }
            None => {
                warn!(
                    tooth = %number,
                    files = entry.file_count(),
                    "excluding non-permanent tooth"
                );
                excluded_non_permanent.extend(entry.file_names().cloned());
            }
        }
    }
    excluded_non_permanent.sort();

    // Final ordering pass over every fragment list.
    for entry in teeth.values_mut() {
        entry.normalize();
    }

    Ok(Manifest {
        teeth,
        notes: Notes {
            ignored_files: ignored,
            numeric_candidates: numeric,
            excluded_non_permanent,
            sections: SectionLegend::default(),
            numeric_assignments: assignments,
        },
    })
}

/// Serializes the manifest and replaces the output atomically.
///
/// The JSON is written to a temporary file in the destination directory
/// and renamed into place, so a reader never sees a partial manifest.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> ArcadaResult<()> {
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| ArcadaError::Serialization(e.to_string()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ArcadaError::io(dir, e))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| ArcadaError::io(path, e))?;
    tmp.persist(path).map_err(|e| ArcadaError::io(path, e.error))?;
    Ok(())
}

/// Runs the whole pipeline and writes the artifact.
pub fn build_and_write(layout: &DatasetLayout) -> ArcadaResult<Manifest> {
    let manifest = build_manifest(layout)?;
    write_manifest(&manifest, &layout.output)?;
    info!(
        path = %layout.output.display(),
        teeth = manifest.teeth.len(),
        "manifest written"
    );
    Ok(manifest)
}
