//! Nearest-tooth resolution for numeric-named fragments.

use std::collections::BTreeMap;
use std::path::Path;

use arcada_types::{ArcadaResult, ToothId, Vec3};

use crate::assembly;
use crate::patterns;

/// Finds the tooth whose position hint is closest to `centroid`.
///
/// Hints are visited in ascending tooth order and a candidate replaces
/// the best only on a strictly smaller distance, so equidistant teeth
/// resolve to the lowest id. `None` when no tooth has a hint.
pub fn nearest_tooth(centroid: Vec3, hints: &BTreeMap<ToothId, Vec3>) -> Option<(ToothId, f64)> {
    let mut best: Option<(ToothId, f64)> = None;
    for (&tooth, &hint) in hints {
        let distance = centroid.distance(hint);
        let closer = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance,
        };
        if closer {
            best = Some((tooth, distance));
        }
    }
    best
}

/// Centroid for one numeric-candidate fragment.
///
/// Prefers the assembly object centroid sharing the fragment's filename
/// stem; falls back to the mean of the fragment file's own vertices.
/// `None` when neither source yields a point.
pub fn candidate_centroid(
    models_dir: &Path,
    name: &str,
    object_centroids: &BTreeMap<String, Vec3>,
) -> ArcadaResult<Option<Vec3>> {
    let stem = patterns::file_stem(name);
    if let Some(&centroid) = object_centroids.get(stem) {
        return Ok(Some(centroid));
    }
    assembly::vertex_centroid(&models_dir.join(name))
}
