//! Assembly mesh parsing.
//!
//! The assembly is a text mesh with `o` (object name), `v` (vertex) and
//! `f` (face) lines. Every object in the file shares one vertex pool that
//! grows in file order; faces reference the pool by 1-based index, with
//! negative indices counted back from the pool length at the point of
//! occurrence. The parser streams the file and never materializes it.
//!
//! Two grouping strategies share the same core: by exact object name,
//! used to match numeric fragments, and by tooth-number prefix, used to
//! compute one authoritative centroid per tooth.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use arcada_types::{ArcadaError, ArcadaResult, ToothNumber, Vec3};

use crate::patterns;
use crate::read;

/// Centroids keyed by exact object name. Objects with an empty name are
/// skipped.
pub fn object_centroids(path: &Path) -> ArcadaResult<BTreeMap<String, Vec3>> {
    grouped_centroids(path, |name| {
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    })
}

/// Centroids keyed by the tooth number in the object-name prefix,
/// merging every object of the same tooth into one group.
pub fn tooth_centroids(path: &Path) -> ArcadaResult<BTreeMap<ToothNumber, Vec3>> {
    grouped_centroids(path, patterns::tooth_prefix)
}

/// Streaming core shared by both grouping strategies.
///
/// `keyer` maps an object name to its grouping key; `None` drops the
/// object's faces. Face indices are resolved against the pool length at
/// the point of occurrence but range-checked only against the final pool,
/// so forward references are honored. Malformed tokens are skipped.
fn grouped_centroids<K, F>(path: &Path, keyer: F) -> ArcadaResult<BTreeMap<K, Vec3>>
where
    K: Ord + Clone,
    F: Fn(&str) -> Option<K>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(ArcadaError::io(path, e)),
    };

    let mut pool: Vec<Vec3> = Vec::new();
    let mut referenced: BTreeMap<K, BTreeSet<i64>> = BTreeMap::new();
    let mut current: Option<K> = None;

    for line in read::lossy_lines(file) {
        let line = line.map_err(|e| ArcadaError::io(path, e))?;
        if let Some(rest) = line.strip_prefix("o ") {
            current = keyer(rest.trim());
        } else if line.starts_with("v ") {
            if let Some(vertex) = parse_vertex(&line) {
                pool.push(vertex);
            }
        } else if line.starts_with("f ") {
            if let Some(key) = &current {
                let refs = referenced.entry(key.clone()).or_default();
                collect_face_refs(&line, pool.len(), refs);
            }
        }
    }

    let mut centroids = BTreeMap::new();
    for (key, refs) in referenced {
        if let Some(centroid) = centroid_over(&pool, &refs) {
            centroids.insert(key, centroid);
        }
    }
    debug!(
        path = %path.display(),
        vertices = pool.len(),
        groups = centroids.len(),
        "parsed assembly groups"
    );
    Ok(centroids)
}

/// Mean of every vertex declaration in a single mesh file, ignoring
/// objects and faces. `None` for a missing or vertex-free file.
pub fn vertex_centroid(path: &Path) -> ArcadaResult<Option<Vec3>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ArcadaError::io(path, e)),
    };

    let (mut sx, mut sy, mut sz) = (0.0_f64, 0.0_f64, 0.0_f64);
    let mut count = 0_usize;
    for line in read::lossy_lines(file) {
        let line = line.map_err(|e| ArcadaError::io(path, e))?;
        if !line.starts_with("v ") {
            continue;
        }
        if let Some(vertex) = parse_vertex(&line) {
            sx += vertex.x;
            sy += vertex.y;
            sz += vertex.z;
            count += 1;
        }
    }
    if count == 0 {
        return Ok(None);
    }
    let n = count as f64;
    Ok(Some(Vec3::new(sx / n, sy / n, sz / n)))
}

/// Parses a `v x y z` line. Extra fields are ignored; any malformed
/// coordinate drops the whole vertex so the pool never grows by a
/// half-parsed entry.
fn parse_vertex(line: &str) -> Option<Vec3> {
    let mut fields = line.split_whitespace();
    fields.next(); // line marker
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    let z = fields.next()?.parse().ok()?;
    Some(Vec3::new(x, y, z))
}

/// Records the vertex indices referenced by one `f` line, resolved to
/// 0-based against the current pool length. Slash-qualified references
/// keep their first component; unparsable tokens are skipped.
fn collect_face_refs(line: &str, pool_len: usize, refs: &mut BTreeSet<i64>) {
    for token in line.split_whitespace().skip(1) {
        let index = match token.split('/').next() {
            Some(first) => first,
            None => continue,
        };
        let vi = match index.parse::<i64>() {
            Ok(vi) => vi,
            Err(_) => continue,
        };
        let resolved = if vi < 0 {
            pool_len as i64 + 1 + vi
        } else {
            vi
        };
        refs.insert(resolved - 1);
    }
}

/// Mean position of the in-range referenced vertices; `None` when no
/// reference lands inside the pool.
fn centroid_over(pool: &[Vec3], refs: &BTreeSet<i64>) -> Option<Vec3> {
    let (mut sx, mut sy, mut sz) = (0.0_f64, 0.0_f64, 0.0_f64);
    let mut count = 0_usize;
    for &index in refs {
        if index >= 0 && (index as usize) < pool.len() {
            let vertex = pool[index as usize];
            sx += vertex.x;
            sy += vertex.y;
            sz += vertex.z;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some(Vec3::new(sx / n, sy / n, sz / n))
}
