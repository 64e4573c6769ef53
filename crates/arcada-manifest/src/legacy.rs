//! Legacy position extraction.
//!
//! The legacy script is Delphi-generated UI code. Tooth positions appear
//! as a marker line naming an axis control (`AxisglDente32`) followed,
//! possibly several lines later, by an `AbsolutePosition` vector literal.
//! The extractor walks the file once with an explicit two-state cursor.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use arcada_types::{ArcadaError, ArcadaResult, ToothNumber, Vec3};

use crate::patterns;
use crate::read;

/// Cursor state while walking the script.
enum ScanState {
    /// No marker seen since the last committed vector.
    Idle,
    /// Marker seen; the next vector literal commits to this tooth.
    Pending(ToothNumber),
}

/// Extracts tooth positions from the legacy script.
///
/// A missing file is an empty result. A later marker for the same tooth
/// overwrites the earlier position; a second marker before any vector
/// replaces the pending tooth. A line carrying both patterns counts as a
/// marker.
pub fn extract_positions(path: &Path) -> ArcadaResult<BTreeMap<ToothNumber, Vec3>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(ArcadaError::io(path, e)),
    };

    let mut positions = BTreeMap::new();
    let mut state = ScanState::Idle;
    for line in read::lossy_lines(file) {
        let line = line.map_err(|e| ArcadaError::io(path, e))?;
        if let Some(tooth) = patterns::legacy_marker(&line) {
            state = ScanState::Pending(tooth);
            continue;
        }
        if let ScanState::Pending(tooth) = state {
            if let Some(position) = patterns::legacy_vector(&line) {
                positions.insert(tooth, position);
                state = ScanState::Idle;
            }
        }
    }

    debug!(
        path = %path.display(),
        positions = positions.len(),
        "extracted legacy positions"
    );
    Ok(positions)
}
