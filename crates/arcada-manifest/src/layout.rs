//! Dataset layout: the paths one build reads and writes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use arcada_types::{ArcadaError, ArcadaResult};

const MODELS_DIR: &str = "objetos_separados";
const LEGACY_SCRIPT: &str = "dentalchartload.inc";
const ASSEMBLY_OBJ: &str = "ArcadaCompleta.obj";
const OUTPUT: &str = "tooth_manifest.json";

/// The four paths naming one dataset.
///
/// `Default` uses the conventional filenames of the original dataset,
/// relative to the current directory; [`DatasetLayout::rooted`] places
/// the same names under a chosen root. Any path can be overridden
/// individually, via TOML or CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetLayout {
    /// Directory of per-fragment mesh files.
    pub models_dir: PathBuf,
    /// Legacy positioning script. Optional input: may not exist.
    pub legacy_script: PathBuf,
    /// Consolidated assembly mesh. Optional input: may not exist.
    pub assembly_obj: PathBuf,
    /// Manifest artifact to write.
    pub output: PathBuf,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(MODELS_DIR),
            legacy_script: PathBuf::from(LEGACY_SCRIPT),
            assembly_obj: PathBuf::from(ASSEMBLY_OBJ),
            output: PathBuf::from(OUTPUT),
        }
    }
}

impl DatasetLayout {
    /// Conventional layout under the given dataset root.
    pub fn rooted(root: &Path) -> Self {
        Self {
            models_dir: root.join(MODELS_DIR),
            legacy_script: root.join(LEGACY_SCRIPT),
            assembly_obj: root.join(ASSEMBLY_OBJ),
            output: root.join(OUTPUT),
        }
    }

    /// Loads a layout from a TOML file. Missing keys keep their defaults.
    pub fn from_toml(path: &Path) -> ArcadaResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArcadaError::io(path, e))?;
        toml::from_str(&content)
            .map_err(|e| ArcadaError::InvalidConfig(format!("{}: {e}", path.display())))
    }
}
