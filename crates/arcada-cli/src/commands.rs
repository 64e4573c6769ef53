//! CLI command implementations.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arcada_manifest::{builder, DatasetLayout, Manifest};

use crate::BuildArgs;

/// Build the manifest from the dataset named by the layout.
pub fn build(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut layout = match &args.config {
        Some(path) => DatasetLayout::from_toml(path)?,
        None => DatasetLayout::rooted(&args.root),
    };
    if let Some(dir) = args.models_dir {
        layout.models_dir = dir;
    }
    if let Some(path) = args.legacy_script {
        layout.legacy_script = path;
    }
    if let Some(path) = args.assembly {
        layout.assembly_obj = path;
    }
    if let Some(path) = args.output {
        layout.output = path;
    }

    let manifest = builder::build_and_write(&layout)?;

    println!("Arcada Manifest Build");
    println!("─────────────────────");
    println!("Fragments dir: {}", layout.models_dir.display());
    println!("Output:        {}", layout.output.display());
    println!();
    print_summary(&manifest);
    Ok(())
}

/// Summarize an existing manifest file.
pub fn inspect(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let manifest: Manifest = serde_json::from_reader(BufReader::new(file))?;

    println!("Manifest: {}", path.display());
    println!("─────────────────────");
    for (tooth, entry) in &manifest.teeth {
        let hint = match entry.position_hint {
            Some(p) => format!("({:.3}, {:.3}, {:.3})", p.x, p.y, p.z),
            None => "no position hint".to_string(),
        };
        println!(
            "  {tooth}: {} crown, {} root, {} nucleus — {hint}",
            entry.crown.len(),
            entry.root.len(),
            entry.nucleus.len(),
        );
    }
    println!();
    print_summary(&manifest);
    Ok(())
}

fn print_summary(manifest: &Manifest) {
    let notes = &manifest.notes;
    println!("Teeth:               {}", manifest.teeth.len());
    println!("Ignored files:       {}", notes.ignored_files.len());
    println!(
        "Numeric candidates:  {} ({} assigned)",
        notes.numeric_candidates.len(),
        notes.numeric_assignments.len(),
    );
    println!(
        "Excluded (non-permanent): {}",
        notes.excluded_non_permanent.len()
    );
    for (name, assignment) in &notes.numeric_assignments {
        println!(
            "  {name} -> {} (distance {:.3})",
            assignment.tooth, assignment.distance
        );
    }
}
