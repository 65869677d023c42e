//! Field record assembly from files, stdin and `--set` pairs.

use anyhow::{Context, Result};
use naming_core::{Field, FieldRecord};
use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;

/// Build a record from an optional input file, then overlay assignments.
///
/// `-` reads JSON from stdin. Files ending in `.toml` are parsed as TOML,
/// everything else as JSON.
pub fn read_record(input: Option<&Path>, assignments: &[String], ncon: bool) -> Result<FieldRecord> {
    let mut record = match input {
        None => FieldRecord::new(),
        Some(path) if path == Path::new("-") => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read record from stdin")?;
            FieldRecord::from_json_str(&content).context("Invalid record on stdin")?
        }
        Some(path) => load_record_file(path)?,
    };

    for assignment in assignments {
        record
            .apply_assignment(assignment)
            .with_context(|| format!("Invalid --set value: {}", assignment))?;
    }

    if ncon {
        record = record.with_flag(Field::Ncon, true);
    }

    log::debug!("Record has {} field(s)", record.len());
    Ok(record)
}

fn load_record_file(path: &Path) -> Result<FieldRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record: {}", path.display()))?;

    if is_toml(path) {
        let value: serde_json::Value = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML record: {}", path.display()))?;
        Ok(FieldRecord::from_json_value(value)?)
    } else {
        FieldRecord::from_json_str(&content)
            .with_context(|| format!("Invalid JSON record: {}", path.display()))
    }
}

/// Check if a path is a TOML file (case-insensitive)
fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}
