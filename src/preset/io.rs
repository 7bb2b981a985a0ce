use std::fs;
use std::path::Path;

use log::info;

use crate::runtime::RenderParameters;

use super::{PresetSpec, Result};

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

/// Reads a preset, YAML for `.yaml`/`.yml` and JSON otherwise. Values are
/// validated before the preset is returned.
pub fn load_preset(path: impl AsRef<Path>) -> Result<PresetSpec> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let preset = if is_yaml(path) {
        serde_yaml::from_str::<PresetSpec>(&raw)?
    } else {
        serde_json::from_str::<PresetSpec>(&raw)?
    };
    preset.apply_to(&RenderParameters::default())?;
    info!("loaded preset {}", path.display());
    Ok(preset)
}
