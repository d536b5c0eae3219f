use crate::app::cli::Cli;
use crate::app::colors::{ColorSequence, ConsoleColor};
use crate::app::models::{RenderOptions, RuntimeConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_PRESET: &str = "default";

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    show_hidden: Option<bool>,
    use_color: Option<bool>,
    palette: Option<Vec<ConsoleColor>>,
    exclude: Option<Vec<String>>,
    gitignore: Option<bool>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("truffula").join("presets.toml"))
}

/// Reads a presets file. A missing file means no presets.
pub fn load_presets_file(config_path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let presets = load_presets_file(&presets_path()?)?;
    merge_config(cli, &presets)
}

/// Combines CLI flags with the selected preset. CLI flags win.
pub fn merge_config(cli: Cli, presets: &HashMap<String, PresetConfig>) -> Result<RuntimeConfig> {
    let preset = match cli.preset.as_deref() {
        Some(name) => presets.get(name).cloned().unwrap_or_else(|| {
            log::warn!("Preset '{}' not found, using built-in defaults", name);
            PresetConfig::default()
        }),
        None => presets.get(DEFAULT_PRESET).cloned().unwrap_or_default(),
    };
    log::debug!("Using preset {:?}", preset);

    let palette = match cli.palette.or(preset.palette) {
        Some(colors) => ColorSequence::new(colors)?,
        None => ColorSequence::default(),
    };

    let config = RuntimeConfig {
        options: RenderOptions {
            root: Some(cli.path),
            show_hidden: cli.hidden || preset.show_hidden.unwrap_or(false),
            use_color: !cli.no_color && preset.use_color.unwrap_or(true),
        },
        palette,
        exclude: merge_vecs(preset.exclude, cli.exclude),
        gitignore: cli.gitignore || preset.gitignore.unwrap_or(false),
    };

    Ok(config)
}
