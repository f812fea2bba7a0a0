//! Configuration command handlers.
//!
//! Implements `show-config` and `init-config`.

use crate::config::{
    generate_example_config, generate_full_example_config, load_or_default, AppConfig,
    ConfigPreset,
};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Build the effective configuration: file (or defaults), then an optional
/// preset, then CLI overrides.
pub fn effective_config(
    config_path: Option<&Path>,
    preset: Option<&str>,
    cli_overrides: &AppConfig,
) -> Result<(AppConfig, Option<PathBuf>)> {
    let (mut config, loaded_from) = load_or_default(config_path);
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    if let Some(name) = preset {
        let Some(preset) = ConfigPreset::from_name(name) else {
            let names: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            bail!("Unknown preset '{name}'. Valid options: {}", names.join(", "));
        };
        config.merge(&AppConfig::from_preset(preset));
    }

    config.merge(cli_overrides);
    Ok((config, loaded_from))
}

/// Render the effective configuration as YAML.
pub fn run_show_config(config_path: Option<&Path>) -> Result<String> {
    let (config, loaded_from) = load_or_default(config_path);
    let header = loaded_from.map_or_else(
        || "# No config file found; showing defaults\n".to_string(),
        |path| format!("# Loaded from: {}\n", path.display()),
    );
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    Ok(format!("{header}{yaml}"))
}

/// Produce an example config file, writing it to `output` when given.
///
/// Returns the generated text. An existing file is never overwritten.
pub fn run_init_config(output: Option<&Path>, full: bool) -> Result<String> {
    let content = if full {
        generate_full_example_config()
    } else {
        generate_example_config()
    };

    if let Some(target) = output {
        if target.exists() {
            bail!(
                "{} already exists. Remove it first to re-initialize.",
                target.display()
            );
        }
        std::fs::write(target, &content)
            .with_context(|| format!("failed to write {}", target.display()))?;
        tracing::info!("Created {}", target.display());
    }

    Ok(content)
}
