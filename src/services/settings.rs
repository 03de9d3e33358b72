use crate::catalog::{load_catalog, Catalog, CatalogEdition};
use crate::domain::constants::APP_NAME;
use crate::domain::models::{ConfigFile, EffectiveConfig, Routes};
use std::path::PathBuf;

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: Option<PathBuf>,
    pub config_file_present: bool,
    pub edition: CatalogEdition,
    pub catalog_file: Option<PathBuf>,
    pub routes: Routes,
}

pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(APP_NAME)
            .join("config.toml"),
    )
}

pub fn parse_config(raw: &str) -> anyhow::Result<ConfigFile> {
    Ok(toml::from_str(raw)?)
}

pub fn load_settings(
    edition: Option<CatalogEdition>,
    catalog_file: Option<&str>,
) -> anyhow::Result<Settings> {
    let path = config_path();
    let present = path.as_ref().map(|p| p.exists()).unwrap_or(false);
    let file = match &path {
        Some(p) if present => {
            let raw = std::fs::read_to_string(p)?;
            let parsed = parse_config(&raw)
                .map_err(|e| anyhow::anyhow!("invalid config {}: {}", p.display(), e))?;
            tracing::debug!(path = %p.display(), "loaded config file");
            parsed
        }
        _ => ConfigFile::default(),
    };

    Ok(Settings {
        config_path: path,
        config_file_present: present,
        edition: edition.or(file.edition).unwrap_or_default(),
        catalog_file: catalog_file
            .map(str::to_string)
            .or(file.catalog_file)
            .map(PathBuf::from),
        routes: file.routes,
    })
}

/// Builds the catalog once for the whole invocation.
pub fn open_catalog(settings: &Settings) -> anyhow::Result<(Catalog, String)> {
    match &settings.catalog_file {
        Some(path) => {
            let catalog = load_catalog(path)
                .map_err(|e| anyhow::anyhow!("cannot load catalog {}: {}", path.display(), e))?;
            Ok((catalog, path.display().to_string()))
        }
        None => {
            let source = format!("builtin:{:?}", settings.edition).to_lowercase();
            Ok((Catalog::builtin(settings.edition), source))
        }
    }
}

pub fn effective_config(settings: &Settings) -> EffectiveConfig {
    EffectiveConfig {
        config_path: settings
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        config_file_present: settings.config_file_present,
        edition: settings.edition,
        catalog_file: settings
            .catalog_file
            .as_ref()
            .map(|p| p.display().to_string()),
        routes: settings.routes.clone(),
    }
}
