use nanofab_core::{LevelDef, LevelRegistry};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse levels RON: {0}")]
    LevelParseError(String),
}

/// Parse a single levels RON string into a registry.
pub fn load_levels_from_str(ron_str: &str) -> Result<LevelRegistry, LoadError> {
    let options = ron::Options::default();
    let levels: Vec<LevelDef> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::LevelParseError(e.to_string()))?;
    Ok(LevelRegistry::new(levels))
}

/// Load and concatenate several level sources, keeping source order.
pub fn load_all_levels(sources: &[&str]) -> Result<LevelRegistry, LoadError> {
    let mut all_levels = Vec::new();
    for source in sources {
        let registry = load_levels_from_str(source)?;
        all_levels.extend(registry.iter().cloned());
    }
    log::info!("Loaded {} levels from {} sources", all_levels.len(), sources.len());
    Ok(LevelRegistry::new(all_levels))
}
