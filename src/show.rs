use std::fs;
use std::path::PathBuf;

use stargaze::{Registry, Result, Star, StargazeError};

pub fn execute(file: PathBuf, output: &str, long: bool) -> Result<()> {
    if !file.exists() {
        return Err(StargazeError::StarsFileNotFound(file));
    }

    let contents = fs::read_to_string(&file)
        .map_err(|err| StargazeError::from(err).with_context("Failed to read stars file"))?;
    let stars: Vec<Star> = serde_json::from_str(&contents)?;

    let mut registry = Registry::with_defaults();
    let renderer = registry.select(output)?;

    for star in &stars {
        if long {
            renderer.detail(star);
        } else {
            renderer.summary(star);
        }
    }

    Ok(())
}
