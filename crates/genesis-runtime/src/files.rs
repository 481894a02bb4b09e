//! Blocking file I/O for the genesis host.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use genesis_core::{GenesisDoc, GenesisParams, RawTx};
use tracing::{debug, info};

use crate::RuntimeError;

/// Read a genesis document.
pub fn load_genesis_doc(path: &Path) -> Result<GenesisDoc> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read genesis file {}", path.display()))?;
    let doc = GenesisDoc::from_json_str(&text)
        .with_context(|| format!("failed to parse genesis file {}", path.display()))?;

    info!(path = %path.display(), chain_id = %doc.chain_id, "Loaded genesis document");
    Ok(doc)
}

/// Read TOML overrides for the default parameters.
pub fn load_params(path: &Path) -> Result<GenesisParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read params file {}", path.display()))?;
    let params = GenesisParams::from_toml_str(&text)
        .with_context(|| format!("failed to parse params file {}", path.display()))?;

    info!(path = %path.display(), "Loaded genesis parameter overrides");
    Ok(params)
}

/// Read every `*.json` file in `dir` as one bootstrap transaction, ordered
/// by file name.
pub fn collect_gentxs(dir: &Path) -> Result<Vec<RawTx>> {
    if !dir.exists() {
        return Err(RuntimeError::MissingGentxDir(dir.to_path_buf()).into());
    }
    if !dir.is_dir() {
        return Err(RuntimeError::NotADirectory(dir.to_path_buf()).into());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to list gentx directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list gentx directory {}", dir.display()))?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut batch = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read gentx {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("gentx {} is not valid JSON", path.display()))?;
        debug!(path = %path.display(), "Collected bootstrap transaction");
        batch.push(RawTx::new(value));
    }

    info!(dir = %dir.display(), count = batch.len(), "Collected bootstrap transactions");
    Ok(batch)
}

/// Write a genesis document as pretty JSON.
pub fn write_genesis_doc(path: &Path, doc: &GenesisDoc) -> Result<()> {
    let text = doc
        .to_json_string_pretty()
        .context("failed to serialize genesis document")?;
    fs::write(path, text)
        .with_context(|| format!("failed to write genesis file {}", path.display()))?;

    info!(path = %path.display(), "Wrote genesis document");
    Ok(())
}
