//! Loading of configuration files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context as _;
use serde::de::DeserializeOwned;

fn read_to_string<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
    let path = path.as_ref();
    let mut contents = String::new();
    {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        file.read_to_string(&mut contents)?;
    }
    Ok(contents)
}

/// Reads a JSON file, typically a genesis configuration.
pub fn read_json_file<P: AsRef<Path>, R: DeserializeOwned>(path: P) -> anyhow::Result<R> {
    let contents = read_to_string(&path)?;
    let result: R = serde_json::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse JSON config file {}",
            path.as_ref().display()
        )
    })?;
    Ok(result)
}

/// Reads a TOML file, typically an application configuration.
pub fn from_toml_path<P: AsRef<Path>, R: DeserializeOwned>(path: P) -> anyhow::Result<R> {
    let contents = read_to_string(&path)?;
    let result: R = toml::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse TOML config file {}",
            path.as_ref().display()
        )
    })?;
    Ok(result)
}
