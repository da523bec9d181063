//! Reading and writing the deployments file, a JSON object mapping contract
//! keys to addresses under a top-level `deployments` key.

use std::{fs, path::Path};

use alloy::primitives::Address;
use eyre::{eyre, WrapErr};
use serde_json::{Map, Value};

use crate::constants::DEPLOYMENTS_KEY;

/// Record `entries` in the deployments file at `path`, creating it if needed.
/// Existing entries under other keys are kept.
///
/// # Errors
///
/// Fails if the file exists but isn't a JSON object, or can't be written.
pub fn write_deployed_addresses(
    path: &Path,
    entries: &[(&str, Address)],
) -> eyre::Result<()> {
    let mut contents = if path.exists() {
        read_json(path)?
    } else {
        Map::new()
    };

    let deployments = contents
        .entry(DEPLOYMENTS_KEY)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| eyre!("`{DEPLOYMENTS_KEY}` is not a JSON object"))?;

    for (key, address) in entries {
        deployments
            .insert((*key).to_string(), Value::String(format!("{address:#x}")));
    }

    let serialized = serde_json::to_string_pretty(&Value::Object(contents))?;
    fs::write(path, serialized)
        .wrap_err(format!("failed to write {}", path.display()))
}

/// Read the address recorded under `key` in the deployments file at `path`.
///
/// # Errors
///
/// Fails if the file can't be read or has no valid address under `key`.
pub fn read_deployed_address(path: &Path, key: &str) -> eyre::Result<Address> {
    let contents = read_json(path)?;
    let address = contents
        .get(DEPLOYMENTS_KEY)
        .and_then(|deployments| deployments.get(key))
        .and_then(Value::as_str)
        .ok_or_else(|| eyre!("no `{key}` deployment in {}", path.display()))?;

    address
        .parse()
        .wrap_err(format!("invalid `{key}` address: {address}"))
}

fn read_json(path: &Path) -> eyre::Result<Map<String, Value>> {
    let raw = fs::read_to_string(path)
        .wrap_err(format!("failed to read {}", path.display()))?;
    match serde_json::from_str::<Value>(&raw)
        .wrap_err(format!("failed to parse {}", path.display()))?
    {
        Value::Object(map) => Ok(map),
        _ => Err(eyre!("{} is not a JSON object", path.display())),
    }
}
