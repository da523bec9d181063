use std::{
    env, fs,
    path::{Path, PathBuf},
};

use eyre::{bail, WrapErr};
use toml::Table;

/// Directory, relative to the workspace root, holding the contract crates.
const CONTRACTS_DIR: &str = "tokens";

/// Finds the workspace root by walking up from the current directory until a
/// `Cargo.toml` with a `[workspace]` table is found.
///
/// # Errors
///
/// May fail if no workspace manifest is found above the current directory.
pub fn workspace_root() -> eyre::Result<PathBuf> {
    let current_dir = env::current_dir()?;
    find_workspace_root(&current_dir)
}

/// Path to the crate of contract `name` (e.g. `my-token-proxy`).
///
/// # Errors
///
/// May fail if the workspace root cannot be found or the crate doesn't exist.
pub fn contract_dir(name: &str) -> eyre::Result<PathBuf> {
    let dir = workspace_root()?.join(CONTRACTS_DIR).join(name);
    if !dir.join("Cargo.toml").exists() {
        bail!("no contract crate named `{name}` at {}", dir.display());
    }
    Ok(dir)
}

fn find_workspace_root(start: &Path) -> eyre::Result<PathBuf> {
    for dir in start.ancestors() {
        let manifest = dir.join("Cargo.toml");
        if !manifest.exists() {
            continue;
        }

        let contents = fs::read_to_string(&manifest)
            .wrap_err(format!("failed to read {}", manifest.display()))?;
        let table = contents
            .parse::<Table>()
            .wrap_err(format!("failed to parse {}", manifest.display()))?;

        if table.contains_key("workspace") {
            return Ok(dir.to_path_buf());
        }
    }

    bail!("no workspace manifest found above {}", start.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_workspace_manifest_above_member() {
        let root = tempfile::tempdir().expect("should create temp dir");
        let member = root.path().join(CONTRACTS_DIR).join("my-token");
        fs::create_dir_all(&member).unwrap();
        fs::write(root.path().join("Cargo.toml"), "[workspace]\nmembers = []\n")
            .unwrap();
        fs::write(member.join("Cargo.toml"), "[package]\nname = \"my-token\"\n")
            .unwrap();

        let found = find_workspace_root(&member).expect("should find root");
        assert_eq!(found, root.path());
    }

    #[test]
    fn errors_without_workspace_manifest() {
        let root = tempfile::tempdir().expect("should create temp dir");
        fs::write(root.path().join("Cargo.toml"), "[package]\nname = \"solo\"\n")
            .unwrap();

        assert!(find_workspace_root(root.path()).is_err());
    }
}
