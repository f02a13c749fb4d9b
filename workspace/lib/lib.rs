//! Shared plumbing for the driver binaries.

use std::{
    fs,
    io::{ BufReader, BufWriter },
    path::Path,
};
use anyhow::{ Context, Result };
use serde::{ de::DeserializeOwned, Serialize };

/// Initialize logging with a default filter of `info`, overridable through
/// `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();
}

/// Create a directory and all its parents if they don't already exist.
pub fn mkdir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))
}

/// Read a YAML file into `T`.
pub fn read_yaml<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Read a YAML file into `T` if a path is given, otherwise return
/// `T::default()`.
pub fn read_yaml_or_default<T, P>(path: Option<P>) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    path.map(read_yaml::<T, P>).unwrap_or_else(|| Ok(T::default()))
}

/// Write `value` as pretty-printed JSON.
pub fn write_json<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
