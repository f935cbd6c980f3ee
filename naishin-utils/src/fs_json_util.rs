use std::{fmt::Debug, io::BufReader, path::PathBuf};

use anyhow::Context;
use fs_err::File;
use serde::Deserialize;

fn describe<T>(path: &PathBuf) -> String {
    format!(
        "While trying to parse {path:?} as {}",
        std::any::type_name::<T>()
    )
}

/// Reads a JSON document, e.g. an exported grade history.
pub fn read_json<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| serde_json::from_reader(BufReader::new(File::open(&path)?)).map_err(anyhow::Error::new))()
        .with_context(|| describe::<T>(&path))
}

/// Reads a TOML document, e.g. the calculator configuration.
pub fn read_toml<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| toml::from_str(&fs_err::read_to_string(&path)?).map_err(anyhow::Error::new))()
        .with_context(|| describe::<T>(&path))
}
