// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::DatasetError;

const DATASET_EXTENSION: &str = "tsp";

/// A selectable instance: `value` is what the solver is given, `label` is
/// what a user sees.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Path to the instance file.
    pub value: String,
    /// File name without the `.tsp` extension.
    pub label: String,
}

/// Display name of an instance path: its file stem.
///
/// `data/berlin52.tsp` becomes `berlin52`.
#[must_use]
pub fn dataset_label(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists the `.tsp` files directly inside `dir`, ordered by label.
///
/// The extension match is case-insensitive. Subdirectories are not searched.
pub fn list_datasets(dir: impl AsRef<Path>) -> Result<Vec<DatasetEntry>, DatasetError> {
    let dir = dir.as_ref();
    let read = fs::read_dir(dir).map_err(|e| DatasetError::io(dir, e))?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| DatasetError::io(dir, e))?;
        let path = entry.path();
        let is_dataset = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DATASET_EXTENSION));
        if !is_dataset || !path.is_file() {
            continue;
        }
        let dataset = DatasetEntry {
            value: path.to_string_lossy().into_owned(),
            label: dataset_label(&path),
        };
        debug!(label = %dataset.label, value = %dataset.value, "found dataset");
        entries.push(dataset);
    }

    entries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
    info!(dir = %dir.display(), count = entries.len(), "listed datasets");
    Ok(entries)
}
