//! Selected-component bookkeeping.
//!
//! Callers record the last component chosen per category so a later session
//! can show what the circuit was built from. The stores here are written by
//! the caller only; the sizing engine never consults them.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Category a selection is keyed under. Pipe lines are separate categories
/// so one circuit carries one choice per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Compressor,
    SuctionPipe,
    DischargePipe,
    LiquidPipe,
    CondensingPipe,
    OilPipe,
    Receiver,
    CheckValve,
    SightGlass,
    SuctionAccumulator,
    OilSeparator,
    OilSeparatorReceiver,
    OilReceiver,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 13] = [
        ComponentCategory::Compressor,
        ComponentCategory::SuctionPipe,
        ComponentCategory::DischargePipe,
        ComponentCategory::LiquidPipe,
        ComponentCategory::CondensingPipe,
        ComponentCategory::OilPipe,
        ComponentCategory::Receiver,
        ComponentCategory::CheckValve,
        ComponentCategory::SightGlass,
        ComponentCategory::SuctionAccumulator,
        ComponentCategory::OilSeparator,
        ComponentCategory::OilSeparatorReceiver,
        ComponentCategory::OilReceiver,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ComponentCategory::Compressor => "compressor",
            ComponentCategory::SuctionPipe => "suction_pipe",
            ComponentCategory::DischargePipe => "discharge_pipe",
            ComponentCategory::LiquidPipe => "liquid_pipe",
            ComponentCategory::CondensingPipe => "condensing_pipe",
            ComponentCategory::OilPipe => "oil_pipe",
            ComponentCategory::Receiver => "receiver",
            ComponentCategory::CheckValve => "check_valve",
            ComponentCategory::SightGlass => "sight_glass",
            ComponentCategory::SuctionAccumulator => "suction_accumulator",
            ComponentCategory::OilSeparator => "oil_separator",
            ComponentCategory::OilSeparatorReceiver => "oil_separator_receiver",
            ComponentCategory::OilReceiver => "oil_receiver",
        }
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ComponentCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        ComponentCategory::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(query))
            .ok_or_else(|| CatalogError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

/// Last chosen component per category. Selections are component names
/// rather than ids so they stay readable across catalog reloads.
pub trait SelectionStore {
    fn record(&mut self, category: ComponentCategory, name: &str) -> CatalogResult<()>;

    fn selected(&self, category: ComponentCategory) -> Option<&str>;

    fn clear(&mut self, category: ComponentCategory) -> CatalogResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySelectionStore {
    entries: BTreeMap<ComponentCategory, String>,
}

impl InMemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for InMemorySelectionStore {
    fn record(&mut self, category: ComponentCategory, name: &str) -> CatalogResult<()> {
        self.entries.insert(category, name.to_string());
        Ok(())
    }

    fn selected(&self, category: ComponentCategory) -> Option<&str> {
        self.entries.get(&category).map(String::as_str)
    }

    fn clear(&mut self, category: ComponentCategory) -> CatalogResult<()> {
        self.entries.remove(&category);
        Ok(())
    }
}

/// Selections persisted as one pretty-printed JSON object. The whole map is
/// rewritten on every record; selection sets are a dozen entries at most.
#[derive(Debug, Clone)]
pub struct JsonFileSelectionStore {
    path: PathBuf,
    entries: BTreeMap<ComponentCategory, String>,
}

impl JsonFileSelectionStore {
    /// Opens the store at `path`, loading existing selections if the file
    /// is present.
    pub fn open(path: &Path) -> CatalogResult<Self> {
        let entries = if path.exists() {
            let text = fs::read_to_string(path)?;
            serde_json::from_str(&text)?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn persist(&self) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SelectionStore for JsonFileSelectionStore {
    fn record(&mut self, category: ComponentCategory, name: &str) -> CatalogResult<()> {
        self.entries.insert(category, name.to_string());
        self.persist()
    }

    fn selected(&self, category: ComponentCategory) -> Option<&str> {
        self.entries.get(&category).map(String::as_str)
    }

    fn clear(&mut self, category: ComponentCategory) -> CatalogResult<()> {
        self.entries.remove(&category);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip() {
        for category in ComponentCategory::ALL {
            assert_eq!(
                ComponentCategory::from_str(category.key()).unwrap(),
                category
            );
        }
        assert!(ComponentCategory::from_str("fan").is_err());
    }

    #[test]
    fn in_memory_record_and_overwrite() {
        let mut store = InMemorySelectionStore::new();
        assert_eq!(store.selected(ComponentCategory::Compressor), None);

        store.record(ComponentCategory::Compressor, "CMP-30").unwrap();
        store.record(ComponentCategory::SuctionPipe, "Cu 22x1").unwrap();
        assert_eq!(
            store.selected(ComponentCategory::Compressor),
            Some("CMP-30")
        );

        store.record(ComponentCategory::Compressor, "CMP-41").unwrap();
        assert_eq!(
            store.selected(ComponentCategory::Compressor),
            Some("CMP-41")
        );

        store.clear(ComponentCategory::Compressor).unwrap();
        assert_eq!(store.selected(ComponentCategory::Compressor), None);
        assert_eq!(
            store.selected(ComponentCategory::SuctionPipe),
            Some("Cu 22x1")
        );
    }

    #[test]
    fn json_file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!(
            "fl_catalog_selection_{}_{}",
            std::process::id(),
            line!()
        ));
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("selections.json");

        {
            let mut store = JsonFileSelectionStore::open(&path).unwrap();
            store.record(ComponentCategory::Compressor, "CMP-30").unwrap();
            store.record(ComponentCategory::Receiver, "RCV-9").unwrap();
        }

        let reopened = JsonFileSelectionStore::open(&path).unwrap();
        assert_eq!(
            reopened.selected(ComponentCategory::Compressor),
            Some("CMP-30")
        );
        assert_eq!(reopened.selected(ComponentCategory::Receiver), Some("RCV-9"));

        let _ = fs::remove_dir_all(&dir);
    }
}
