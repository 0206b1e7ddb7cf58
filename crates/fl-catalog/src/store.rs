//! Catalog store API.

use crate::accessory::AccessoryCatalog;
use crate::compressor::Compressor;
use crate::error::CatalogResult;
use crate::pipe::{LineType, Pipe};
use crate::schema::CatalogFile;
use std::fs;
use std::path::Path;

/// Read access to compiled catalog records.
///
/// The engine works against this trait so tests can feed it hand-built
/// fixtures without going through the file schema.
pub trait CatalogStore: Send + Sync {
    /// All compressors, in catalog order.
    fn compressors(&self) -> &[Compressor];

    /// Pipes, optionally restricted to one line type. Catalog order is
    /// preserved either way.
    fn pipes(&self, line_type: Option<LineType>) -> Vec<&Pipe>;

    fn accessories(&self) -> &AccessoryCatalog;
}

/// Catalog compiled into memory, the only store the engine ships.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    compressors: Vec<Compressor>,
    pipes: Vec<Pipe>,
    accessories: AccessoryCatalog,
}

impl InMemoryCatalog {
    pub fn new(
        compressors: Vec<Compressor>,
        pipes: Vec<Pipe>,
        accessories: AccessoryCatalog,
    ) -> Self {
        Self {
            compressors,
            pipes,
            accessories,
        }
    }

    /// Compiles a parsed catalog file. Fails on the first invalid record;
    /// a catalog either loads whole or not at all.
    pub fn from_catalog_file(file: &CatalogFile) -> CatalogResult<Self> {
        let compressors = file
            .compressors
            .iter()
            .enumerate()
            .map(|(i, def)| def.compile(i as u32))
            .collect::<CatalogResult<Vec<_>>>()?;
        let pipes = file
            .pipes
            .iter()
            .enumerate()
            .map(|(i, def)| def.compile(i as u32))
            .collect::<CatalogResult<Vec<_>>>()?;
        let accessories = file.accessories.compile()?;
        Ok(Self::new(compressors, pipes, accessories))
    }

    pub fn from_yaml_str(text: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(text)?;
        Self::from_catalog_file(&file)
    }

    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn compressors(&self) -> &[Compressor] {
        &self.compressors
    }

    fn pipes(&self, line_type: Option<LineType>) -> Vec<&Pipe> {
        self.pipes
            .iter()
            .filter(|p| line_type.is_none_or(|lt| p.line_type == lt))
            .collect()
    }

    fn accessories(&self) -> &AccessoryCatalog {
        &self.accessories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_YAML: &str = r#"
version: 1
compressors:
  - name: CMP-30
    displacement_50hz_m3h: 30.0
    displacement_60hz_m3h: 36.0
    max_low_side_bar: 19.0
    max_high_side_bar: 28.0
    suction_conn_mm: 22.0
    discharge_conn_mm: 16.0
    oil_conn_mm: 12.0
    refrigerants: [R134a, R290]
    envelope:
      - { t_evap_c: -20.0, t_cond_c: 30.0 }
      - { t_evap_c: 10.0, t_cond_c: 30.0 }
      - { t_evap_c: 10.0, t_cond_c: 60.0 }
      - { t_evap_c: -20.0, t_cond_c: 60.0 }
pipes:
  - name: Cu 22x1
    inner_diameter_mm: 20.0
    outer_diameter_mm: 22.0
    material: copper
    line_type: suction
  - name: Cu 16x1
    inner_diameter_mm: 14.0
    outer_diameter_mm: 16.0
    material: copper
    line_type: discharge
  - name: Cu 28x1
    inner_diameter_mm: 26.0
    outer_diameter_mm: 28.0
    material: copper
    line_type: suction
"#;

    #[test]
    fn loads_yaml_catalog() {
        let catalog = InMemoryCatalog::from_yaml_str(CATALOG_YAML).unwrap();
        assert_eq!(catalog.compressors().len(), 1);
        assert_eq!(catalog.pipes(None).len(), 3);
        assert!(catalog.accessories().is_empty());
    }

    #[test]
    fn pipe_filter_preserves_catalog_order() {
        let catalog = InMemoryCatalog::from_yaml_str(CATALOG_YAML).unwrap();
        let suction = catalog.pipes(Some(LineType::Suction));
        let names: Vec<&str> = suction.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cu 22x1", "Cu 28x1"]);
        assert!(catalog.pipes(Some(LineType::Oil)).is_empty());
    }

    #[test]
    fn bad_record_fails_whole_load() {
        let broken = CATALOG_YAML.replace("displacement_50hz_m3h: 30.0", "displacement_50hz_m3h: 0.0");
        assert!(InMemoryCatalog::from_yaml_str(&broken).is_err());
    }
}
