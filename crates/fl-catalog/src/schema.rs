//! Catalog file schema.
//!
//! The YAML schema carries plain numbers in the units catalogs are written
//! in (mm, bar, m³/h, °C, liters); `compile` converts everything to uom
//! quantities through the fl-core constructors and validates each record.

use crate::accessory::{
    AccessoryCatalog, CheckValve, OilReceiver, OilSeparator, OilSeparatorReceiver, Orientation,
    Receiver, SightGlass, SuctionAccumulator,
};
use crate::compressor::{Compressor, ConstraintRegion, Envelope, EnvelopePoint};
use crate::error::{CatalogError, CatalogResult};
use crate::pipe::{LineType, Pipe};
use fl_core::ids::Id;
use fl_core::units::{bar, celsius, liters, m3_per_hour, mm};
use fl_props::Refrigerant;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogFile {
    pub version: u32,
    #[serde(default)]
    pub compressors: Vec<CompressorDef>,
    #[serde(default)]
    pub pipes: Vec<PipeDef>,
    #[serde(default)]
    pub accessories: AccessoryDefs,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompressorDef {
    pub name: String,
    pub displacement_50hz_m3h: f64,
    pub displacement_60hz_m3h: f64,
    pub max_low_side_bar: f64,
    pub max_high_side_bar: f64,
    pub suction_conn_mm: f64,
    pub discharge_conn_mm: f64,
    pub oil_conn_mm: f64,
    pub refrigerants: Vec<String>,
    pub envelope: Vec<EnvelopePointDef>,
    #[serde(default)]
    pub constraints: Vec<ConstraintRegionDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnvelopePointDef {
    pub t_evap_c: f64,
    pub t_cond_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstraintRegionDef {
    pub vertices: Vec<EnvelopePointDef>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeDef {
    pub name: String,
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub material: String,
    pub line_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessoryDefs {
    #[serde(default)]
    pub receivers: Vec<ReceiverDef>,
    #[serde(default)]
    pub check_valves: Vec<CheckValveDef>,
    #[serde(default)]
    pub sight_glasses: Vec<SightGlassDef>,
    #[serde(default)]
    pub suction_accumulators: Vec<SuctionAccumulatorDef>,
    #[serde(default)]
    pub oil_separators: Vec<OilSeparatorDef>,
    #[serde(default)]
    pub oil_separator_receivers: Vec<OilSeparatorReceiverDef>,
    #[serde(default)]
    pub oil_receivers: Vec<OilReceiverDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiverDef {
    pub name: String,
    pub manufacturer: String,
    pub max_pressure_bar: f64,
    pub volume_l: f64,
    pub conn_in_mm: f64,
    pub conn_out_mm: f64,
    pub refrigerants: Vec<String>,
    pub orientation: OrientationDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OrientationDef {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckValveDef {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub conn_mm: f64,
    pub max_pressure_bar: f64,
    pub kv: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SightGlassDef {
    pub model: String,
    pub manufacturer: String,
    pub conn_mm: f64,
    pub max_pressure_bar: f64,
    pub refrigerants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuctionAccumulatorDef {
    pub model: String,
    pub manufacturer: String,
    pub conn_mm: f64,
    pub min_pressure_bar: f64,
    pub max_pressure_bar: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub refrigerants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OilSeparatorDef {
    pub model: String,
    pub manufacturer: String,
    pub conn_mm: f64,
    pub oil_conn_mm: f64,
    pub max_pressure_bar: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub displacement_m3h: f64,
    pub refrigerants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OilSeparatorReceiverDef {
    pub model: String,
    pub manufacturer: String,
    pub conn_mm: f64,
    pub oil_conn_mm: f64,
    pub max_pressure_bar: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub volume_l: f64,
    pub displacement_m3h: f64,
    pub refrigerants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OilReceiverDef {
    pub model: String,
    pub manufacturer: String,
    pub conn_mm: f64,
    pub oil_conn_mm: f64,
    pub max_pressure_bar: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub volume_l: f64,
    pub refrigerants: Vec<String>,
}

fn parse_refrigerants(entry: &str, designations: &[String]) -> CatalogResult<Vec<Refrigerant>> {
    designations
        .iter()
        .map(|d| {
            Refrigerant::from_str(d).map_err(|_| CatalogError::UnknownRefrigerant {
                entry: entry.to_string(),
                designation: d.clone(),
            })
        })
        .collect()
}

fn compile_vertices(defs: &[EnvelopePointDef]) -> Vec<EnvelopePoint> {
    defs.iter()
        .map(|v| EnvelopePoint {
            t_evap: celsius(v.t_evap_c),
            t_cond: celsius(v.t_cond_c),
        })
        .collect()
}

impl CompressorDef {
    pub fn compile(&self, index: u32) -> CatalogResult<Compressor> {
        let compressor = Compressor {
            id: Id::from_index(index),
            name: self.name.clone(),
            displacement_50hz: m3_per_hour(self.displacement_50hz_m3h),
            displacement_60hz: m3_per_hour(self.displacement_60hz_m3h),
            max_low_side_pressure: bar(self.max_low_side_bar),
            max_high_side_pressure: bar(self.max_high_side_bar),
            suction_conn: mm(self.suction_conn_mm),
            discharge_conn: mm(self.discharge_conn_mm),
            oil_conn: mm(self.oil_conn_mm),
            refrigerants: parse_refrigerants(&self.name, &self.refrigerants)?,
            envelope: Envelope {
                vertices: compile_vertices(&self.envelope),
            },
            constraints: self
                .constraints
                .iter()
                .map(|c| ConstraintRegion {
                    vertices: compile_vertices(&c.vertices),
                    message: c.message.clone(),
                })
                .collect(),
        };
        compressor.validate()?;
        Ok(compressor)
    }
}

impl PipeDef {
    pub fn compile(&self, index: u32) -> CatalogResult<Pipe> {
        let line_type =
            LineType::from_str(&self.line_type).map_err(|_| CatalogError::UnknownLineType {
                entry: self.name.clone(),
                value: self.line_type.clone(),
            })?;
        let pipe = Pipe {
            id: Id::from_index(index),
            name: self.name.clone(),
            inner_diameter: mm(self.inner_diameter_mm),
            outer_diameter: mm(self.outer_diameter_mm),
            material: self.material.clone(),
            line_type,
        };
        pipe.validate()?;
        Ok(pipe)
    }
}

impl AccessoryDefs {
    pub fn compile(&self) -> CatalogResult<AccessoryCatalog> {
        let mut out = AccessoryCatalog::default();
        for (i, def) in self.receivers.iter().enumerate() {
            out.receivers.push(Receiver {
                id: Id::from_index(i as u32),
                name: def.name.clone(),
                manufacturer: def.manufacturer.clone(),
                max_pressure: bar(def.max_pressure_bar),
                volume: liters(def.volume_l),
                conn_in: mm(def.conn_in_mm),
                conn_out: mm(def.conn_out_mm),
                refrigerants: parse_refrigerants(&def.name, &def.refrigerants)?,
                orientation: match def.orientation {
                    OrientationDef::Vertical => Orientation::Vertical,
                    OrientationDef::Horizontal => Orientation::Horizontal,
                },
            });
        }
        for (i, def) in self.check_valves.iter().enumerate() {
            out.check_valves.push(CheckValve {
                id: Id::from_index(i as u32),
                name: def.name.clone(),
                model: def.model.clone(),
                manufacturer: def.manufacturer.clone(),
                conn: mm(def.conn_mm),
                max_pressure: bar(def.max_pressure_bar),
                kv: def.kv,
                min_temperature: celsius(def.min_temperature_c),
                max_temperature: celsius(def.max_temperature_c),
            });
        }
        for (i, def) in self.sight_glasses.iter().enumerate() {
            out.sight_glasses.push(SightGlass {
                id: Id::from_index(i as u32),
                model: def.model.clone(),
                manufacturer: def.manufacturer.clone(),
                conn: mm(def.conn_mm),
                max_pressure: bar(def.max_pressure_bar),
                refrigerants: parse_refrigerants(&def.model, &def.refrigerants)?,
            });
        }
        for (i, def) in self.suction_accumulators.iter().enumerate() {
            out.suction_accumulators.push(SuctionAccumulator {
                id: Id::from_index(i as u32),
                model: def.model.clone(),
                manufacturer: def.manufacturer.clone(),
                conn: mm(def.conn_mm),
                min_pressure: bar(def.min_pressure_bar),
                max_pressure: bar(def.max_pressure_bar),
                min_temperature: celsius(def.min_temperature_c),
                max_temperature: celsius(def.max_temperature_c),
                refrigerants: parse_refrigerants(&def.model, &def.refrigerants)?,
            });
        }
        for (i, def) in self.oil_separators.iter().enumerate() {
            out.oil_separators.push(OilSeparator {
                id: Id::from_index(i as u32),
                model: def.model.clone(),
                manufacturer: def.manufacturer.clone(),
                conn: mm(def.conn_mm),
                oil_conn: mm(def.oil_conn_mm),
                max_pressure: bar(def.max_pressure_bar),
                min_temperature: celsius(def.min_temperature_c),
                max_temperature: celsius(def.max_temperature_c),
                displacement: m3_per_hour(def.displacement_m3h),
                refrigerants: parse_refrigerants(&def.model, &def.refrigerants)?,
            });
        }
        for (i, def) in self.oil_separator_receivers.iter().enumerate() {
            out.oil_separator_receivers.push(OilSeparatorReceiver {
                id: Id::from_index(i as u32),
                model: def.model.clone(),
                manufacturer: def.manufacturer.clone(),
                conn: mm(def.conn_mm),
                oil_conn: mm(def.oil_conn_mm),
                max_pressure: bar(def.max_pressure_bar),
                min_temperature: celsius(def.min_temperature_c),
                max_temperature: celsius(def.max_temperature_c),
                volume: liters(def.volume_l),
                displacement: m3_per_hour(def.displacement_m3h),
                refrigerants: parse_refrigerants(&def.model, &def.refrigerants)?,
            });
        }
        for (i, def) in self.oil_receivers.iter().enumerate() {
            out.oil_receivers.push(OilReceiver {
                id: Id::from_index(i as u32),
                model: def.model.clone(),
                manufacturer: def.manufacturer.clone(),
                conn: mm(def.conn_mm),
                oil_conn: mm(def.oil_conn_mm),
                max_pressure: bar(def.max_pressure_bar),
                min_temperature: celsius(def.min_temperature_c),
                max_temperature: celsius(def.max_temperature_c),
                volume: liters(def.volume_l),
                refrigerants: parse_refrigerants(&def.model, &def.refrigerants)?,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_YAML: &str = r#"
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
    refrigerants: [R134a]
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
"#;

    #[test]
    fn parse_and_compile_minimal_catalog() {
        let file: CatalogFile = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        assert_eq!(file.version, 1);

        let compressor = file.compressors[0].compile(0).unwrap();
        assert_eq!(compressor.name, "CMP-30");
        assert_eq!(compressor.refrigerants, vec![Refrigerant::R134a]);
        // 30 m³/h in SI
        assert!((compressor.displacement_50hz.value - 30.0 / 3600.0).abs() < 1e-9);

        let pipe = file.pipes[0].compile(0).unwrap();
        assert_eq!(pipe.line_type, LineType::Suction);
        assert!((pipe.inner_diameter.value - 0.020).abs() < 1e-12);
    }

    #[test]
    fn unknown_refrigerant_fails_compile() {
        let mut file: CatalogFile = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        file.compressors[0].refrigerants = vec!["R404A".into()];
        let err = file.compressors[0].compile(0).unwrap_err();
        assert!(err.to_string().contains("R404A"));
    }

    #[test]
    fn unknown_line_type_fails_compile() {
        let mut file: CatalogFile = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        file.pipes[0].line_type = "steam".into();
        assert!(file.pipes[0].compile(0).is_err());
    }

    #[test]
    fn catalog_file_round_trips_through_yaml() {
        let file: CatalogFile = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        let text = serde_yaml::to_string(&file).unwrap();
        let reparsed: CatalogFile = serde_yaml::from_str(&text).unwrap();
        assert_eq!(file, reparsed);
    }
}
