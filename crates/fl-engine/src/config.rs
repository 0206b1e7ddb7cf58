//! Engine configuration.

use crate::error::{EngineError, EngineResult};
use fl_catalog::LineType;
use fl_core::units::{Length, Velocity, mm, mps};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tunables of the sizing engine.
///
/// Target velocities and the roughness table are design practice, not
/// physics, so they live here rather than in the models. Standard sizes
/// are the outer diameters the connection pre-filter matches against.
#[derive(Debug, Clone)]
pub struct SizingConfig {
    /// Target gas velocity in suction lines
    pub suction_target_velocity: Velocity,
    /// Target gas velocity in discharge lines
    pub discharge_target_velocity: Velocity,
    /// Absolute roughness used when a pipe's material has no table entry
    pub default_roughness: Length,
    /// Absolute roughness per material, keys lowercase
    pub roughness_by_material: BTreeMap<String, Length>,
    /// Standard pipe outer diameters, ascending
    pub standard_sizes: Vec<Length>,
    /// Iteration cap for the Colebrook-White root-finder
    pub friction_max_iter: usize,
    /// Residual tolerance for the Colebrook-White root-finder
    pub friction_tol: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        let mut roughness_by_material = BTreeMap::new();
        roughness_by_material.insert("copper".to_string(), mm(0.0015));
        Self {
            suction_target_velocity: mps(20.0),
            discharge_target_velocity: mps(15.0),
            default_roughness: mm(0.0015),
            roughness_by_material,
            standard_sizes: [12.0, 16.0, 18.0, 22.0, 28.0, 35.0, 42.0, 54.0, 64.0, 76.0]
                .iter()
                .map(|&d| mm(d))
                .collect(),
            friction_max_iter: 64,
            friction_tol: 1e-8,
        }
    }
}

impl SizingConfig {
    pub fn target_velocity(&self, line_type: LineType) -> Velocity {
        match line_type {
            LineType::Suction => self.suction_target_velocity,
            _ => self.discharge_target_velocity,
        }
    }

    pub fn roughness_for(&self, material: &str) -> Length {
        self.roughness_by_material
            .get(&material.to_ascii_lowercase())
            .copied()
            .unwrap_or(self.default_roughness)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.suction_target_velocity.value <= 0.0 || self.discharge_target_velocity.value <= 0.0
        {
            return Err(EngineError::Config {
                what: "target velocities must be positive".to_string(),
            });
        }
        if self.default_roughness.value <= 0.0 {
            return Err(EngineError::Config {
                what: "default roughness must be positive".to_string(),
            });
        }
        if self.friction_max_iter == 0 {
            return Err(EngineError::Config {
                what: "friction iteration cap must be at least 1".to_string(),
            });
        }
        if !(self.friction_tol > 0.0) {
            return Err(EngineError::Config {
                what: "friction tolerance must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Serde-facing configuration overrides, plain numbers in documented units.
/// Every field is optional; missing fields keep the engine default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SizingConfigDef {
    pub suction_target_velocity_mps: Option<f64>,
    pub discharge_target_velocity_mps: Option<f64>,
    pub default_roughness_mm: Option<f64>,
    pub roughness_by_material_mm: Option<BTreeMap<String, f64>>,
    pub standard_sizes_mm: Option<Vec<f64>>,
    pub friction_max_iter: Option<usize>,
    pub friction_tol: Option<f64>,
}

impl SizingConfigDef {
    pub fn compile(&self) -> EngineResult<SizingConfig> {
        let mut config = SizingConfig::default();
        if let Some(v) = self.suction_target_velocity_mps {
            config.suction_target_velocity = mps(v);
        }
        if let Some(v) = self.discharge_target_velocity_mps {
            config.discharge_target_velocity = mps(v);
        }
        if let Some(r) = self.default_roughness_mm {
            config.default_roughness = mm(r);
        }
        if let Some(table) = &self.roughness_by_material_mm {
            config.roughness_by_material = table
                .iter()
                .map(|(material, &r)| (material.to_ascii_lowercase(), mm(r)))
                .collect();
        }
        if let Some(sizes) = &self.standard_sizes_mm {
            config.standard_sizes = sizes.iter().map(|&d| mm(d)).collect();
        }
        if let Some(n) = self.friction_max_iter {
            config.friction_max_iter = n;
        }
        if let Some(tol) = self.friction_tol {
            config.friction_tol = tol;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SizingConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.suction_target_velocity.value - 20.0).abs() < 1e-12);
        assert!((config.discharge_target_velocity.value - 15.0).abs() < 1e-12);
        assert_eq!(config.standard_sizes.len(), 10);
    }

    #[test]
    fn roughness_lookup_is_case_insensitive_with_fallback() {
        let config = SizingConfig::default();
        let copper = config.roughness_for("Copper");
        assert!((copper.value - 1.5e-6).abs() < 1e-12);
        // Unknown material falls back to the default
        let steel = config.roughness_for("steel");
        assert!((steel.value - config.default_roughness.value).abs() < 1e-15);
    }

    #[test]
    fn target_velocity_by_line() {
        let config = SizingConfig::default();
        assert!(config.target_velocity(LineType::Suction).value > 19.0);
        assert!(config.target_velocity(LineType::Discharge).value < 16.0);
        assert!(config.target_velocity(LineType::Oil).value < 16.0);
    }

    #[test]
    fn overrides_apply_and_validate() {
        let def = SizingConfigDef {
            suction_target_velocity_mps: Some(18.0),
            friction_max_iter: Some(128),
            ..Default::default()
        };
        let config = def.compile().unwrap();
        assert!((config.suction_target_velocity.value - 18.0).abs() < 1e-12);
        assert_eq!(config.friction_max_iter, 128);

        let bad = SizingConfigDef {
            friction_max_iter: Some(0),
            ..Default::default()
        };
        assert!(bad.compile().is_err());
    }

    #[test]
    fn config_def_parses_from_yaml() {
        let text = "suction_target_velocity_mps: 16.5\nstandard_sizes_mm: [12, 16, 22]\n";
        let def: SizingConfigDef = serde_yaml::from_str(text).unwrap();
        let config = def.compile().unwrap();
        assert!((config.suction_target_velocity.value - 16.5).abs() < 1e-12);
        assert_eq!(config.standard_sizes.len(), 3);
    }
}
