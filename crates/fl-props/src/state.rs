//! Thermodynamic state specifications for property lookups.

use crate::error::{PropertyError, PropertyResult};
use fl_core::units::{Pressure, Temperature};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Which side of the saturation dome a saturated lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationQuality {
    /// Saturated liquid (vapor quality 0)
    Liquid,
    /// Saturated vapor (vapor quality 1)
    Vapor,
}

impl SaturationQuality {
    /// Vapor quality value the backends expect.
    pub fn value(&self) -> f64 {
        match self {
            SaturationQuality::Liquid => 0.0,
            SaturationQuality::Vapor => 1.0,
        }
    }
}

/// Input specification for a property lookup.
///
/// Mirrors the two state forms the sizing engine needs: a point on the
/// saturation dome (temperature + quality) or a single-phase state
/// (temperature + pressure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateSpec {
    /// Temperature and saturation quality.
    Saturated {
        t: Temperature,
        quality: SaturationQuality,
    },
    /// Temperature and pressure.
    SinglePhase { t: Temperature, p: Pressure },
}

impl StateSpec {
    pub fn saturated_vapor(t: Temperature) -> Self {
        StateSpec::Saturated {
            t,
            quality: SaturationQuality::Vapor,
        }
    }

    pub fn saturated_liquid(t: Temperature) -> Self {
        StateSpec::Saturated {
            t,
            quality: SaturationQuality::Liquid,
        }
    }

    pub fn at_tp(t: Temperature, p: Pressure) -> Self {
        StateSpec::SinglePhase { t, p }
    }

    /// Absolute temperature of the state.
    pub fn temperature(&self) -> Temperature {
        match self {
            StateSpec::Saturated { t, .. } => *t,
            StateSpec::SinglePhase { t, .. } => *t,
        }
    }

    /// Validate that the state is physically representable.
    pub fn validate(&self) -> PropertyResult<()> {
        let t = self.temperature().value;
        if !t.is_finite() || t <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        if let StateSpec::SinglePhase { p, .. } = self {
            if !p.value.is_finite() || p.value <= 0.0 {
                return Err(PropertyError::NonPhysical {
                    what: "pressure must be positive and finite",
                });
            }
        }
        Ok(())
    }
}
