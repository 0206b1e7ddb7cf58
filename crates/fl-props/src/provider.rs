//! Property provider trait and validation helpers.

use crate::error::{PropertyError, PropertyResult};
use crate::refrigerant::Refrigerant;
use crate::state::{SaturationQuality, SpecEnthalpy, SpecHeatCapacity, StateSpec};
use fl_core::units::{Density, DynVisc, Pressure, Temperature};

/// Trait for refrigerant property providers.
///
/// Implementations must be thread-safe (Send + Sync) so catalog entries can
/// be evaluated in parallel. Lookups are pure functions of their inputs; the
/// engine never caches results. A lookup either returns or fails with a
/// `PropertyError` — callers convert failures into per-entry "unavailable"
/// outcomes rather than aborting a sizing batch.
pub trait PropertyProvider: Send + Sync {
    /// Provider name (for logging/diagnostics).
    fn name(&self) -> &str;

    /// Whether this provider can answer lookups for the given refrigerant.
    fn supports(&self, refrigerant: Refrigerant) -> bool;

    /// Density [kg/m³] at the given state.
    fn density(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<Density>;

    /// Specific enthalpy [J/kg] at the given state.
    fn enthalpy(&self, refrigerant: Refrigerant, state: StateSpec)
    -> PropertyResult<SpecEnthalpy>;

    /// Saturation pressure at the given temperature and dome side.
    fn saturation_pressure(
        &self,
        refrigerant: Refrigerant,
        t: Temperature,
        quality: SaturationQuality,
    ) -> PropertyResult<Pressure>;

    /// Dynamic viscosity at the given state.
    fn dynamic_viscosity(
        &self,
        refrigerant: Refrigerant,
        state: StateSpec,
    ) -> PropertyResult<DynVisc>;

    /// Isobaric specific heat capacity [J/(kg·K)] at the given state.
    fn cp(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<SpecHeatCapacity>;

    /// Isochoric specific heat capacity [J/(kg·K)] at the given state.
    fn cv(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<SpecHeatCapacity>;

    /// Heat capacity ratio γ = cp/cv at the given state.
    fn gamma(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<f64> {
        let cp = self.cp(refrigerant, state)?;
        let cv = self.cv(refrigerant, state)?;
        validation::validate_cp(cv)?;
        let gamma = cp / cv;
        validation::validate_gamma(gamma)?;
        Ok(gamma)
    }
}

/// Validation helpers for looked-up properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> PropertyResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: Density) -> PropertyResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure specific enthalpy is finite.
    pub fn validate_enthalpy(h: SpecEnthalpy) -> PropertyResult<()> {
        if !h.is_finite() {
            return Err(PropertyError::NonPhysical {
                what: "enthalpy must be finite",
            });
        }
        Ok(())
    }

    /// Ensure dynamic viscosity is positive and finite.
    pub fn validate_viscosity(mu: DynVisc) -> PropertyResult<()> {
        if !mu.value.is_finite() || mu.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure specific heat capacity is positive and finite.
    pub fn validate_cp(cp: SpecHeatCapacity) -> PropertyResult<()> {
        if !cp.is_finite() || cp <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "specific heat must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure gamma (heat capacity ratio) is physically plausible.
    pub fn validate_gamma(gamma: f64) -> PropertyResult<()> {
        if !gamma.is_finite() || gamma < 1.0 {
            return Err(PropertyError::NonPhysical {
                what: "gamma must be >= 1 and finite",
            });
        }
        Ok(())
    }
}
