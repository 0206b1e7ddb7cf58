//! CoolProp-based property provider.

use crate::error::{PropertyError, PropertyResult};
use crate::provider::{PropertyProvider, validation};
use crate::refrigerant::Refrigerant;
use crate::state::{SaturationQuality, SpecEnthalpy, SpecHeatCapacity, StateSpec};
use fl_core::units::{Density, DynVisc, Pressure, Temperature, kg_per_m3, pa, pa_s};
use rfluids::prelude::*;

/// CoolProp backend for refrigerant properties.
///
/// Thread-safe: rfluids Fluid instances are stateless and can be created from
/// multiple threads; one is created per lookup.
pub struct CoolPropProvider {
    // Future: backend selection, tabular interpolation toggles
}

impl CoolPropProvider {
    /// Create a new CoolProp provider.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance at the given state.
    fn fluid_at(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<Fluid> {
        state.validate()?;
        let pure = refrigerant.rfluids_pure();
        let built = match state {
            StateSpec::Saturated { t, quality } => Fluid::from(pure).in_state(
                FluidInput::temperature(t.value),
                FluidInput::quality(quality.value()),
            ),
            StateSpec::SinglePhase { t, p } => Fluid::from(pure).in_state(
                FluidInput::pressure(p.value),
                FluidInput::temperature(t.value),
            ),
        };
        built.map_err(|e| PropertyError::Backend {
            message: format!("rfluids error for {} at {:?}: {}", refrigerant, state, e),
        })
    }
}

impl Default for CoolPropProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyProvider for CoolPropProvider {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, _refrigerant: Refrigerant) -> bool {
        // Every Refrigerant variant has an rfluids mapping
        true
    }

    fn density(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<Density> {
        let mut fluid = self.fluid_at(refrigerant, state)?;
        let rho_val = fluid.density().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })?;
        let rho = kg_per_m3(rho_val);
        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn enthalpy(
        &self,
        refrigerant: Refrigerant,
        state: StateSpec,
    ) -> PropertyResult<SpecEnthalpy> {
        let mut fluid = self.fluid_at(refrigerant, state)?;
        let h = fluid.enthalpy().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })?;
        validation::validate_enthalpy(h)?;
        Ok(h)
    }

    fn saturation_pressure(
        &self,
        refrigerant: Refrigerant,
        t: Temperature,
        quality: SaturationQuality,
    ) -> PropertyResult<Pressure> {
        let mut fluid = self.fluid_at(
            refrigerant,
            StateSpec::Saturated { t, quality },
        )?;
        let p_val = fluid.pressure().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting pressure: {}", e),
        })?;
        let p = pa(p_val);
        validation::validate_pressure(p)?;
        Ok(p)
    }

    fn dynamic_viscosity(
        &self,
        refrigerant: Refrigerant,
        state: StateSpec,
    ) -> PropertyResult<DynVisc> {
        let mut fluid = self.fluid_at(refrigerant, state)?;
        let mu_val = fluid
            .dynamic_viscosity()
            .map_err(|e| PropertyError::Backend {
                message: format!("rfluids error getting viscosity: {}", e),
            })?;
        let mu = pa_s(mu_val);
        validation::validate_viscosity(mu)?;
        Ok(mu)
    }

    fn cp(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<SpecHeatCapacity> {
        let mut fluid = self.fluid_at(refrigerant, state)?;
        let cp = fluid.specific_heat().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting specific heat: {}", e),
        })?;
        validation::validate_cp(cp)?;
        Ok(cp)
    }

    /// Isochoric specific heat via cv = cp − p/(ρT).
    ///
    /// rfluids does not expose cv directly for every backend state, so it is
    /// reconstructed with the ideal-gas relation, which is consistent with
    /// how the sizing engine uses γ (an ideal-gas discharge estimate).
    fn cv(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<SpecHeatCapacity> {
        let mut fluid = self.fluid_at(refrigerant, state)?;
        let cp = fluid.specific_heat().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting cp: {}", e),
        })?;
        let rho = fluid.density().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })?;
        let p_pa = fluid.pressure().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting pressure: {}", e),
        })?;
        let t_k = state.temperature().value;
        let r_specific = p_pa / (rho * t_k);
        let cv = cp - r_specific;
        validation::validate_cp(cv)?;
        Ok(cv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::units::celsius;

    #[test]
    fn r134a_saturated_vapor_density_plausible() {
        let provider = CoolPropProvider::new();
        let rho = provider
            .density(Refrigerant::R134a, StateSpec::saturated_vapor(celsius(0.0)))
            .unwrap();
        // ~14.4 kg/m³ at 0 °C
        assert!(rho.value > 10.0 && rho.value < 20.0, "rho = {}", rho.value);
    }

    #[test]
    fn r134a_saturation_pressure_ordering() {
        let provider = CoolPropProvider::new();
        let p_low = provider
            .saturation_pressure(Refrigerant::R134a, celsius(0.0), SaturationQuality::Vapor)
            .unwrap();
        let p_high = provider
            .saturation_pressure(Refrigerant::R134a, celsius(40.0), SaturationQuality::Liquid)
            .unwrap();
        assert!(p_high.value > p_low.value);
    }

    #[test]
    fn gamma_is_physical() {
        let provider = CoolPropProvider::new();
        let gamma = provider
            .gamma(Refrigerant::R134a, StateSpec::saturated_vapor(celsius(10.0)))
            .unwrap();
        assert!(gamma > 1.0 && gamma < 2.0, "gamma = {}", gamma);
    }

    #[test]
    fn out_of_range_state_is_an_error() {
        let provider = CoolPropProvider::new();
        // Way above R134a's critical temperature for a saturated lookup
        let result = provider.density(
            Refrigerant::R134a,
            StateSpec::saturated_vapor(celsius(300.0)),
        );
        assert!(result.is_err());
    }
}
