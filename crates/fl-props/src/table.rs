//! Fixed-table property provider.
//!
//! Returns the same property values for every state of a refrigerant. It is
//! not a physical model: it exists so the sizing engine can run without a
//! CoolProp installation (tests, CI, offline demos) and so property-based
//! tests can hold fluid properties fixed while varying geometry.

use crate::error::{PropertyError, PropertyResult};
use crate::provider::{PropertyProvider, validation};
use crate::refrigerant::Refrigerant;
use crate::state::{SaturationQuality, SpecEnthalpy, SpecHeatCapacity, StateSpec};
use fl_core::units::{Density, DynVisc, Pressure, Temperature, kg_per_m3, pa, pa_s};
use std::collections::HashMap;

/// Fixed property values for one refrigerant.
///
/// Saturated lookups resolve by dome side; single-phase lookups resolve as
/// vapor (the engine only queries single-phase states on the vapor side:
/// superheated suction gas and discharge gas).
#[derive(Debug, Clone, Copy)]
pub struct PropertyTable {
    /// Vapor density [kg/m³]
    pub rho_vapor: f64,
    /// Liquid density [kg/m³]
    pub rho_liquid: f64,
    /// Vapor specific enthalpy [J/kg]
    pub h_vapor: f64,
    /// Liquid specific enthalpy [J/kg]
    pub h_liquid: f64,
    /// Saturation pressure on the vapor side [Pa] (low side)
    pub p_sat_vapor: f64,
    /// Saturation pressure on the liquid side [Pa] (high side)
    pub p_sat_liquid: f64,
    /// Dynamic viscosity [Pa·s]
    pub mu: f64,
    /// Isobaric specific heat [J/(kg·K)]
    pub cp: f64,
    /// Isochoric specific heat [J/(kg·K)]
    pub cv: f64,
}

impl PropertyTable {
    /// Values in the neighborhood of R134a at 0 °C evap / 40 °C cond.
    /// Close enough to reality for plausible sizing numbers in demos.
    pub fn r134a_like() -> Self {
        Self {
            rho_vapor: 14.4,
            rho_liquid: 1_146.0,
            h_vapor: 404_000.0,
            h_liquid: 256_000.0,
            p_sat_vapor: 293_000.0,
            p_sat_liquid: 1_017_000.0,
            mu: 1.1e-5,
            cp: 900.0,
            cv: 770.0,
        }
    }
}

/// Property provider backed by per-refrigerant fixed tables.
#[derive(Debug, Clone, Default)]
pub struct TableProvider {
    tables: HashMap<Refrigerant, PropertyTable>,
}

impl TableProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table provider pre-loaded with an R134a-like fixture.
    pub fn r134a_fixture() -> Self {
        Self::new().with(Refrigerant::R134a, PropertyTable::r134a_like())
    }

    pub fn with(mut self, refrigerant: Refrigerant, table: PropertyTable) -> Self {
        self.tables.insert(refrigerant, table);
        self
    }

    fn table(&self, refrigerant: Refrigerant) -> PropertyResult<&PropertyTable> {
        self.tables
            .get(&refrigerant)
            .ok_or(PropertyError::UnknownRefrigerant {
                designation: refrigerant.designation(),
            })
    }
}

impl PropertyProvider for TableProvider {
    fn name(&self) -> &str {
        "fixed-table"
    }

    fn supports(&self, refrigerant: Refrigerant) -> bool {
        self.tables.contains_key(&refrigerant)
    }

    fn density(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<Density> {
        state.validate()?;
        let table = self.table(refrigerant)?;
        let rho_val = match state {
            StateSpec::Saturated {
                quality: SaturationQuality::Liquid,
                ..
            } => table.rho_liquid,
            _ => table.rho_vapor,
        };
        let rho = kg_per_m3(rho_val);
        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn enthalpy(
        &self,
        refrigerant: Refrigerant,
        state: StateSpec,
    ) -> PropertyResult<SpecEnthalpy> {
        state.validate()?;
        let table = self.table(refrigerant)?;
        let h = match state {
            StateSpec::Saturated {
                quality: SaturationQuality::Liquid,
                ..
            } => table.h_liquid,
            _ => table.h_vapor,
        };
        validation::validate_enthalpy(h)?;
        Ok(h)
    }

    fn saturation_pressure(
        &self,
        refrigerant: Refrigerant,
        t: Temperature,
        quality: SaturationQuality,
    ) -> PropertyResult<Pressure> {
        StateSpec::Saturated { t, quality }.validate()?;
        let table = self.table(refrigerant)?;
        let p_val = match quality {
            SaturationQuality::Liquid => table.p_sat_liquid,
            SaturationQuality::Vapor => table.p_sat_vapor,
        };
        let p = pa(p_val);
        validation::validate_pressure(p)?;
        Ok(p)
    }

    fn dynamic_viscosity(
        &self,
        refrigerant: Refrigerant,
        state: StateSpec,
    ) -> PropertyResult<DynVisc> {
        state.validate()?;
        let mu = pa_s(self.table(refrigerant)?.mu);
        validation::validate_viscosity(mu)?;
        Ok(mu)
    }

    fn cp(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<SpecHeatCapacity> {
        state.validate()?;
        let cp = self.table(refrigerant)?.cp;
        validation::validate_cp(cp)?;
        Ok(cp)
    }

    fn cv(&self, refrigerant: Refrigerant, state: StateSpec) -> PropertyResult<SpecHeatCapacity> {
        state.validate()?;
        let cv = self.table(refrigerant)?.cv;
        validation::validate_cp(cv)?;
        Ok(cv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::units::celsius;

    #[test]
    fn unknown_refrigerant_is_an_error() {
        let provider = TableProvider::r134a_fixture();
        let result = provider.density(
            Refrigerant::R717,
            StateSpec::saturated_vapor(celsius(0.0)),
        );
        assert!(matches!(
            result,
            Err(PropertyError::UnknownRefrigerant { .. })
        ));
        assert!(!provider.supports(Refrigerant::R717));
        assert!(provider.supports(Refrigerant::R134a));
    }

    #[test]
    fn dome_side_selects_values() {
        let provider = TableProvider::r134a_fixture();
        let rho_v = provider
            .density(Refrigerant::R134a, StateSpec::saturated_vapor(celsius(0.0)))
            .unwrap();
        let rho_l = provider
            .density(
                Refrigerant::R134a,
                StateSpec::saturated_liquid(celsius(40.0)),
            )
            .unwrap();
        assert!(rho_l.value > rho_v.value);

        let h_v = provider
            .enthalpy(Refrigerant::R134a, StateSpec::saturated_vapor(celsius(5.0)))
            .unwrap();
        let h_l = provider
            .enthalpy(
                Refrigerant::R134a,
                StateSpec::saturated_liquid(celsius(35.0)),
            )
            .unwrap();
        assert!(h_v > h_l);
    }

    #[test]
    fn gamma_from_table_cp_cv() {
        let provider = TableProvider::r134a_fixture();
        let gamma = provider
            .gamma(Refrigerant::R134a, StateSpec::saturated_vapor(celsius(0.0)))
            .unwrap();
        assert!((gamma - 900.0 / 770.0).abs() < 1e-12);
    }

    #[test]
    fn non_physical_state_rejected_before_lookup() {
        let provider = TableProvider::r134a_fixture();
        let result = provider.cp(
            Refrigerant::R134a,
            StateSpec::saturated_vapor(celsius(-280.0)),
        );
        assert!(result.is_err());
    }
}
