//! Compressor capacity model.
//!
//! Computes mass flow rate, cooling capacity, and an estimated discharge
//! temperature for one compressor at a duty point. Property lookups that
//! fail turn the whole evaluation into `Unavailable`; the caller keeps
//! going over the rest of the catalog.

use crate::duty::DutyPoint;
use crate::envelope;
use crate::result::{Computed, Unavailability};
use fl_catalog::Compressor;
use fl_core::units::{Frequency, MassRate, Power, TempInterval, Temperature, VolumeRate, kelvin, watt};
use fl_props::{PropertyError, PropertyProvider, Refrigerant, SaturationQuality, StateSpec};
use tracing::debug;

/// Computed performance of a compressor at a duty point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorPerformance {
    pub mass_flow: MassRate,
    pub cooling_capacity: Power,
    /// Ideal-gas isentropic estimate, see `performance`.
    pub discharge_temperature: Temperature,
}

/// How a compressor relates to a required capacity at a duty point.
#[derive(Debug, Clone, PartialEq)]
pub enum Suitability {
    /// Computed capacity meets or exceeds the requirement.
    Suitable { capacity: Power },
    /// Runs at the duty point but falls short of the requirement.
    Undersized { capacity: Power },
    IncompatibleRefrigerant,
    OutsideEnvelope,
    Unavailable(Unavailability),
}

/// Displacement at a drive frequency, interpolated linearly between the
/// 50 Hz and 60 Hz catalog points.
///
/// Deliberately unclamped: variable-frequency drives run outside the
/// [50 Hz, 60 Hz] band and the linear model extrapolates.
pub fn displacement_at(compressor: &Compressor, frequency: Frequency) -> VolumeRate {
    let ratio = (frequency.value - 50.0) / 10.0;
    compressor.displacement_50hz + (compressor.displacement_60hz - compressor.displacement_50hz) * ratio
}

/// Mass flow rate only: displacement at the drive frequency times suction
/// gas density. Cheaper than `performance` when capacity and discharge
/// temperature are not needed.
pub fn mass_flow(
    compressor: &Compressor,
    provider: &dyn PropertyProvider,
    refrigerant: Refrigerant,
    frequency: Frequency,
    t_evap: Temperature,
    superheat: TempInterval,
) -> Computed<MassRate> {
    let lookup = || -> Result<MassRate, PropertyError> {
        let p_suction = provider.saturation_pressure(refrigerant, t_evap, SaturationQuality::Vapor)?;
        let rho = provider.density(refrigerant, StateSpec::at_tp(t_evap + superheat, p_suction))?;
        Ok(displacement_at(compressor, frequency) * rho)
    };
    lookup().into()
}

/// Full performance evaluation.
///
/// The discharge temperature is an ideal-gas isentropic estimate,
/// `T_dis = T_suc · (p_dis/p_suc)^((γ−1)/γ)` with γ taken from cp/cv at
/// the superheated suction state. It is an approximation, not a real-gas
/// solve, and is reported as such.
pub fn performance(
    compressor: &Compressor,
    provider: &dyn PropertyProvider,
    duty: &DutyPoint,
) -> Computed<CompressorPerformance> {
    evaluate(compressor, provider, duty).into()
}

fn evaluate(
    compressor: &Compressor,
    provider: &dyn PropertyProvider,
    duty: &DutyPoint,
) -> Result<CompressorPerformance, PropertyError> {
    let refrigerant = duty.refrigerant;
    let displacement = displacement_at(compressor, duty.frequency);

    let t_suction = duty.suction_temperature();
    let p_suction = provider.saturation_pressure(refrigerant, duty.t_evap, SaturationQuality::Vapor)?;
    let suction_state = StateSpec::at_tp(t_suction, p_suction);

    let rho_suction = provider.density(refrigerant, suction_state)?;
    let mass_flow: MassRate = displacement * rho_suction;
    debug!(
        compressor = %compressor.name,
        displacement_m3s = displacement.value,
        rho_suction = rho_suction.value,
        mass_flow_kgps = mass_flow.value,
        "suction mass flow"
    );

    let h_suction = provider.enthalpy(refrigerant, suction_state)?;
    let h_liquid = provider.enthalpy(
        refrigerant,
        StateSpec::saturated_liquid(duty.liquid_temperature()),
    )?;
    let cooling_capacity = watt(mass_flow.value * (h_suction - h_liquid));
    debug!(
        compressor = %compressor.name,
        h_suction,
        h_liquid,
        capacity_w = cooling_capacity.value,
        "cooling capacity"
    );

    let p_discharge =
        provider.saturation_pressure(refrigerant, duty.t_cond, SaturationQuality::Liquid)?;
    let gamma = provider.gamma(refrigerant, suction_state)?;
    let exponent = (gamma - 1.0) / gamma;
    let discharge_temperature =
        kelvin(t_suction.value * (p_discharge.value / p_suction.value).powf(exponent));
    debug!(
        compressor = %compressor.name,
        gamma,
        p_suction_pa = p_suction.value,
        p_discharge_pa = p_discharge.value,
        t_discharge_k = discharge_temperature.value,
        "discharge temperature estimate"
    );

    Ok(CompressorPerformance {
        mass_flow,
        cooling_capacity,
        discharge_temperature,
    })
}

/// Suitability of a compressor for a required capacity.
///
/// Compatibility and envelope checks come first and short-circuit;
/// otherwise the computed capacity is compared against the requirement.
pub fn suitability(
    compressor: &Compressor,
    provider: &dyn PropertyProvider,
    duty: &DutyPoint,
    required: Power,
) -> Suitability {
    if !compressor.is_compatible(duty.refrigerant) {
        return Suitability::IncompatibleRefrigerant;
    }
    match envelope::contains(&compressor.envelope, duty.t_evap, duty.t_cond) {
        Computed::Ready(true) => {}
        Computed::Ready(false) => return Suitability::OutsideEnvelope,
        Computed::Unavailable(reason) => return Suitability::Unavailable(reason),
    }
    match performance(compressor, provider, duty) {
        Computed::Ready(perf) => {
            if perf.cooling_capacity.value >= required.value {
                Suitability::Suitable {
                    capacity: perf.cooling_capacity,
                }
            } else {
                Suitability::Undersized {
                    capacity: perf.cooling_capacity,
                }
            }
        }
        Computed::Unavailable(reason) => Suitability::Unavailable(reason),
    }
}
