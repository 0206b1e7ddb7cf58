//! Duty point of a sizing request.

use crate::error::{EngineError, EngineResult};
use fl_core::units::{Frequency, Length, Power, TempInterval, Temperature};
use fl_props::Refrigerant;

/// Operating point one circuit is sized for. Constructed per request,
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyPoint {
    /// Required cooling capacity
    pub capacity: Power,
    /// Evaporating temperature
    pub t_evap: Temperature,
    /// Condensing temperature
    pub t_cond: Temperature,
    /// Subcooling below saturated liquid at the condenser outlet
    pub subcooling: TempInterval,
    /// Superheat above saturated vapor at the compressor inlet
    pub superheat: TempInterval,
    pub refrigerant: Refrigerant,
    /// Compressor drive frequency
    pub frequency: Frequency,
    /// One-way pipe run length
    pub run_length: Length,
}

impl DutyPoint {
    /// Superheated suction gas temperature.
    pub fn suction_temperature(&self) -> Temperature {
        self.t_evap + self.superheat
    }

    /// Subcooled liquid temperature at the condenser outlet.
    pub fn liquid_temperature(&self) -> Temperature {
        self.t_cond - self.subcooling
    }

    pub fn validate(&self) -> EngineResult<()> {
        let config = |what: &str| EngineError::Config {
            what: what.to_string(),
        };
        if !self.capacity.value.is_finite() || self.capacity.value <= 0.0 {
            return Err(config("required capacity must be positive"));
        }
        if !self.t_evap.value.is_finite() || self.t_evap.value <= 0.0 {
            return Err(config("evaporating temperature must be above absolute zero"));
        }
        if !self.t_cond.value.is_finite() || self.t_cond.value <= 0.0 {
            return Err(config("condensing temperature must be above absolute zero"));
        }
        if self.t_evap.value >= self.t_cond.value {
            return Err(config(
                "evaporating temperature must be below condensing temperature",
            ));
        }
        if !self.subcooling.value.is_finite() || self.subcooling.value < 0.0 {
            return Err(config("subcooling must be non-negative"));
        }
        if !self.superheat.value.is_finite() || self.superheat.value < 0.0 {
            return Err(config("superheat must be non-negative"));
        }
        if !self.frequency.value.is_finite() || self.frequency.value <= 0.0 {
            return Err(config("drive frequency must be positive"));
        }
        if !self.run_length.value.is_finite() || self.run_length.value <= 0.0 {
            return Err(config("pipe run length must be positive"));
        }
        Ok(())
    }
}
