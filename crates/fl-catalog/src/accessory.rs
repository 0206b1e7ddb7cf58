//! Passive accessory records.
//!
//! The sizing engine never computes against these; the catalog lists them
//! and the orchestrator passes them through so callers can browse and pick.

use fl_core::ids::AccessoryId;
use fl_core::units::{Length, Pressure, Temperature, Volume, VolumeRate};
use fl_props::Refrigerant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Liquid receiver.
#[derive(Debug, Clone)]
pub struct Receiver {
    pub id: AccessoryId,
    pub name: String,
    pub manufacturer: String,
    pub max_pressure: Pressure,
    pub volume: Volume,
    pub conn_in: Length,
    pub conn_out: Length,
    pub refrigerants: Vec<Refrigerant>,
    pub orientation: Orientation,
}

/// Check valve.
#[derive(Debug, Clone)]
pub struct CheckValve {
    pub id: AccessoryId,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub conn: Length,
    pub max_pressure: Pressure,
    /// Flow coefficient [m³/h at 1 bar drop]
    pub kv: f64,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
}

/// Sight glass.
#[derive(Debug, Clone)]
pub struct SightGlass {
    pub id: AccessoryId,
    pub model: String,
    pub manufacturer: String,
    pub conn: Length,
    pub max_pressure: Pressure,
    pub refrigerants: Vec<Refrigerant>,
}

/// Suction accumulator.
#[derive(Debug, Clone)]
pub struct SuctionAccumulator {
    pub id: AccessoryId,
    pub model: String,
    pub manufacturer: String,
    pub conn: Length,
    pub min_pressure: Pressure,
    pub max_pressure: Pressure,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    pub refrigerants: Vec<Refrigerant>,
}

/// Oil separator.
#[derive(Debug, Clone)]
pub struct OilSeparator {
    pub id: AccessoryId,
    pub model: String,
    pub manufacturer: String,
    pub conn: Length,
    pub oil_conn: Length,
    pub max_pressure: Pressure,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    /// Maximum compressor displacement the separator is rated for
    pub displacement: VolumeRate,
    pub refrigerants: Vec<Refrigerant>,
}

/// Combined oil separator/receiver.
#[derive(Debug, Clone)]
pub struct OilSeparatorReceiver {
    pub id: AccessoryId,
    pub model: String,
    pub manufacturer: String,
    pub conn: Length,
    pub oil_conn: Length,
    pub max_pressure: Pressure,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    pub volume: Volume,
    pub displacement: VolumeRate,
    pub refrigerants: Vec<Refrigerant>,
}

/// Oil receiver.
#[derive(Debug, Clone)]
pub struct OilReceiver {
    pub id: AccessoryId,
    pub model: String,
    pub manufacturer: String,
    pub conn: Length,
    pub oil_conn: Length,
    pub max_pressure: Pressure,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    pub volume: Volume,
    pub refrigerants: Vec<Refrigerant>,
}

/// All passive accessory listings of a catalog, grouped by kind.
#[derive(Debug, Clone, Default)]
pub struct AccessoryCatalog {
    pub receivers: Vec<Receiver>,
    pub check_valves: Vec<CheckValve>,
    pub sight_glasses: Vec<SightGlass>,
    pub suction_accumulators: Vec<SuctionAccumulator>,
    pub oil_separators: Vec<OilSeparator>,
    pub oil_separator_receivers: Vec<OilSeparatorReceiver>,
    pub oil_receivers: Vec<OilReceiver>,
}

impl AccessoryCatalog {
    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
            && self.check_valves.is_empty()
            && self.sight_glasses.is_empty()
            && self.suction_accumulators.is_empty()
            && self.oil_separators.is_empty()
            && self.oil_separator_receivers.is_empty()
            && self.oil_receivers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_empty() {
        assert!(AccessoryCatalog::default().is_empty());
    }
}
