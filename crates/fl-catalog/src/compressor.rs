//! Compressor catalog records.

use crate::error::{CatalogError, CatalogResult};
use fl_core::ids::CompressorId;
use fl_core::units::{Length, Pressure, Temperature, VolumeRate};
use fl_props::Refrigerant;

/// One vertex of a working envelope, in evaporating/condensing temperature
/// space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopePoint {
    pub t_evap: Temperature,
    pub t_cond: Temperature,
}

/// Certified operating region of a compressor: an ordered sequence of
/// vertices forming a simple closed polygon in temperature space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Envelope {
    pub vertices: Vec<EnvelopePoint>,
}

/// Advisory sub-region of a working envelope. A duty point landing inside
/// one gets its message attached to the sizing outcome (additional oil
/// cooling, reduced superheat, etc.); it does not affect suitability.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRegion {
    pub vertices: Vec<EnvelopePoint>,
    pub message: String,
}

/// Compressor record.
///
/// Displacement is cataloged at the two line frequencies and assumed to vary
/// linearly between them. Connection sizes are the nominal stub sizes used
/// to pre-filter pipe candidates.
#[derive(Debug, Clone)]
pub struct Compressor {
    pub id: CompressorId,
    pub name: String,
    pub displacement_50hz: VolumeRate,
    pub displacement_60hz: VolumeRate,
    pub max_low_side_pressure: Pressure,
    pub max_high_side_pressure: Pressure,
    pub suction_conn: Length,
    pub discharge_conn: Length,
    pub oil_conn: Length,
    pub refrigerants: Vec<Refrigerant>,
    pub envelope: Envelope,
    pub constraints: Vec<ConstraintRegion>,
}

impl Compressor {
    pub fn is_compatible(&self, refrigerant: Refrigerant) -> bool {
        self.refrigerants.contains(&refrigerant)
    }

    /// Record invariants, checked when a catalog file is compiled.
    ///
    /// The engine re-checks the envelope defensively at evaluation time, so
    /// a bad record that slips past here fails its own entry, not the batch.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.displacement_50hz.value <= 0.0 || self.displacement_60hz.value <= 0.0 {
            return Err(self.malformed("displacement must be positive"));
        }
        if self.refrigerants.is_empty() {
            return Err(self.malformed("refrigerant compatibility set is empty"));
        }
        if self.envelope.vertices.len() < 3 {
            return Err(self.malformed("working envelope needs at least 3 vertices"));
        }
        for region in &self.constraints {
            if region.vertices.len() < 3 {
                return Err(self.malformed("constraint region needs at least 3 vertices"));
            }
        }
        Ok(())
    }

    fn malformed(&self, reason: &'static str) -> CatalogError {
        CatalogError::MalformedEntry {
            entry: self.name.clone(),
            reason,
        }
    }
}
