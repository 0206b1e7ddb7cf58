//! Pipe catalog records.

use crate::error::{CatalogError, CatalogResult};
use fl_core::ids::PipeId;
use fl_core::units::Length;

/// Refrigerant line a pipe is cataloged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    Discharge,
    Liquid,
    Condensing,
    Suction,
    Oil,
}

impl LineType {
    pub const ALL: [LineType; 5] = [
        LineType::Discharge,
        LineType::Liquid,
        LineType::Condensing,
        LineType::Suction,
        LineType::Oil,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LineType::Discharge => "discharge",
            LineType::Liquid => "liquid",
            LineType::Condensing => "condensing",
            LineType::Suction => "suction",
            LineType::Oil => "oil",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineType::Discharge => "Discharge Line",
            LineType::Liquid => "Liquid Line",
            LineType::Condensing => "Condensing Line",
            LineType::Suction => "Suction Line",
            LineType::Oil => "Oil Line",
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for LineType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        LineType::ALL
            .into_iter()
            .find(|lt| lt.key().eq_ignore_ascii_case(query))
            .ok_or("unknown line type")
    }
}

/// Pipe record.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub id: PipeId,
    pub name: String,
    pub inner_diameter: Length,
    pub outer_diameter: Length,
    pub material: String,
    pub line_type: LineType,
}

impl Pipe {
    /// Record invariants, checked when a catalog file is compiled.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.inner_diameter.value <= 0.0 || !self.inner_diameter.value.is_finite() {
            return Err(self.malformed("inner diameter must be positive"));
        }
        if self.inner_diameter.value >= self.outer_diameter.value {
            return Err(self.malformed("inner diameter must be smaller than outer diameter"));
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

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::ids::Id;
    use fl_core::units::mm;
    use std::str::FromStr;

    fn sample() -> Pipe {
        Pipe {
            id: Id::from_index(0),
            name: "Cu 22x1".into(),
            inner_diameter: mm(20.0),
            outer_diameter: mm(22.0),
            material: "copper".into(),
            line_type: LineType::Suction,
        }
    }

    #[test]
    fn valid_pipe_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn reject_inner_not_smaller_than_outer() {
        let mut p = sample();
        p.inner_diameter = mm(22.0);
        assert!(p.validate().is_err());
        p.inner_diameter = mm(25.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn line_type_round_trip() {
        for lt in LineType::ALL {
            assert_eq!(LineType::from_str(lt.key()).unwrap(), lt);
        }
        assert_eq!(LineType::from_str("SUCTION").unwrap(), LineType::Suction);
        assert!(LineType::from_str("steam").is_err());
    }
}
