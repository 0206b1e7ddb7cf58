//! fl-engine: the frigline sizing engine.
//!
//! Selects and sizes refrigeration-circuit hardware for a requested duty
//! point: best-fit compressor from a catalog, then best-fit suction and
//! discharge piping, with full per-entry result tables.
//!
//! Modules, leaf-first:
//! - `envelope` — working-envelope containment and advisory sub-regions
//! - `capacity` — compressor mass flow, cooling capacity, discharge
//!   temperature estimate, suitability
//! - `friction` — velocity, Reynolds number, friction factors,
//!   Darcy-Weisbach pressure drop
//! - `pipes` — line-state derivation, connection-size pre-filter,
//!   best-fit pipe selection, per-pipe hydraulics
//! - `sizing` — the orchestrator composing the above over a catalog
//!
//! The engine receives its collaborators (`CatalogStore`,
//! `PropertyProvider`) by handle and keeps no state between requests.
//! Per-entry failures travel as `Computed::Unavailable`; `EngineError` is
//! reserved for misconfiguration.

pub mod capacity;
pub mod config;
pub mod duty;
pub mod envelope;
pub mod error;
pub mod friction;
pub mod pipes;
pub mod result;
pub mod sizing;

pub use capacity::{CompressorPerformance, Suitability};
pub use config::{SizingConfig, SizingConfigDef};
pub use duty::DutyPoint;
pub use error::{EngineError, EngineResult};
pub use pipes::{LineState, PipeHydraulics};
pub use result::{Computed, Unavailability};
pub use sizing::{
    AccessorySelection, BestFit, ChosenPipe, PipeEvaluation, RankedCompressor, SizingEngine,
    SizingOutcome, SizingRequest,
};
