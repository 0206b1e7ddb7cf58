//! Sizing orchestrator.
//!
//! Single pass over the catalog, no state between requests. Catalog
//! entries are evaluated in parallel and collected in catalog order, so
//! the chosen best fit never depends on completion order.

use crate::capacity::{self, CompressorPerformance, Suitability};
use crate::config::SizingConfig;
use crate::duty::DutyPoint;
use crate::envelope;
use crate::error::{EngineError, EngineResult};
use crate::pipes::{self, LineState, PipeHydraulics};
use crate::result::{Computed, Unavailability};
use fl_catalog::{
    AccessoryCatalog, CatalogStore, ComponentCategory, Compressor, LineType, Pipe,
};
use fl_core::ids::{CompressorId, PipeId};
use fl_core::numeric::{Tolerances, nearly_equal};
use fl_core::units::{Power, watt};
use fl_props::PropertyProvider;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Caller-recorded accessory choice, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorySelection {
    pub line_type: LineType,
    pub category: ComponentCategory,
    pub parallel_count: u32,
}

/// One sizing request.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingRequest {
    pub duty: DutyPoint,
    /// Parallel circuits; required capacity is divided evenly across them
    /// before sizing.
    pub circuits: u32,
    pub accessories: Vec<AccessorySelection>,
}

/// Per-compressor entry of the ranked result list.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCompressor {
    pub id: CompressorId,
    pub name: String,
    pub performance: Computed<CompressorPerformance>,
    pub suitability: Suitability,
}

/// A pipe the orchestrator picked for a line, with its hydraulics.
#[derive(Debug, Clone, PartialEq)]
pub struct ChosenPipe {
    pub id: PipeId,
    pub name: String,
    pub hydraulics: PipeHydraulics,
}

/// The best-fit compressor and its line selections.
#[derive(Debug, Clone, PartialEq)]
pub struct BestFit {
    pub id: CompressorId,
    pub name: String,
    pub performance: CompressorPerformance,
    /// Messages of envelope sub-regions containing the duty point
    pub advisories: Vec<String>,
    pub suction_pipe: Option<ChosenPipe>,
    pub discharge_pipe: Option<ChosenPipe>,
}

/// Per-pipe entry of the full line tables.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeEvaluation {
    pub id: PipeId,
    pub name: String,
    pub line_type: LineType,
    pub hydraulics: Computed<PipeHydraulics>,
}

/// Result of one sizing request. Partial by design: bad catalog entries
/// degrade to per-entry unavailability, never fail the request.
#[derive(Debug, Clone)]
pub struct SizingOutcome {
    /// Required capacity after division across circuits
    pub capacity_per_circuit: Power,
    pub best_fit: Option<BestFit>,
    /// Refrigerant-compatible catalog compressors in catalog order.
    /// Empty when no compressor's compatibility set covers the duty's
    /// refrigerant.
    pub ranked: Vec<RankedCompressor>,
    /// Every suction pipe in the catalog, evaluated at the duty point
    pub suction_pipes: Vec<PipeEvaluation>,
    /// Every discharge pipe in the catalog, evaluated at the duty point
    pub discharge_pipes: Vec<PipeEvaluation>,
    /// Passive accessory listings, passed through from the catalog
    pub accessories: AccessoryCatalog,
    /// Caller-recorded accessory choices, passed through from the request
    pub requested_accessories: Vec<AccessorySelection>,
}

/// The sizing engine. Holds handles to its collaborators; owns no state
/// of its own beyond configuration.
pub struct SizingEngine<'a> {
    catalog: &'a dyn CatalogStore,
    provider: &'a dyn PropertyProvider,
    config: SizingConfig,
}

impl<'a> SizingEngine<'a> {
    pub fn new(
        catalog: &'a dyn CatalogStore,
        provider: &'a dyn PropertyProvider,
        config: SizingConfig,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            provider,
            config,
        })
    }

    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    /// Run one sizing request.
    pub fn size(&self, request: &SizingRequest) -> EngineResult<SizingOutcome> {
        request.duty.validate()?;
        if request.circuits == 0 {
            return Err(EngineError::Config {
                what: "circuit count must be at least 1".to_string(),
            });
        }

        let capacity_per_circuit = watt(request.duty.capacity.value / request.circuits as f64);
        let duty = DutyPoint {
            capacity: capacity_per_circuit,
            ..request.duty
        };
        debug!(
            circuits = request.circuits,
            capacity_per_circuit_w = capacity_per_circuit.value,
            refrigerant = duty.refrigerant.designation(),
            "sizing request"
        );

        // Incompatible compressors are not ranked at all; an operator
        // browsing for an R290 circuit never sees the R134a-only units.
        let compatible: Vec<&Compressor> = self
            .catalog
            .compressors()
            .iter()
            .filter(|c| c.is_compatible(duty.refrigerant))
            .collect();
        let ranked: Vec<RankedCompressor> = compatible
            .par_iter()
            .map(|c| self.evaluate_compressor(c, &duty))
            .collect();

        let best = select_best(&ranked, capacity_per_circuit);
        let (best_fit, suction_pipes, discharge_pipes) = match best {
            Some((index, performance)) => {
                let entry = &ranked[index];
                let compressor = compatible[index];
                debug!(
                    compressor = %entry.name,
                    capacity_w = performance.cooling_capacity.value,
                    "best-fit compressor"
                );

                let suction_state = pipes::suction_state(self.provider, &duty);
                let discharge_state =
                    pipes::discharge_state(self.provider, &duty, performance.discharge_temperature);

                let best_fit = self.assemble_best_fit(
                    compressor,
                    &duty,
                    performance,
                    &suction_state,
                    &discharge_state,
                );
                let suction_pipes =
                    self.pipe_table(LineType::Suction, &duty, &performance, &suction_state);
                let discharge_pipes =
                    self.pipe_table(LineType::Discharge, &duty, &performance, &discharge_state);
                (Some(best_fit), suction_pipes, discharge_pipes)
            }
            None => (None, Vec::new(), Vec::new()),
        };

        Ok(SizingOutcome {
            capacity_per_circuit,
            best_fit,
            ranked,
            suction_pipes,
            discharge_pipes,
            accessories: self.catalog.accessories().clone(),
            requested_accessories: request.accessories.clone(),
        })
    }

    fn evaluate_compressor(&self, compressor: &Compressor, duty: &DutyPoint) -> RankedCompressor {
        let id = compressor.id;
        let name = compressor.name.clone();

        let containment = envelope::contains(&compressor.envelope, duty.t_evap, duty.t_cond);
        if let Computed::Unavailable(reason) = containment {
            return RankedCompressor {
                id,
                name,
                performance: Computed::Unavailable(reason.clone()),
                suitability: Suitability::Unavailable(reason),
            };
        }

        let performance = capacity::performance(compressor, self.provider, duty);
        let suitability = match &performance {
            Computed::Unavailable(reason) => Suitability::Unavailable(reason.clone()),
            Computed::Ready(perf) => {
                if containment == Computed::Ready(false) {
                    Suitability::OutsideEnvelope
                } else if perf.cooling_capacity.value >= duty.capacity.value {
                    Suitability::Suitable {
                        capacity: perf.cooling_capacity,
                    }
                } else {
                    Suitability::Undersized {
                        capacity: perf.cooling_capacity,
                    }
                }
            }
        };
        RankedCompressor {
            id,
            name,
            performance,
            suitability,
        }
    }

    fn assemble_best_fit(
        &self,
        compressor: &Compressor,
        duty: &DutyPoint,
        performance: CompressorPerformance,
        suction_state: &Computed<LineState>,
        discharge_state: &Computed<LineState>,
    ) -> BestFit {
        let advisories = envelope::advisories(compressor, duty.t_evap, duty.t_cond);
        let suction_pipe = self.choose_pipe(
            LineType::Suction,
            compressor.suction_conn,
            duty,
            &performance,
            suction_state,
        );
        let discharge_pipe = self.choose_pipe(
            LineType::Discharge,
            compressor.discharge_conn,
            duty,
            &performance,
            discharge_state,
        );
        BestFit {
            id: compressor.id,
            name: compressor.name.clone(),
            performance,
            advisories,
            suction_pipe,
            discharge_pipe,
        }
    }

    /// Pick the best pipe for one line: pre-filter the catalog to
    /// connection-compatible outer diameters, then rank by velocity
    /// distance to the line's target.
    fn choose_pipe(
        &self,
        line_type: LineType,
        connection: fl_core::units::Length,
        duty: &DutyPoint,
        performance: &CompressorPerformance,
        state: &Computed<LineState>,
    ) -> Option<ChosenPipe> {
        let state = match state {
            Computed::Ready(s) => s,
            Computed::Unavailable(reason) => {
                warn!(line = %line_type, %reason, "line state unavailable, no pipe chosen");
                return None;
            }
        };

        let allowed = pipes::allowed_connection_sizes(connection, &self.config.standard_sizes);
        if allowed.is_empty() {
            warn!(
                line = %line_type,
                connection_m = connection.value,
                "connection size not in the standard table, no pipe chosen"
            );
            return None;
        }

        let tol = Tolerances::default();
        let candidates: Vec<&Pipe> = self
            .catalog
            .pipes(Some(line_type))
            .into_iter()
            .filter(|p| {
                allowed
                    .iter()
                    .any(|s| nearly_equal(s.value, p.outer_diameter.value, tol))
            })
            .collect();

        let (pipe, _velocity) = pipes::best_pipe(
            &candidates,
            line_type,
            performance.mass_flow,
            state.density,
            self.config.target_velocity(line_type),
        )?;

        match pipes::evaluate_pipe(
            pipe,
            self.provider,
            duty.refrigerant,
            performance.mass_flow,
            state,
            duty.run_length,
            &self.config,
        ) {
            Computed::Ready(hydraulics) => Some(ChosenPipe {
                id: pipe.id,
                name: pipe.name.clone(),
                hydraulics,
            }),
            Computed::Unavailable(reason) => {
                warn!(pipe = %pipe.name, %reason, "chosen pipe failed evaluation");
                None
            }
        }
    }

    /// Evaluate every catalog pipe of a line type, not just the
    /// connection-compatible ones, so callers can browse all options.
    fn pipe_table(
        &self,
        line_type: LineType,
        duty: &DutyPoint,
        performance: &CompressorPerformance,
        state: &Computed<LineState>,
    ) -> Vec<PipeEvaluation> {
        self.catalog
            .pipes(Some(line_type))
            .into_par_iter()
            .map(|pipe| {
                let hydraulics = match state {
                    Computed::Ready(s) => pipes::evaluate_pipe(
                        pipe,
                        self.provider,
                        duty.refrigerant,
                        performance.mass_flow,
                        s,
                        duty.run_length,
                        &self.config,
                    ),
                    Computed::Unavailable(reason) => Computed::Unavailable(reason.clone()),
                };
                PipeEvaluation {
                    id: pipe.id,
                    name: pipe.name.clone(),
                    line_type,
                    hydraulics,
                }
            })
            .collect()
    }
}

/// Ranked entry minimizing `|required − computed|` over entries that
/// produced a value. First minimal wins, so ties resolve by catalog
/// order.
fn select_best(
    ranked: &[RankedCompressor],
    required: Power,
) -> Option<(usize, CompressorPerformance)> {
    let mut best: Option<(usize, CompressorPerformance, f64)> = None;
    for (index, entry) in ranked.iter().enumerate() {
        if let Computed::Ready(perf) = &entry.performance {
            let distance = (required.value - perf.cooling_capacity.value).abs();
            if best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((index, *perf, distance));
            }
        }
    }
    best.map(|(index, perf, _)| (index, perf))
}
