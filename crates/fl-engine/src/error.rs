//! Engine errors.
//!
//! `EngineError` covers infrastructure misuse and numerical breakdown only.
//! Expected "no result" outcomes (a refrigerant the provider cannot handle,
//! a duty point outside an envelope) travel as `Computed::Unavailable`
//! values, never as errors; see the `result` module.

use fl_catalog::CatalogError;
use fl_props::PropertyError;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {what}")]
    Config { what: String },

    #[error("Non-physical quantity: {what}")]
    NonPhysical { what: &'static str },

    #[error(
        "Friction factor iteration did not converge after {iterations} iterations (Re = {reynolds})"
    )]
    ConvergenceFailed { iterations: usize, reynolds: f64 },

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
