//! fl-props: refrigerant property lookups for frigline.
//!
//! Provides:
//! - Refrigerant identifiers (ASHRAE designations with CoolProp mappings)
//! - Thermodynamic state specifications (saturated or single-phase)
//! - The `PropertyProvider` trait consumed by the sizing engine
//! - CoolProp backend for real refrigerant properties
//! - A fixed-table provider for tests and offline use
//!
//! # Architecture
//!
//! The sizing engine never talks to a property backend directly; it goes
//! through the `PropertyProvider` trait, so the CoolProp dependency stays
//! isolated in this crate and tests can substitute fixed property values.
//!
//! # Example
//!
//! ```no_run
//! use fl_props::{CoolPropProvider, PropertyProvider, Refrigerant, StateSpec};
//! use fl_core::units::celsius;
//!
//! let provider = CoolPropProvider::new();
//! let state = StateSpec::saturated_vapor(celsius(0.0));
//! let rho = provider.density(Refrigerant::R134a, state).unwrap();
//! println!("Density: {} kg/m³", rho.value);
//! ```

pub mod coolprop;
pub mod error;
pub mod provider;
pub mod refrigerant;
pub mod state;
pub mod table;

// Re-exports for ergonomics
pub use coolprop::CoolPropProvider;
pub use error::{PropertyError, PropertyResult};
pub use provider::PropertyProvider;
pub use refrigerant::{Refrigerant, RefrigerantFamily};
pub use state::{SaturationQuality, SpecEnthalpy, SpecHeatCapacity, StateSpec};
pub use table::{PropertyTable, TableProvider};
