//! fl-catalog: component records and stores for frigline.
//!
//! Provides:
//! - Runtime records for compressors, pipes, and passive accessories
//! - A serde_yaml file schema (plain numbers in documented units) compiled
//!   into runtime records carrying uom quantities
//! - The `CatalogStore` trait with an in-memory implementation
//! - The `SelectionStore` trait for "last chosen component per category"
//!   bookkeeping, written by callers only — the sizing engine never reads it
//!
//! Catalog administration (create/edit) is out of scope: records are
//! validated when a catalog file is compiled and read-only afterwards.

pub mod accessory;
pub mod compressor;
pub mod error;
pub mod pipe;
pub mod schema;
pub mod selection;
pub mod store;

pub use accessory::{
    AccessoryCatalog, CheckValve, OilReceiver, OilSeparator, OilSeparatorReceiver, Orientation,
    Receiver, SightGlass, SuctionAccumulator,
};
pub use compressor::{Compressor, ConstraintRegion, Envelope, EnvelopePoint};
pub use error::{CatalogError, CatalogResult};
pub use pipe::{LineType, Pipe};
pub use schema::CatalogFile;
pub use selection::{
    ComponentCategory, InMemorySelectionStore, JsonFileSelectionStore, SelectionStore,
};
pub use store::{CatalogStore, InMemoryCatalog};
