//! Typed ingestion of the node-network dataset.
//!
//! The dataset is four CSV tables: node identity/region, node master
//! (type, connected flag, CP cost, yields), directed connections, and
//! worker lodging options. Loading validates referential integrity and
//! merges identity and master rows into one [`Node`] entity, so the
//! engine downstream can assume complete, well-formed tables.

pub mod config;
pub mod loader;
pub mod records;

pub use config::DatasetPaths;
pub use loader::{DataError, Dataset};
pub use records::{Connection, LodgingOption, Node, NodeId, NodeType};
