//! Node path cost resolution engine.
//!
//! Given the validated dataset tables, this crate computes the cheapest
//! way to connect each yield-producing node back to a city or town,
//! combined with the cheapest available worker lodging there. The
//! pipeline runs in four stages:
//!
//! 1. [`resolve_lodging`] picks the cheapest available lodging per node;
//! 2. [`NodeRegistry::build`] left-joins every node with its lodging;
//! 3. [`PathFinder`] walks the connection graph depth-first from a
//!    producing node to the nearest terminus;
//! 4. [`YieldAggregator`] runs the finder per candidate node and keeps
//!    the minimal-total-CP results per yield.
//!
//! Everything is a pure, single-threaded computation over immutable
//! inputs; the engine holds no state between runs.

pub mod aggregate;
pub mod lodging;
pub mod path;
pub mod registry;

pub use aggregate::{NodeResult, ResolveOutcome, VisitedNode, YieldAggregator, YieldResult};
pub use lodging::{NO_LODGING_NAME, ResolvedLodging, resolve_lodging};
pub use path::{PathFinder, PathResult};
pub use registry::{EnrichedNode, NodeRegistry};
