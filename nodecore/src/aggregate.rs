use crate::lodging::NO_LODGING_NAME;
use crate::path::{PathFinder, PathResult};
use crate::registry::{EnrichedNode, NodeRegistry};
use nodedata::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One traversed node in a result summary, tagged with the cost it
/// contributed to the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedNode {
    pub id: NodeId,
    pub name: String,
    pub cost: u32,
    /// Already linked to the network, so the cost above is zero.
    pub connected: bool,
}

/// Outcome for one candidate node of a yield query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeResult {
    pub node_id: NodeId,
    pub node_name: String,
    /// Every node traversed, sorted by node ID.
    pub visited: Vec<VisitedNode>,
    pub lodging_name: String,
    pub lodging_cost: u32,
    pub total_cp: u32,
    /// False when the walk never reached a city or town; the row then
    /// reports the explored path with the no-lodging default.
    pub path_complete: bool,
}

/// All minimal-cost outcomes for one yield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldResult {
    pub yield_label: String,
    pub nodes: Vec<NodeResult>,
}

/// Result of a full aggregation run: one entry per resolvable yield, in
/// query order, plus one warning per yield that matched no node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOutcome {
    pub yields: Vec<YieldResult>,
    pub warnings: Vec<String>,
}

/// Normalize a comma-separated yield list into the engine's query form:
/// trimmed, lower-cased, de-duplicated, sorted.
pub fn normalize_yields(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolves yield queries against the node registry.
pub struct YieldAggregator<'a> {
    registry: &'a NodeRegistry,
    finder: PathFinder<'a>,
}

impl<'a> YieldAggregator<'a> {
    pub fn new(registry: &'a NodeRegistry) -> Self {
        Self {
            registry,
            finder: PathFinder::new(registry),
        }
    }

    /// Resolve a normalized, sorted, de-duplicated set of yield queries.
    ///
    /// Queries are processed sequentially in the given order and results
    /// reported in that same order. A query matching zero nodes records
    /// a warning and is omitted from the output.
    pub fn resolve(&self, queries: &[String]) -> ResolveOutcome {
        let mut yields = Vec::new();
        let mut warnings = Vec::new();

        for query in queries {
            let candidates: Vec<&EnrichedNode> =
                self.registry.iter().filter(|n| n.produces(query)).collect();

            if candidates.is_empty() {
                let warning = format!(
                    "Yield '{}' not found in the dataset. Skipping...",
                    capitalize(query)
                );
                log::warn!("{}", warning);
                warnings.push(warning);
                continue;
            }

            log::debug!("Yield '{}': {} candidate nodes", query, candidates.len());

            let rows: Vec<NodeResult> = candidates
                .iter()
                .map(|node| self.process_node(node))
                .collect();

            let Some(minimum) = rows.iter().map(|r| r.total_cp).min() else {
                continue;
            };
            let nodes: Vec<NodeResult> =
                rows.into_iter().filter(|r| r.total_cp == minimum).collect();

            yields.push(YieldResult {
                yield_label: capitalize(query),
                nodes,
            });
        }

        ResolveOutcome { yields, warnings }
    }

    fn process_node(&self, node: &EnrichedNode) -> NodeResult {
        let path = self.finder.find_path(node.id);
        let (lodging_name, lodging_cost) = self.lodging_at_terminus(&path);
        let total_cp = path.cost + lodging_cost;

        NodeResult {
            node_id: node.id,
            node_name: node.name.clone(),
            visited: self.summarize(&path),
            lodging_name,
            lodging_cost,
            total_cp,
            path_complete: path.reached,
        }
    }

    /// Lodging at the last city/town in visitation order. A successful
    /// walk always ends on its terminus, so the reverse scan finds it in
    /// one step; a dead-end walk falls back to the no-lodging default.
    fn lodging_at_terminus(&self, path: &PathResult) -> (String, u32) {
        for &id in path.visited.iter().rev() {
            if let Some(node) = self.registry.get(id)
                && node.is_terminus()
            {
                return (node.lodging.name.clone(), node.lodging.cost);
            }
        }
        (NO_LODGING_NAME.to_string(), 0)
    }

    fn summarize(&self, path: &PathResult) -> Vec<VisitedNode> {
        let mut visited: Vec<VisitedNode> = path
            .visited
            .iter()
            .filter_map(|&id| self.registry.get(id))
            .map(|node| VisitedNode {
                id: node.id,
                name: node.name.clone(),
                cost: node.step_cost(),
                connected: node.connected,
            })
            .collect();
        visited.sort_by_key(|v| v.id);
        visited
    }
}
