use crate::lodging::ResolvedLodging;
use nodedata::{Connection, Node, NodeId, NodeType};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A node left-joined with its resolved lodging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedNode {
    pub id: NodeId,
    pub name: String,
    pub region: String,
    pub node_type: NodeType,
    pub connected: bool,
    pub cp_cost: u32,
    pub yields: [Option<String>; 2],
    pub lodging: ResolvedLodging,
}

impl EnrichedNode {
    /// Cost this node contributes to a path crossing it: zero when the
    /// node is already connected, its intrinsic CP cost otherwise.
    pub fn step_cost(&self) -> u32 {
        if self.connected { 0 } else { self.cp_cost }
    }

    pub fn is_terminus(&self) -> bool {
        self.node_type.is_terminus()
    }

    pub fn produces(&self, query: &str) -> bool {
        self.yields
            .iter()
            .flatten()
            .any(|label| label.trim().eq_ignore_ascii_case(query))
    }
}

/// The canonical node table: every known node enriched with lodging,
/// plus a per-node index of outgoing connections in table row order.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: FxHashMap<NodeId, EnrichedNode>,
    edges: FxHashMap<NodeId, Vec<NodeId>>,
    order: Vec<NodeId>,
}

impl NodeRegistry {
    pub fn build(
        nodes: Vec<Node>,
        connections: &[Connection],
        lodging: &FxHashMap<NodeId, ResolvedLodging>,
    ) -> Self {
        let mut enriched = FxHashMap::default();
        let mut order = Vec::with_capacity(nodes.len());

        for node in nodes {
            let resolved = lodging
                .get(&node.id)
                .cloned()
                .unwrap_or_else(ResolvedLodging::none);
            order.push(node.id);
            enriched.insert(
                node.id,
                EnrichedNode {
                    id: node.id,
                    name: node.name,
                    region: node.region,
                    node_type: node.node_type,
                    connected: node.connected,
                    cp_cost: node.cp_cost,
                    yields: node.yields,
                    lodging: resolved,
                },
            );
        }

        let mut edges: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
        for conn in connections {
            edges.entry(conn.from).or_default().push(conn.to);
        }

        log::debug!(
            "Built node registry with {} nodes, {} edge lists",
            enriched.len(),
            edges.len()
        );

        Self {
            nodes: enriched,
            edges,
            order,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&EnrichedNode> {
        self.nodes.get(&id)
    }

    /// Outgoing connections of a node, in connection-table row order.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate nodes in identity-table row order.
    pub fn iter(&self) -> impl Iterator<Item = &EnrichedNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
