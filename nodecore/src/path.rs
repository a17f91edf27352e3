use crate::registry::NodeRegistry;
use nodedata::NodeId;
use serde::{Deserialize, Serialize};

/// Outcome of one path search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Nodes in visitation order, starting node first, no duplicates.
    pub visited: Vec<NodeId>,
    /// Accumulated connection cost over the visited nodes. Lodging is
    /// not included; the aggregator adds it at the terminus.
    pub cost: u32,
    /// Whether the walk ended on a city or town.
    pub reached: bool,
}

/// Depth-first walk from a node to the nearest city or town.
///
/// This is deliberately not a shortest-path search: the walk follows
/// outgoing connections in table row order and commits to the first
/// branch that reaches a terminus, so the result depends on how the
/// connection rows are ordered. Cycles are prevented only within a
/// branch; each recursive call works on its own copy of the visit
/// sequence, and sibling branches may revisit the same node.
pub struct PathFinder<'a> {
    registry: &'a NodeRegistry,
}

impl<'a> PathFinder<'a> {
    pub fn new(registry: &'a NodeRegistry) -> Self {
        Self { registry }
    }

    pub fn find_path(&self, start: NodeId) -> PathResult {
        self.walk(start, Vec::new(), 0)
    }

    fn walk(&self, id: NodeId, mut visited: Vec<NodeId>, mut cost: u32) -> PathResult {
        visited.push(id);

        // The registry is built from validated tables, so every reachable
        // ID resolves; an unknown start simply yields an unreached result.
        let Some(node) = self.registry.get(id) else {
            return PathResult {
                visited,
                cost,
                reached: false,
            };
        };

        cost += node.step_cost();

        if node.is_terminus() {
            return PathResult {
                visited,
                cost,
                reached: true,
            };
        }

        for &next in self.registry.neighbors(id) {
            if visited.contains(&next) {
                continue;
            }
            let result = self.walk(next, visited.clone(), cost);
            if result.reached {
                return result;
            }
        }

        // Dead end: every neighbor visited or unreachable. Hand back this
        // branch's own sequence and cost; callers try their next sibling.
        PathResult {
            visited,
            cost,
            reached: false,
        }
    }
}
