use serde::{Deserialize, Serialize};

pub type NodeId = u32;

/// Classification of a map node. Only cities and towns terminate a path
/// search and can host worker lodging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    City,
    Town,
    /// Any other node kind (resource node, connection node, ...).
    Plain,
}

impl NodeType {
    /// Parse a master-table cell. Unrecognised values are treated as
    /// plain nodes; only "City" and "Town" carry meaning for the engine.
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "city" => NodeType::City,
            "town" => NodeType::Town,
            _ => NodeType::Plain,
        }
    }

    /// Whether a path search may stop at a node of this type.
    pub fn is_terminus(self) -> bool {
        matches!(self, NodeType::City | NodeType::Town)
    }
}

/// A map node, merged from the identity/region table and the master table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub region: String,
    pub node_type: NodeType,
    /// Already linked to the network; contributes zero cost to any path.
    pub connected: bool,
    /// CP cost to link this node if it is not already connected.
    pub cp_cost: u32,
    /// Up to two yields producible at this node.
    pub yields: [Option<String>; 2],
}

impl Node {
    /// Case-insensitive match against a normalized (lower-case) yield name.
    pub fn produces(&self, query: &str) -> bool {
        self.yields
            .iter()
            .flatten()
            .any(|label| label.trim().eq_ignore_ascii_case(query))
    }
}

/// Directed edge record from the connection table. Edges are traversed
/// as recorded; symmetry is not assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
}

/// One worker-lodging row. A node may have several; only available rows
/// are eligible for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LodgingOption {
    pub node_id: NodeId,
    pub lodging_name: String,
    pub total_cp_cost: u32,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_from_cell() {
        assert_eq!(NodeType::from_cell("City"), NodeType::City);
        assert_eq!(NodeType::from_cell(" town "), NodeType::Town);
        assert_eq!(NodeType::from_cell("Connection"), NodeType::Plain);
        assert_eq!(NodeType::from_cell(""), NodeType::Plain);
    }

    #[test]
    fn test_terminus_types() {
        assert!(NodeType::City.is_terminus());
        assert!(NodeType::Town.is_terminus());
        assert!(!NodeType::Plain.is_terminus());
    }

    #[test]
    fn test_produces_is_case_insensitive() {
        let node = Node {
            id: 1,
            name: "Farm".to_string(),
            region: "Balenos".to_string(),
            node_type: NodeType::Plain,
            connected: false,
            cp_cost: 2,
            yields: [Some("Wheat".to_string()), None],
        };

        assert!(node.produces("wheat"));
        assert!(!node.produces("rice"));
    }
}
