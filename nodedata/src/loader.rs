use crate::config::DatasetPaths;
use crate::records::{Connection, LodgingOption, Node, NodeId, NodeType};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}: CSV error: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("{} line {line}: missing column '{column}'", .path.display())]
    MissingColumn {
        path: PathBuf,
        line: u64,
        column: &'static str,
    },
    #[error("{} line {line}: invalid value '{value}' in column '{column}'", .path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("{}: duplicate node ID {id}", .path.display())]
    DuplicateNode { path: PathBuf, id: NodeId },
    #[error("node {0} has an identity row but no master row")]
    MissingMaster(NodeId),
    #[error("node {0} has a master row but no identity row")]
    MissingIdentity(NodeId),
    #[error("{table} table references unknown node ID {id}")]
    UnknownNode { table: &'static str, id: NodeId },
}

/// The four tables, loaded and cross-validated.
///
/// Identity and master rows are already merged into [`Node`]; connection
/// and lodging rows are guaranteed to reference known node IDs.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    pub lodging: Vec<LodgingOption>,
}

impl Dataset {
    pub fn load(paths: &DatasetPaths) -> Result<Self, DataError> {
        let identities = load_identities(&paths.nodes)?;
        let masters = load_masters(&paths.node_master)?;
        let connections = load_connections(&paths.connections)?;
        let lodging = load_lodging(&paths.lodging)?;

        let nodes = merge_nodes(identities, masters, &paths.nodes, &paths.node_master)?;

        let known: HashSet<NodeId> = nodes.iter().map(|n| n.id).collect();
        for conn in &connections {
            for id in [conn.from, conn.to] {
                if !known.contains(&id) {
                    return Err(DataError::UnknownNode {
                        table: "connections",
                        id,
                    });
                }
            }
        }
        for row in &lodging {
            if !known.contains(&row.node_id) {
                return Err(DataError::UnknownNode {
                    table: "lodging",
                    id: row.node_id,
                });
            }
        }

        log::info!(
            "Loaded dataset: {} nodes, {} connections, {} lodging rows",
            nodes.len(),
            connections.len(),
            lodging.len()
        );

        Ok(Self {
            nodes,
            connections,
            lodging,
        })
    }
}

struct IdentityRow {
    id: NodeId,
    name: String,
    region: String,
}

struct MasterRow {
    id: NodeId,
    node_type: NodeType,
    connected: bool,
    cp_cost: u32,
    yields: [Option<String>; 2],
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, DataError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        })
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn get_field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    column: &'static str,
    path: &Path,
) -> Result<&'r str, DataError> {
    record.get(index).ok_or_else(|| DataError::MissingColumn {
        path: path.to_path_buf(),
        line: record_line(record),
        column,
    })
}

fn parse_id(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    path: &Path,
) -> Result<NodeId, DataError> {
    let cell = get_field(record, index, column, path)?;
    cell.parse().map_err(|_| DataError::InvalidValue {
        path: path.to_path_buf(),
        line: record_line(record),
        column,
        value: cell.to_string(),
    })
}

fn parse_cost(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    path: &Path,
) -> Result<u32, DataError> {
    parse_id(record, index, column, path)
}

/// Booleans are accepted as true/false/1/0, case-insensitive.
fn parse_flag(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    path: &Path,
) -> Result<bool, DataError> {
    let cell = get_field(record, index, column, path)?;
    match cell.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(DataError::InvalidValue {
            path: path.to_path_buf(),
            line: record_line(record),
            column,
            value: cell.to_string(),
        }),
    }
}

fn optional_cell(record: &csv::StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Load the identity/region table.
///
/// Format: node_id,node_name,region
fn load_identities(path: &Path) -> Result<Vec<IdentityRow>, DataError> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(IdentityRow {
            id: parse_id(&record, 0, "node_id", path)?,
            name: get_field(&record, 1, "node_name", path)?.to_string(),
            region: get_field(&record, 2, "region", path)?.to_string(),
        });
    }

    Ok(rows)
}

/// Load the master table.
///
/// Format: node_id,node_type,connected,cp_cost,yield_1,yield_2
fn load_masters(path: &Path) -> Result<Vec<MasterRow>, DataError> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(MasterRow {
            id: parse_id(&record, 0, "node_id", path)?,
            node_type: NodeType::from_cell(get_field(&record, 1, "node_type", path)?),
            connected: parse_flag(&record, 2, "connected", path)?,
            cp_cost: parse_cost(&record, 3, "cp_cost", path)?,
            yields: [optional_cell(&record, 4), optional_cell(&record, 5)],
        });
    }

    Ok(rows)
}

/// Load the connection table.
///
/// Format: node_id,connected_node_id (one row per directed edge)
fn load_connections(path: &Path) -> Result<Vec<Connection>, DataError> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(Connection {
            from: parse_id(&record, 0, "node_id", path)?,
            to: parse_id(&record, 1, "connected_node_id", path)?,
        });
    }

    Ok(rows)
}

/// Load the lodging table.
///
/// Format: node_id,lodging_name,total_cp_cost,available
fn load_lodging(path: &Path) -> Result<Vec<LodgingOption>, DataError> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(LodgingOption {
            node_id: parse_id(&record, 0, "node_id", path)?,
            lodging_name: get_field(&record, 1, "lodging_name", path)?.to_string(),
            total_cp_cost: parse_cost(&record, 2, "total_cp_cost", path)?,
            available: parse_flag(&record, 3, "available", path)?,
        });
    }

    Ok(rows)
}

/// Merge identity and master rows into nodes, preserving identity-table
/// row order. Every identity row needs exactly one master row and vice
/// versa.
fn merge_nodes(
    identities: Vec<IdentityRow>,
    masters: Vec<MasterRow>,
    identity_path: &Path,
    master_path: &Path,
) -> Result<Vec<Node>, DataError> {
    let mut by_id: HashMap<NodeId, MasterRow> = HashMap::new();
    for row in masters {
        let id = row.id;
        if by_id.insert(id, row).is_some() {
            return Err(DataError::DuplicateNode {
                path: master_path.to_path_buf(),
                id,
            });
        }
    }

    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut nodes = Vec::with_capacity(identities.len());
    for identity in identities {
        if !seen.insert(identity.id) {
            return Err(DataError::DuplicateNode {
                path: identity_path.to_path_buf(),
                id: identity.id,
            });
        }
        let master = by_id
            .remove(&identity.id)
            .ok_or(DataError::MissingMaster(identity.id))?;
        nodes.push(Node {
            id: identity.id,
            name: identity.name,
            region: identity.region,
            node_type: master.node_type,
            connected: master.connected,
            cp_cost: master.cp_cost,
            yields: master.yields,
        });
    }

    if let Some(&id) = by_id.keys().next() {
        return Err(DataError::MissingIdentity(id));
    }

    Ok(nodes)
}
