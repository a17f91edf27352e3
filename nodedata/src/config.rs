use std::path::{Path, PathBuf};

pub const NODES_FILE: &str = "nodes.csv";
pub const NODE_MASTER_FILE: &str = "node_master.csv";
pub const CONNECTIONS_FILE: &str = "connections.csv";
pub const LODGING_FILE: &str = "lodging.csv";

/// Locations of the four dataset tables.
///
/// Passed by value into the loader so independent runs over different
/// datasets never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub nodes: PathBuf,
    pub node_master: PathBuf,
    pub connections: PathBuf,
    pub lodging: PathBuf,
}

impl DatasetPaths {
    /// Conventional layout: all four tables under one directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            nodes: dir.join(NODES_FILE),
            node_master: dir.join(NODE_MASTER_FILE),
            connections: dir.join(CONNECTIONS_FILE),
            lodging: dir.join(LODGING_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_layout() {
        let paths = DatasetPaths::in_dir(Path::new("/data"));
        assert_eq!(paths.nodes, PathBuf::from("/data/nodes.csv"));
        assert_eq!(paths.lodging, PathBuf::from("/data/lodging.csv"));
    }
}
