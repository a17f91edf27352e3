use nodedata::{LodgingOption, NodeId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Lodging name reported for nodes without any available option.
pub const NO_LODGING_NAME: &str = "No Lodging";

/// The cheapest available lodging selected for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLodging {
    pub name: String,
    pub cost: u32,
}

impl ResolvedLodging {
    /// Sentinel for nodes with no available lodging.
    pub fn none() -> Self {
        Self {
            name: NO_LODGING_NAME.to_string(),
            cost: 0,
        }
    }
}

/// Select the cheapest available lodging per node.
///
/// Rows with `available = false` are never considered. On equal cost the
/// first row in input order wins; later rows only replace a strictly
/// cheaper selection. Nodes without any available row get no entry.
pub fn resolve_lodging(rows: &[LodgingOption]) -> FxHashMap<NodeId, ResolvedLodging> {
    let mut best: FxHashMap<NodeId, ResolvedLodging> = FxHashMap::default();

    for row in rows.iter().filter(|r| r.available) {
        match best.get(&row.node_id) {
            Some(current) if current.cost <= row.total_cp_cost => {}
            _ => {
                best.insert(
                    row.node_id,
                    ResolvedLodging {
                        name: row.lodging_name.clone(),
                        cost: row.total_cp_cost,
                    },
                );
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn option(node_id: NodeId, name: &str, cost: u32, available: bool) -> LodgingOption {
        LodgingOption {
            node_id,
            lodging_name: name.to_string(),
            total_cp_cost: cost,
            available,
        }
    }

    #[test]
    fn test_picks_cheapest_available() {
        let rows = vec![
            option(1, "Inn", 5, true),
            option(1, "Attic", 2, true),
            option(1, "Palace", 1, false),
        ];

        let resolved = resolve_lodging(&rows);
        assert_eq!(resolved[&1].name, "Attic");
        assert_eq!(resolved[&1].cost, 2);
    }

    #[test]
    fn test_tie_keeps_first_input_row() {
        let rows = vec![
            option(7, "First", 3, true),
            option(7, "Second", 3, true),
        ];

        let resolved = resolve_lodging(&rows);
        assert_eq!(resolved[&7].name, "First");
    }

    #[test]
    fn test_unavailable_only_yields_no_entry() {
        let rows = vec![option(4, "Closed", 1, false)];
        assert!(resolve_lodging(&rows).is_empty());
    }

    proptest! {
        #[test]
        fn prop_selection_is_an_available_minimum(
            rows in proptest::collection::vec((0u32..6, 0u32..40, any::<bool>()), 0..50)
        ) {
            let options: Vec<LodgingOption> = rows
                .iter()
                .enumerate()
                .map(|(i, &(node_id, cost, available))| {
                    option(node_id, &format!("L{}", i), cost, available)
                })
                .collect();

            let resolved = resolve_lodging(&options);

            for (node_id, lodging) in &resolved {
                let min = options
                    .iter()
                    .filter(|o| o.available && o.node_id == *node_id)
                    .map(|o| o.total_cp_cost)
                    .min();
                prop_assert_eq!(Some(lodging.cost), min);
            }

            for o in &options {
                let has_available = options.iter().any(|x| x.node_id == o.node_id && x.available);
                prop_assert_eq!(resolved.contains_key(&o.node_id), has_available);
            }
        }
    }
}
