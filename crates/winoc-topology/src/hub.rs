//! Radio hub assignment.
//!
//! Which node talks to which hub is configuration, not geometry: the table
//! may be sparse and need not follow the cluster partition. It is built once
//! and never mutated afterwards.

use std::collections::BTreeMap;

use crate::error::{fatal, Result, TopologyError};
use crate::{HubId, NodeId};

/// Immutable, partial mapping from node to hub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubTable {
    hub_for_node: BTreeMap<NodeId, HubId>,
}

impl HubTable {
    /// Table with no hubs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(node, hub)` pairs.
    ///
    /// A node may appear more than once only with the same hub.
    pub fn from_assignments<I>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, HubId)>,
    {
        let mut hub_for_node = BTreeMap::new();
        for (node, hub) in assignments {
            match hub_for_node.insert(node, hub) {
                Some(first) if first != hub => {
                    return Err(TopologyError::ConflictingHubAssignment {
                        node,
                        first,
                        second: hub,
                    });
                }
                _ => {}
            }
        }
        Ok(Self { hub_for_node })
    }

    /// Build from per-hub lists of attached nodes.
    pub fn from_hubs<'a, I>(hubs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (HubId, &'a [NodeId])>,
    {
        Self::from_assignments(
            hubs.into_iter()
                .flat_map(|(hub, nodes)| nodes.iter().map(move |&node| (node, hub))),
        )
    }

    /// Number of nodes with a hub.
    pub fn len(&self) -> usize {
        self.hub_for_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hub_for_node.is_empty()
    }

    /// Whether the node has an entry.
    #[inline]
    pub fn has_hub(&self, node: NodeId) -> bool {
        self.hub_for_node.contains_key(&node)
    }

    /// The node's hub, if any.
    #[inline]
    pub fn hub(&self, node: NodeId) -> Option<HubId> {
        self.hub_for_node.get(&node).copied()
    }

    pub fn try_hub_of(&self, node: NodeId) -> Result<HubId> {
        self.hub(node).ok_or(TopologyError::NoHub(node))
    }

    /// The node's hub.
    ///
    /// # Panics
    ///
    /// If the node is not connected to any hub. Guard with [`has_hub`](Self::has_hub)
    /// when that is not already known.
    #[track_caller]
    pub fn hub_of(&self, node: NodeId) -> HubId {
        match self.try_hub_of(node) {
            Ok(hub) => hub,
            Err(e) => fatal(e),
        }
    }

    pub fn try_share_hub(&self, a: NodeId, b: NodeId) -> Result<bool> {
        Ok(self.try_hub_of(a)? == self.try_hub_of(b)?)
    }

    /// Whether both nodes are served by the same hub.
    ///
    /// # Panics
    ///
    /// If either node is not connected to any hub.
    #[track_caller]
    pub fn share_hub(&self, a: NodeId, b: NodeId) -> bool {
        match self.try_share_hub(a, b) {
            Ok(shared) => shared,
            Err(e) => fatal(e),
        }
    }

    /// Nodes attached to a hub, in id order.
    pub fn nodes_of_hub(&self, hub: HubId) -> impl Iterator<Item = NodeId> + '_ {
        self.hub_for_node
            .iter()
            .filter(move |&(_, &h)| h == hub)
            .map(|(&node, _)| node)
    }

    /// Distinct hubs, in id order.
    pub fn hubs(&self) -> Vec<HubId> {
        let mut hubs: Vec<_> = self.hub_for_node.values().copied().collect();
        hubs.sort_unstable();
        hubs.dedup();
        hubs
    }

    /// All `(node, hub)` entries, in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, HubId)> + '_ {
        self.hub_for_node.iter().map(|(&node, &hub)| (node, hub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> HubTable {
        let hub0 = [NodeId(0), NodeId(1), NodeId(8)];
        let hub1 = [NodeId(4), NodeId(5)];
        HubTable::from_hubs([(HubId(0), &hub0[..]), (HubId(1), &hub1[..])]).unwrap()
    }

    #[test]
    fn has_hub_only_for_listed_nodes() {
        let t = table();
        assert!(t.has_hub(NodeId(0)));
        assert!(t.has_hub(NodeId(5)));
        assert!(!t.has_hub(NodeId(2)));
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn hub_lookup() {
        let t = table();
        assert_eq!(t.hub_of(NodeId(8)), HubId(0));
        assert_eq!(t.hub_of(NodeId(4)), HubId(1));
        assert_eq!(t.hub(NodeId(3)), None);
        assert_eq!(t.try_hub_of(NodeId(3)), Err(TopologyError::NoHub(NodeId(3))));
    }

    #[test]
    fn share_hub_compares_entries() {
        let t = table();
        assert!(t.share_hub(NodeId(0), NodeId(8)));
        assert!(t.share_hub(NodeId(8), NodeId(8)));
        assert!(!t.share_hub(NodeId(0), NodeId(4)));
    }

    #[test]
    fn try_share_hub_reports_missing_node() {
        let t = table();
        assert_eq!(
            t.try_share_hub(NodeId(0), NodeId(9)),
            Err(TopologyError::NoHub(NodeId(9)))
        );
    }

    #[test]
    #[should_panic(expected = "not connected to any hub")]
    fn hub_of_missing_node_is_fatal() {
        table().hub_of(NodeId(63));
    }

    #[test]
    #[should_panic(expected = "not connected to any hub")]
    fn share_hub_with_missing_node_is_fatal() {
        table().share_hub(NodeId(2), NodeId(0));
    }

    #[test]
    fn conflicting_assignment_rejected() {
        let res = HubTable::from_assignments([
            (NodeId(3), HubId(0)),
            (NodeId(3), HubId(2)),
        ]);
        assert_eq!(
            res,
            Err(TopologyError::ConflictingHubAssignment {
                node: NodeId(3),
                first: HubId(0),
                second: HubId(2),
            })
        );
    }

    #[test]
    fn repeated_identical_assignment_allowed() {
        let t = HubTable::from_assignments([(NodeId(3), HubId(1)), (NodeId(3), HubId(1))]).unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn reverse_lookup() {
        let t = table();
        let nodes: Vec<_> = t.nodes_of_hub(HubId(0)).collect();
        assert_eq!(nodes, vec![NodeId(0), NodeId(1), NodeId(8)]);
        assert_eq!(t.nodes_of_hub(HubId(9)).count(), 0);
        assert_eq!(t.hubs(), vec![HubId(0), HubId(1)]);
    }

    #[test]
    fn empty_table() {
        let t = HubTable::new();
        assert!(t.is_empty());
        assert!(!t.has_hub(NodeId(0)));
        assert!(t.hubs().is_empty());
    }
}
