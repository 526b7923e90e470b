//! Immutable topology snapshot.
//!
//! Bundles the mesh, the cluster partition and the hub table so routing code
//! has one read-only value to consult. There is no interior mutability: a
//! `Topology` can be shared across threads by reference or `Arc`.

use crate::attachment::{closest_attachment_point, AttachmentPoints, AttachmentRouter};
use crate::distance::{self, PathCost};
use crate::error::{fatal, Result, TopologyError};
use crate::{
    ClusterDims, ClusterIndex, Coord, HubId, HubTable, Mesh, Nodes, NodeId, Point, TopologyConfig,
};

/// Validated mesh geometry plus radio hub assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    mesh: Mesh,
    cluster: ClusterDims,
    virtual_channels: u32,
    hubs: HubTable,
}

impl Topology {
    /// Assemble a topology from already validated parts.
    ///
    /// Every hub entry must name a node inside the mesh.
    pub fn new(mesh: Mesh, cluster: ClusterDims, hubs: HubTable) -> Result<Self> {
        cluster.validate()?;
        for (node, _) in hubs.iter() {
            mesh.try_id_to_coord(node)?;
        }

        tracing::debug!(
            width = mesh.width(),
            height = mesh.height(),
            cluster_width = cluster.width,
            cluster_height = cluster.height,
            hub_nodes = hubs.len(),
            "topology built"
        );

        Ok(Self {
            mesh,
            cluster,
            virtual_channels: 1,
            hubs,
        })
    }

    /// Validate a configuration into a snapshot.
    pub fn from_config(config: &TopologyConfig) -> Result<Self> {
        if config.virtual_channels == 0 {
            return Err(TopologyError::ZeroVirtualChannels);
        }
        let mesh = Mesh::new(config.mesh)?;
        let hubs = HubTable::from_hubs(
            config
                .hubs
                .iter()
                .map(|hub| (hub.id, hub.attached_nodes.as_slice())),
        )?;

        let mut topology = Self::new(mesh, config.cluster, hubs)?;
        topology.virtual_channels = config.virtual_channels;
        Ok(topology)
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn cluster_dims(&self) -> ClusterDims {
        self.cluster
    }

    #[inline]
    pub fn hub_table(&self) -> &HubTable {
        &self.hubs
    }

    #[inline]
    pub fn virtual_channels(&self) -> u32 {
        self.virtual_channels
    }

    #[inline]
    pub fn node_count(&self) -> u32 {
        self.mesh.node_count()
    }

    pub fn nodes(&self) -> Nodes {
        self.mesh.nodes()
    }

    // Coordinate mapper

    #[track_caller]
    pub fn id_to_coord(&self, id: NodeId) -> Coord {
        self.mesh.id_to_coord(id)
    }

    #[track_caller]
    pub fn coord_to_id(&self, coord: Coord) -> NodeId {
        self.mesh.coord_to_id(coord)
    }

    pub fn try_id_to_coord(&self, id: NodeId) -> Result<Coord> {
        self.mesh.try_id_to_coord(id)
    }

    pub fn try_coord_to_id(&self, coord: Coord) -> Result<NodeId> {
        self.mesh.try_coord_to_id(coord)
    }

    // Cluster/hub resolver

    #[track_caller]
    pub fn cluster_of(&self, id: NodeId) -> ClusterIndex {
        self.cluster.cluster_of(self.id_to_coord(id))
    }

    /// Whether two nodes sit in the same geometric cluster.
    #[track_caller]
    pub fn same_cluster(&self, a: NodeId, b: NodeId) -> bool {
        self.cluster
            .same_cluster(self.id_to_coord(a), self.id_to_coord(b))
    }

    #[inline]
    pub fn has_hub(&self, id: NodeId) -> bool {
        self.hubs.has_hub(id)
    }

    #[track_caller]
    pub fn hub_of(&self, id: NodeId) -> HubId {
        self.hubs.hub_of(id)
    }

    #[track_caller]
    pub fn share_hub(&self, a: NodeId, b: NodeId) -> bool {
        self.hubs.share_hub(a, b)
    }

    // Hub-attachment selector

    /// Attachment routers of the cluster containing `coord`.
    pub fn attachment_points(&self, coord: Coord) -> AttachmentPoints {
        AttachmentPoints::around(self.cluster, coord)
    }

    /// Nearest hub attachment router of the coordinate's cluster.
    ///
    /// In a partial cluster at the mesh edge the result may lie outside the mesh.
    pub fn closest_attachment_point(&self, coord: Coord) -> Point {
        closest_attachment_point(self.cluster, coord)
    }

    /// Which attachment router wins for `coord`, with its wired distance.
    pub fn closest_attachment_router(&self, coord: Coord) -> (AttachmentRouter, u64) {
        self.attachment_points(coord).closest_to(coord)
    }

    /// Node-id form of [`closest_attachment_point`](Self::closest_attachment_point).
    pub fn try_closest_attachment_node(&self, id: NodeId) -> Result<NodeId> {
        let point = self.closest_attachment_point(self.try_id_to_coord(id)?);
        self.mesh.try_point_to_id(point)
    }

    /// Node-id form of [`closest_attachment_point`](Self::closest_attachment_point).
    ///
    /// # Panics
    ///
    /// If `id` is outside the mesh, or the attachment router is.
    #[track_caller]
    pub fn closest_attachment_node(&self, id: NodeId) -> NodeId {
        match self.try_closest_attachment_node(id) {
            Ok(node) => node,
            Err(e) => fatal(e),
        }
    }

    // Distance engine

    #[inline]
    pub fn wired_distance(&self, a: Coord, b: Coord) -> u32 {
        distance::wired_distance(a, b)
    }

    #[track_caller]
    pub fn wired_distance_between(&self, a: NodeId, b: NodeId) -> u32 {
        distance::wired_distance(self.id_to_coord(a), self.id_to_coord(b))
    }

    /// Wired hops to each node's nearest attachment router plus one radio hop.
    #[track_caller]
    pub fn wireless_distance(&self, a: NodeId, b: NodeId) -> u64 {
        distance::wireless_distance(self.cluster, self.id_to_coord(a), self.id_to_coord(b))
    }

    /// Cheapest path kind between two nodes.
    ///
    /// The radio is used only across clusters, between nodes that both have a
    /// hub and do not share it, and only when it saves hops.
    #[track_caller]
    pub fn path_cost(&self, a: NodeId, b: NodeId) -> PathCost {
        let wired = u64::from(self.wired_distance_between(a, b));
        if self.same_cluster(a, b) || !self.has_hub(a) || !self.has_hub(b) || self.share_hub(a, b)
        {
            return PathCost::wired(wired);
        }

        let wireless = self.wireless_distance(a, b);
        if wireless < wired {
            PathCost::wireless(wireless)
        } else {
            PathCost::wired(wired)
        }
    }
}
