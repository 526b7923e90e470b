//! Topology configuration.
//!
//! Plain data supplied once at startup. [`Topology::from_config`](crate::Topology::from_config)
//! validates it into an immutable snapshot.

use crate::{ClusterDims, HubId, MeshDims, NodeId};

/// One radio hub and the tiles wired to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HubConfig {
    pub id: HubId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attached_nodes: Vec<NodeId>,
}

impl HubConfig {
    pub fn new(id: HubId, attached_nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            id,
            attached_nodes: attached_nodes.into_iter().collect(),
        }
    }
}

/// Configuration for a topology snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TopologyConfig {
    /// Mesh extent
    pub mesh: MeshDims,
    /// Cluster partition size
    pub cluster: ClusterDims,
    /// Virtual channels per port, consumed by trace output
    pub virtual_channels: u32,
    /// Radio hubs
    pub hubs: Vec<HubConfig>,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            mesh: MeshDims::default(),
            cluster: ClusterDims::default(),
            virtual_channels: 1,
            hubs: Vec::new(),
        }
    }
}

impl TopologyConfig {
    pub fn new(mesh: MeshDims, cluster: ClusterDims) -> Self {
        Self {
            mesh,
            cluster,
            ..Self::default()
        }
    }

    /// Replace the hub list with one hub per cluster serving all of its nodes.
    ///
    /// Hubs are numbered row-major over the cluster grid. Partial clusters at
    /// the mesh edge get a hub too.
    pub fn with_hub_per_cluster(mut self) -> Self {
        let MeshDims { width, height } = self.mesh;
        let ClusterDims {
            width: cw,
            height: ch,
        } = self.cluster;
        if width == 0 || height == 0 || cw == 0 || ch == 0 {
            return self;
        }

        let clusters_x = width.div_ceil(cw);
        let clusters_y = height.div_ceil(ch);

        self.hubs = (0..clusters_y)
            .flat_map(|cy| (0..clusters_x).map(move |cx| (cx, cy)))
            .map(|(cx, cy)| {
                let rows = cy * ch..(cy + 1).saturating_mul(ch).min(height);
                let nodes = rows.flat_map(|y| {
                    let cols = cx * cw..(cx + 1).saturating_mul(cw).min(width);
                    cols.map(move |x| NodeId(y * width + x))
                });
                HubConfig::new(HubId(cy * clusters_x + cx), nodes)
            })
            .collect();
        self
    }

    pub fn with_hub(mut self, hub: HubConfig) -> Self {
        self.hubs.push(hub);
        self
    }

    pub fn with_virtual_channels(mut self, virtual_channels: u32) -> Self {
        self.virtual_channels = virtual_channels;
        self
    }
}
