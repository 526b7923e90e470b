//! Error types for winoc-topology.

use thiserror::Error;

use crate::{Coord, HubId, NodeId, Point};

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Invalid topology input.
///
/// Returned by config validation and the `try_*` forms. The plain operations
/// treat the same conditions as fatal and panic with this error's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A mesh dimension is zero.
    #[error("mesh dimensions must be positive, got {width}x{height}")]
    ZeroMeshDimension { width: u32, height: u32 },

    /// The node count does not fit a node identifier.
    #[error("mesh {width}x{height} has more nodes than a node id can address")]
    MeshTooLarge { width: u32, height: u32 },

    /// A cluster dimension is zero.
    #[error("cluster dimensions must be positive, got {width}x{height}")]
    ZeroClusterDimension { width: u32, height: u32 },

    /// No virtual channels configured.
    #[error("at least one virtual channel is required")]
    ZeroVirtualChannels,

    /// Node identifier outside the mesh.
    #[error("node {id} is outside a mesh of {node_count} nodes")]
    NodeOutOfRange { id: NodeId, node_count: u32 },

    /// Coordinate outside the mesh.
    #[error("coordinate {coord} is outside a {width}x{height} mesh")]
    CoordOutOfRange { coord: Coord, width: u32, height: u32 },

    /// Grid point, such as an attachment router, with no node behind it.
    #[error("point {point} is outside a {width}x{height} mesh")]
    PointOutOfRange { point: Point, width: u32, height: u32 },

    /// Node is not connected to any hub.
    #[error("node {0} is not connected to any hub")]
    NoHub(NodeId),

    /// A node is listed under two different hubs.
    #[error("node {node} is attached to both hub {first} and hub {second}")]
    ConflictingHubAssignment {
        node: NodeId,
        first: HubId,
        second: HubId,
    },
}

/// Abort on a violated topology precondition.
///
/// Routing on corrupted geometry is never allowed to continue, so the error is
/// logged and the thread panics.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: TopologyError) -> ! {
    tracing::error!(error = %err, "invalid topology input");
    panic!("invalid topology input: {err}")
}
