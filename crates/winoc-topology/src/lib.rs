//! WiNoC Mesh Topology
//!
//! Geometry of a 2D mesh Network-on-Chip with a wireless overlay.
//!
//! # Addressing
//!
//! Nodes are numbered row-major, `id = y * width + x`. Every operation that
//! takes an id or coordinate requires it to lie inside the mesh; out-of-range
//! input is a programming error and aborts with a panic. The `try_*` forms
//! report the same condition as a [`TopologyError`] instead.
//!
//! # Clusters and Hubs
//!
//! The mesh is partitioned into fixed-size clusters. Each cluster's radio hub
//! is wired to the 2x2 block of routers around the cluster center, and a node
//! enters the wireless network through the nearest of those four. Which
//! nodes are served by which hub is set by configuration, independently of
//! the geometric partition. Any positive cluster size works; in clusters one
//! node wide or tall some attachment candidates fall off the grid and are
//! simply never the nearest.
//!
//! # Distances
//!
//! - Wired distance: Manhattan hop count.
//! - Wireless distance: wired hops from each end to its attachment router,
//!   plus [`WIRELESS_HOP_COST`] for the radio link.

mod attachment;
mod cluster;
mod config;
mod coord;
mod distance;
mod error;
mod hub;
mod mesh;
mod topology;

pub use attachment::{closest_attachment_point, AttachmentPoints, AttachmentRouter};
pub use cluster::{ClusterDims, ClusterIndex};
pub use config::{HubConfig, TopologyConfig};
pub use coord::{Coord, HubId, NodeId, Point};
pub use distance::{
    distance_to_hub, wired_distance, wireless_distance, LinkKind, PathCost, WIRELESS_HOP_COST,
};
pub use error::{Result, TopologyError};
pub use hub::HubTable;
pub use mesh::{Mesh, MeshDims, Nodes};
pub use topology::Topology;

/// Routers wired to each cluster's hub.
pub const ATTACHMENT_ROUTERS: usize = 4;

/// Side length of the attachment block around the cluster center.
pub const ATTACHMENT_BLOCK_SIDE: usize = 2;

// The attachment routers form a square block
const _: () = assert!(ATTACHMENT_BLOCK_SIDE * ATTACHMENT_BLOCK_SIDE == ATTACHMENT_ROUTERS);
