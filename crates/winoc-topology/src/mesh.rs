//! Coordinate mapper: linear node ids to mesh positions and back.
//!
//! Nodes are numbered row-major: id = y * width + x. Both directions check
//! that the input lies inside the mesh.

use crate::error::{fatal, Result, TopologyError};
use crate::{Coord, NodeId, Point};

/// Mesh extent in nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshDims {
    /// Columns
    pub width: u32,
    /// Rows
    pub height: u32,
}

impl MeshDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for MeshDims {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

/// A validated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mesh {
    dims: MeshDims,
    node_count: u32,
}

impl Mesh {
    /// Validate the dimensions.
    ///
    /// Both must be positive and the node count must fit a [`NodeId`].
    pub fn new(dims: MeshDims) -> Result<Self> {
        let MeshDims { width, height } = dims;
        if width == 0 || height == 0 {
            return Err(TopologyError::ZeroMeshDimension { width, height });
        }
        let node_count = width
            .checked_mul(height)
            .ok_or(TopologyError::MeshTooLarge { width, height })?;

        Ok(Self { dims, node_count })
    }

    #[inline]
    pub const fn dims(&self) -> MeshDims {
        self.dims
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.dims.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.dims.height
    }

    /// Total number of nodes.
    #[inline]
    pub const fn node_count(&self) -> u32 {
        self.node_count
    }

    /// Whether the coordinate lies inside the mesh.
    #[inline]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.dims.width && coord.y < self.dims.height
    }

    /// Whether the id addresses a node of this mesh.
    #[inline]
    pub const fn contains_id(&self, id: NodeId) -> bool {
        id.0 < self.node_count
    }

    /// Convert a node id to its coordinate.
    pub fn try_id_to_coord(&self, id: NodeId) -> Result<Coord> {
        if !self.contains_id(id) {
            return Err(TopologyError::NodeOutOfRange {
                id,
                node_count: self.node_count,
            });
        }
        Ok(Coord::new(id.0 % self.dims.width, id.0 / self.dims.width))
    }

    /// Convert a coordinate to its node id.
    pub fn try_coord_to_id(&self, coord: Coord) -> Result<NodeId> {
        if !self.contains(coord) {
            return Err(TopologyError::CoordOutOfRange {
                coord,
                width: self.dims.width,
                height: self.dims.height,
            });
        }
        Ok(NodeId(coord.y * self.dims.width + coord.x))
    }

    /// Node id at a signed grid point, if the point lies inside the mesh.
    pub fn try_point_to_id(&self, point: Point) -> Result<NodeId> {
        match Coord::try_from(point) {
            Ok(coord) if self.contains(coord) => self.try_coord_to_id(coord),
            _ => Err(TopologyError::PointOutOfRange {
                point,
                width: self.dims.width,
                height: self.dims.height,
            }),
        }
    }

    /// Convert a node id to its coordinate.
    ///
    /// # Panics
    ///
    /// If `id` is outside the mesh.
    #[track_caller]
    pub fn id_to_coord(&self, id: NodeId) -> Coord {
        match self.try_id_to_coord(id) {
            Ok(coord) => coord,
            Err(e) => fatal(e),
        }
    }

    /// Convert a coordinate to its node id.
    ///
    /// # Panics
    ///
    /// If `coord` is outside the mesh.
    #[track_caller]
    pub fn coord_to_id(&self, coord: Coord) -> NodeId {
        match self.try_coord_to_id(coord) {
            Ok(id) => id,
            Err(e) => fatal(e),
        }
    }

    /// Iterate over every node id in row-major order.
    pub fn nodes(&self) -> Nodes {
        Nodes {
            current: 0,
            limit: self.node_count,
        }
    }
}

/// Iterator over the node ids of a mesh.
pub struct Nodes {
    current: u32,
    limit: u32,
}

impl Iterator for Nodes {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.limit {
            return None;
        }
        let id = NodeId(self.current);
        self.current += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.limit - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Nodes {}
