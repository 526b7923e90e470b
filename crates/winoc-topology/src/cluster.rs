//! Geometric clustering of the mesh.
//!
//! The mesh is cut into fixed blocks of `width x height` nodes. A node's
//! cluster is derived from its coordinate by integer division, so every
//! coordinate belongs to exactly one cluster and nothing is stored. When
//! the cluster size does not divide the mesh, the last row/column of
//! clusters is partial.
//!
//! Origins and centers are [`Point`]s: a cluster reaching past the last mesh
//! column can have its center beyond the `u32` range.

use crate::error::{Result, TopologyError};
use crate::{Coord, Point};

/// Cluster extent in nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterDims {
    /// Columns per cluster
    pub width: u32,
    /// Rows per cluster
    pub height: u32,
}

impl ClusterDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check both dimensions are positive.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TopologyError::ZeroClusterDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Cluster containing a coordinate.
    #[inline]
    pub const fn cluster_of(&self, coord: Coord) -> ClusterIndex {
        ClusterIndex {
            x: coord.x / self.width,
            y: coord.y / self.height,
        }
    }

    /// Whether two coordinates fall in the same cluster.
    #[inline]
    pub fn same_cluster(&self, a: Coord, b: Coord) -> bool {
        self.cluster_of(a) == self.cluster_of(b)
    }

    /// Top-left corner of a cluster.
    ///
    /// Exact for every cluster that contains a `Coord`.
    #[inline]
    pub const fn origin(&self, cluster: ClusterIndex) -> Point {
        Point::new(
            (cluster.x as i64).saturating_mul(self.width as i64),
            (cluster.y as i64).saturating_mul(self.height as i64),
        )
    }

    /// Geometric center of a cluster: origin offset by half the cluster size.
    #[inline]
    pub const fn center(&self, cluster: ClusterIndex) -> Point {
        let origin = self.origin(cluster);
        Point::new(
            origin.x.saturating_add((self.width / 2) as i64),
            origin.y.saturating_add((self.height / 2) as i64),
        )
    }
}

impl Default for ClusterDims {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

/// Position of a cluster in the cluster grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterIndex {
    pub x: u32,
    pub y: u32,
}

impl ClusterIndex {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for ClusterIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_clusters() {
        assert!(ClusterDims::new(4, 4).validate().is_ok());
        assert!(ClusterDims::new(1, 4).validate().is_ok());
        assert!(ClusterDims::new(1, 1).validate().is_ok());
        assert_eq!(
            ClusterDims::new(0, 4).validate(),
            Err(TopologyError::ZeroClusterDimension { width: 0, height: 4 })
        );
        assert!(ClusterDims::new(4, 0).validate().is_err());
    }

    #[test]
    fn cluster_of_uses_floor_division() {
        let dims = ClusterDims::new(4, 4);
        assert_eq!(dims.cluster_of(Coord::new(0, 0)), ClusterIndex::new(0, 0));
        assert_eq!(dims.cluster_of(Coord::new(3, 3)), ClusterIndex::new(0, 0));
        assert_eq!(dims.cluster_of(Coord::new(4, 3)), ClusterIndex::new(1, 0));
        assert_eq!(dims.cluster_of(Coord::new(7, 7)), ClusterIndex::new(1, 1));
    }

    #[test]
    fn rectangular_clusters() {
        let dims = ClusterDims::new(4, 2);
        assert_eq!(dims.cluster_of(Coord::new(5, 5)), ClusterIndex::new(1, 2));
        assert_eq!(dims.origin(ClusterIndex::new(1, 2)), Point::new(4, 4));
        assert_eq!(dims.center(ClusterIndex::new(1, 2)), Point::new(6, 5));
    }

    #[test]
    fn center_of_first_cluster() {
        let dims = ClusterDims::new(4, 4);
        assert_eq!(dims.center(ClusterIndex::new(0, 0)), Point::new(2, 2));
        assert_eq!(dims.center(ClusterIndex::new(1, 1)), Point::new(6, 6));
    }

    #[test]
    fn odd_cluster_center_truncates() {
        let dims = ClusterDims::new(5, 3);
        assert_eq!(dims.center(ClusterIndex::new(0, 0)), Point::new(2, 1));
    }

    #[test]
    fn single_column_cluster_centers_on_its_column() {
        let dims = ClusterDims::new(1, 4);
        assert_eq!(dims.center(ClusterIndex::new(0, 0)), Point::new(0, 2));
        assert_eq!(dims.center(ClusterIndex::new(3, 1)), Point::new(3, 6));
    }

    #[test]
    fn center_past_the_u32_range() {
        let dims = ClusterDims::new(3_000_000_000, 2);
        let cluster = dims.cluster_of(Coord::new(3_000_000_000, 0));
        assert_eq!(cluster, ClusterIndex::new(1, 0));
        assert_eq!(dims.center(cluster), Point::new(4_500_000_000, 1));
    }

    #[test]
    fn same_cluster_boundaries() {
        let dims = ClusterDims::new(4, 4);
        assert!(dims.same_cluster(Coord::new(0, 0), Coord::new(1, 1)));
        assert!(dims.same_cluster(Coord::new(0, 0), Coord::new(3, 3)));
        assert!(!dims.same_cluster(Coord::new(3, 0), Coord::new(4, 0)));
        assert!(!dims.same_cluster(Coord::new(0, 3), Coord::new(0, 4)));
    }
}
