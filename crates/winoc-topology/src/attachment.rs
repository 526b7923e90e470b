//! Hub attachment routers.
//!
//! A cluster's radio hub is wired to the four routers forming a 2x2 block
//! around the cluster center:
//!
//! ```text
//!        x-1   x
//!  y-1   R1    R3
//!  y     R2    R4   <- R4 is the center
//! ```
//!
//! A node reaches the hub through whichever of the four is nearest by wired
//! distance. Ties resolve by the fixed precedence R1, R2, R3, R4.
//!
//! In a cluster one node wide or tall, R1/R2 or R1/R3 sit one step outside
//! the cluster, at a negative coordinate for the first column or row. They
//! never win there, but their distances are still part of the comparison.

use crate::{ClusterDims, ClusterIndex, Coord, Point, ATTACHMENT_ROUTERS};

/// One of the four attachment routers of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachmentRouter {
    /// Up-left of center
    R1,
    /// Left of center
    R2,
    /// Above center
    R3,
    /// Center
    R4,
}

impl AttachmentRouter {
    /// Tie-break order: the first router reaching the minimum distance wins.
    pub const PRECEDENCE: [Self; ATTACHMENT_ROUTERS] = [Self::R1, Self::R2, Self::R3, Self::R4];

    /// Position in [`PRECEDENCE`](Self::PRECEDENCE).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Offset (left, up) from the cluster center.
    #[inline]
    pub const fn offset_from_center(self) -> (i64, i64) {
        match self {
            Self::R1 => (1, 1),
            Self::R2 => (1, 0),
            Self::R3 => (0, 1),
            Self::R4 => (0, 0),
        }
    }

    /// Pick the winner given the distances to R1..R4.
    ///
    /// The minimum is taken pairwise (R1/R2, R3/R4, then across), and the
    /// routers are then tested in precedence order against it.
    pub fn select(distances: [u64; ATTACHMENT_ROUTERS]) -> Self {
        let [d1, d2, d3, d4] = distances;
        let win = d1.min(d2).min(d3.min(d4));

        Self::PRECEDENCE[..ATTACHMENT_ROUTERS - 1]
            .iter()
            .copied()
            .find(|r| distances[r.index()] == win)
            .unwrap_or(Self::R4)
    }
}

impl std::fmt::Display for AttachmentRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
            Self::R4 => "R4",
        };
        f.write_str(name)
    }
}

/// The four attachment routers of one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentPoints {
    center: Point,
}

impl AttachmentPoints {
    /// Attachment routers of a cluster.
    pub const fn of_cluster(dims: ClusterDims, cluster: ClusterIndex) -> Self {
        Self {
            center: dims.center(cluster),
        }
    }

    /// Attachment routers of the cluster containing `coord`.
    pub const fn around(dims: ClusterDims, coord: Coord) -> Self {
        Self::of_cluster(dims, dims.cluster_of(coord))
    }

    /// The center router, R4.
    #[inline]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Grid point of one router.
    #[inline]
    pub const fn router(&self, router: AttachmentRouter) -> Point {
        let (left, up) = router.offset_from_center();
        Point::new(self.center.x - left, self.center.y - up)
    }

    /// All four routers in precedence order.
    pub fn all(&self) -> [Point; ATTACHMENT_ROUTERS] {
        AttachmentRouter::PRECEDENCE.map(|r| self.router(r))
    }

    /// Wired distance from `coord` to each router, in precedence order.
    pub fn distances_from(&self, coord: Coord) -> [u64; ATTACHMENT_ROUTERS] {
        let from = Point::from(coord);
        self.all().map(|r| from.manhattan(&r))
    }

    /// Nearest router to `coord` and its wired distance.
    pub fn closest_to(&self, coord: Coord) -> (AttachmentRouter, u64) {
        let distances = self.distances_from(coord);
        let winner = AttachmentRouter::select(distances);
        (winner, distances[winner.index()])
    }
}

/// Nearest hub attachment router for a coordinate, searched in its own cluster.
///
/// The winner never has a negative component. It can lie past the mesh edge
/// when the cluster is cut short there.
pub fn closest_attachment_point(dims: ClusterDims, coord: Coord) -> Point {
    let points = AttachmentPoints::around(dims, coord);
    let (router, _) = points.closest_to(coord);
    points.router(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: ClusterDims = ClusterDims::new(4, 4);

    #[test]
    fn routers_of_first_cluster() {
        let points = AttachmentPoints::of_cluster(DIMS, ClusterIndex::new(0, 0));
        assert_eq!(points.router(AttachmentRouter::R4), Point::new(2, 2));
        assert_eq!(points.router(AttachmentRouter::R3), Point::new(2, 1));
        assert_eq!(points.router(AttachmentRouter::R2), Point::new(1, 2));
        assert_eq!(points.router(AttachmentRouter::R1), Point::new(1, 1));
        assert_eq!(points.center(), Point::new(2, 2));
    }

    #[test]
    fn routers_of_offset_cluster() {
        let points = AttachmentPoints::around(DIMS, Coord::new(5, 1));
        assert_eq!(
            points.all(),
            [Point::new(5, 1), Point::new(5, 2), Point::new(6, 1), Point::new(6, 2)]
        );
    }

    #[test]
    fn corner_node_attaches_to_r1() {
        let points = AttachmentPoints::around(DIMS, Coord::ORIGIN);
        assert_eq!(points.distances_from(Coord::ORIGIN), [2, 3, 3, 4]);
        assert_eq!(points.closest_to(Coord::ORIGIN), (AttachmentRouter::R1, 2));
        assert_eq!(closest_attachment_point(DIMS, Coord::ORIGIN), Point::new(1, 1));
    }

    #[test]
    fn each_quadrant_picks_its_router() {
        assert_eq!(closest_attachment_point(DIMS, Coord::new(0, 3)), Point::new(1, 2));
        assert_eq!(closest_attachment_point(DIMS, Coord::new(3, 0)), Point::new(2, 1));
        assert_eq!(closest_attachment_point(DIMS, Coord::new(3, 3)), Point::new(2, 2));
    }

    #[test]
    fn router_attaches_to_itself() {
        let points = AttachmentPoints::around(DIMS, Coord::ORIGIN);
        for router in AttachmentRouter::PRECEDENCE {
            let coord = Coord::try_from(points.router(router)).unwrap();
            assert_eq!(points.closest_to(coord), (router, 0));
        }
    }

    #[test]
    fn select_prefers_earlier_router_on_tie() {
        assert_eq!(AttachmentRouter::select([2, 2, 3, 3]), AttachmentRouter::R1);
        assert_eq!(AttachmentRouter::select([3, 2, 2, 2]), AttachmentRouter::R2);
        assert_eq!(AttachmentRouter::select([3, 3, 1, 1]), AttachmentRouter::R3);
        assert_eq!(AttachmentRouter::select([1, 1, 1, 1]), AttachmentRouter::R1);
        assert_eq!(AttachmentRouter::select([5, 4, 3, 2]), AttachmentRouter::R4);
    }

    #[test]
    fn select_is_deterministic() {
        let distances = [4, 2, 2, 4];
        let first = AttachmentRouter::select(distances);
        for _ in 0..10 {
            assert_eq!(AttachmentRouter::select(distances), first);
        }
        assert_eq!(first, AttachmentRouter::R2);
    }

    #[test]
    fn precedence_matches_index() {
        for (i, router) in AttachmentRouter::PRECEDENCE.iter().enumerate() {
            assert_eq!(router.index(), i);
        }
    }

    #[test]
    fn smallest_cluster() {
        let dims = ClusterDims::new(2, 2);
        let points = AttachmentPoints::around(dims, Coord::new(2, 0));
        assert_eq!(points.router(AttachmentRouter::R1), Point::new(2, 0));
        assert_eq!(points.center(), Point::new(3, 1));
    }

    #[test]
    fn single_node_cluster_attaches_to_itself() {
        let dims = ClusterDims::new(1, 1);
        let points = AttachmentPoints::around(dims, Coord::ORIGIN);
        assert_eq!(points.router(AttachmentRouter::R1), Point::new(-1, -1));
        assert_eq!(points.router(AttachmentRouter::R4), Point::new(0, 0));
        assert_eq!(points.closest_to(Coord::ORIGIN), (AttachmentRouter::R4, 0));
        assert_eq!(closest_attachment_point(dims, Coord::new(5, 3)), Point::new(5, 3));
    }

    #[test]
    fn single_column_cluster_on_the_mesh_edge() {
        let dims = ClusterDims::new(1, 4);
        let points = AttachmentPoints::around(dims, Coord::ORIGIN);
        assert_eq!(
            points.all(),
            [Point::new(-1, 1), Point::new(-1, 2), Point::new(0, 1), Point::new(0, 2)]
        );
        assert_eq!(points.distances_from(Coord::ORIGIN), [2, 3, 1, 2]);
        assert_eq!(points.closest_to(Coord::ORIGIN), (AttachmentRouter::R3, 1));
        assert_eq!(closest_attachment_point(dims, Coord::new(0, 3)), Point::new(0, 2));
    }

    #[test]
    fn partial_cluster_attaches_past_the_mesh_edge() {
        // A 5x5 mesh with 4x4 clusters: cluster [1,1] holds only (4,4).
        let points = AttachmentPoints::around(DIMS, Coord::new(4, 4));
        assert_eq!(points.center(), Point::new(6, 6));
        assert_eq!(points.closest_to(Coord::new(4, 4)), (AttachmentRouter::R1, 2));
        assert_eq!(closest_attachment_point(DIMS, Coord::new(4, 4)), Point::new(5, 5));
    }
}
