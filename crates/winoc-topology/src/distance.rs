//! Wired and wireless path costs.
//!
//! Wired distance is the Manhattan hop count across the mesh. Wireless
//! distance goes from each node to its nearest hub attachment router and
//! adds a single radio hop between the two hubs.

use crate::attachment::closest_attachment_point;
use crate::{ClusterDims, Coord, Point};

/// Cost of the radio hop between two hubs.
pub const WIRELESS_HOP_COST: u64 = 1;

/// Manhattan distance between two coordinates.
#[inline]
pub const fn wired_distance(a: Coord, b: Coord) -> u32 {
    a.manhattan(&b)
}

/// Wired distance from a coordinate to its nearest attachment router.
#[inline]
pub fn distance_to_hub(dims: ClusterDims, coord: Coord) -> u64 {
    Point::from(coord).manhattan(&closest_attachment_point(dims, coord))
}

/// Hop count when both ends go through their radio hubs.
///
/// Does not check whether the nodes actually have hubs or sit in different
/// clusters; that decision belongs to the caller. Counted in `u64`: with
/// clusters wider than the mesh each leg can approach the `u32` range.
pub fn wireless_distance(dims: ClusterDims, a: Coord, b: Coord) -> u64 {
    distance_to_hub(dims, a) + distance_to_hub(dims, b) + WIRELESS_HOP_COST
}

/// Which network a path uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkKind {
    Wired,
    Wireless,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wired => f.write_str("wired"),
            Self::Wireless => f.write_str("wireless"),
        }
    }
}

/// Selected path between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCost {
    pub kind: LinkKind,
    pub hops: u64,
}

impl PathCost {
    pub const fn wired(hops: u64) -> Self {
        Self {
            kind: LinkKind::Wired,
            hops,
        }
    }

    pub const fn wireless(hops: u64) -> Self {
        Self {
            kind: LinkKind::Wireless,
            hops,
        }
    }
}
