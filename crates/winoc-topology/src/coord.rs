//! Mesh coordinates and identifiers.
//!
//! A node is addressed either by its column/row position in the mesh or by a
//! row-major linear identifier. Hubs have their own opaque identifier space.
//! Hub attachment candidates can fall off the grid, so they are [`Point`]s
//! with signed components.

/// A position in the 2D mesh.
///
/// `x` is the column and `y` the row, both counted from the top-left node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl Coord {
    /// Top-left node.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance: the hop count of a wired XY route.
    #[inline]
    pub const fn manhattan(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A signed grid position.
///
/// Attachment routers of a narrow cluster at the mesh edge sit at `x - 1` or
/// `y - 1` of the cluster center, which may be negative. Clusters near the far
/// edge can put them past the last `u32` column as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two points.
    #[inline]
    pub const fn manhattan(&self, other: &Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self {
            x: i64::from(coord.x),
            y: i64::from(coord.y),
        }
    }
}

impl TryFrom<Point> for Coord {
    type Error = std::num::TryFromIntError;

    fn try_from(point: Point) -> Result<Self, Self::Error> {
        Ok(Self::new(u32::try_from(point.x)?, u32::try_from(point.y)?))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Row-major node identifier: `y * mesh_width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<NodeId> for u32 {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Radio hub identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HubId(pub u32);

impl HubId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for HubId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<HubId> for u32 {
    fn from(value: HubId) -> Self {
        value.0
    }
}

impl std::fmt::Display for HubId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
