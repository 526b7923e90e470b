//! Neighbor and buffer status rendering.

use std::fmt;

use winoc_topology::NodeId;

use crate::DIRECTIONS;

/// Availability and free slots of one output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelStatus {
    pub free_slots: u32,
    pub available: bool,
}

impl ChannelStatus {
    pub const fn new(free_slots: u32, available: bool) -> Self {
        Self {
            free_slots,
            available,
        }
    }
}

/// `A(<free>)` when available, `N(<free>)` otherwise.
impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.available { 'A' } else { 'N' };
        write!(f, "{}({})", flag, self.free_slots)
    }
}

/// Neighbor-on-path status broadcast by a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NopData {
    pub sender_id: NodeId,
    pub channel_status_neighbor: [ChannelStatus; DIRECTIONS],
}

impl fmt::Display for NopData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "      NoP data from [{}] [ ", self.sender_id)?;
        for status in &self.channel_status_neighbor {
            write!(f, "{} ", status)?;
        }
        writeln!(f, "]")
    }
}

/// Per-virtual-channel "buffer full" flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferFullStatus {
    pub mask: Vec<bool>,
}

impl BufferFullStatus {
    /// All channels not full.
    pub fn new(virtual_channels: u32) -> Self {
        Self {
            mask: vec![false; virtual_channels as usize],
        }
    }

    /// Set one channel's flag. Returns `false`, leaving the mask unchanged,
    /// when `vc` is not one of its channels.
    #[must_use]
    pub fn set_full(&mut self, vc: usize, full: bool) -> bool {
        match self.mask.get_mut(vc) {
            Some(slot) => {
                *slot = full;
                true
            }
            None => false,
        }
    }

    pub fn is_full(&self, vc: usize) -> bool {
        self.mask.get(vc).copied().unwrap_or(false)
    }
}

/// `[` then `0 ` or `1 ` per channel, then `]` and a newline.
impl fmt::Display for BufferFullStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for &full in &self.mask {
            write!(f, "{} ", u8::from(full))?;
        }
        writeln!(f, "]")
    }
}
