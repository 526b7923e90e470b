//! Flit rendering.
//!
//! Compact form, used for every verbosity below [`Verbosity::High`]:
//!
//! ```text
//! (H3, 0->9 VC 1)
//! ```
//!
//! The high-verbosity form is a multi-line block that also carries the
//! generation timestamp and the hop count.

use std::fmt;

use winoc_topology::NodeId;

use crate::Verbosity;

/// Position of a flit within its packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlitType {
    Head,
    Body,
    Tail,
}

impl FlitType {
    /// One-letter marker used in the compact form.
    pub const fn letter(self) -> char {
        match self {
            Self::Head => 'H',
            Self::Body => 'B',
            Self::Tail => 'T',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Body => "BODY",
            Self::Tail => "TAIL",
        }
    }
}

/// The fields of a flit that trace output shows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flit {
    pub src_id: NodeId,
    pub dst_id: NodeId,
    pub vc_id: u32,
    pub flit_type: FlitType,
    pub sequence_no: u32,
    /// Generation time of the packet
    pub timestamp: f64,
    pub hop_no: u32,
}

impl Flit {
    /// Render at the given verbosity.
    pub fn display(&self, verbosity: Verbosity) -> FlitDisplay<'_> {
        FlitDisplay {
            flit: self,
            verbosity,
        }
    }
}

impl fmt::Display for Flit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}{}, {}->{} VC {})",
            self.flit_type.letter(),
            self.sequence_no,
            self.src_id,
            self.dst_id,
            self.vc_id
        )
    }
}

/// A flit paired with the verbosity to render it at.
pub struct FlitDisplay<'a> {
    flit: &'a Flit,
    verbosity: Verbosity,
}

impl fmt::Display for FlitDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbosity < Verbosity::High {
            return fmt::Display::fmt(self.flit, f);
        }

        let flit = self.flit;
        writeln!(f, "### FLIT ###")?;
        writeln!(f, "Source Tile[{}]", flit.src_id)?;
        writeln!(f, "Destination Tile[{}]", flit.dst_id)?;
        writeln!(f, "Flit Type is {}", flit.flit_type.name())?;
        writeln!(f, "Sequence no. {}", flit.sequence_no)?;
        writeln!(f, "Unix timestamp at packet generation {}", flit.timestamp)?;
        writeln!(
            f,
            "Total number of hops from source to destination is {}",
            flit.hop_no
        )
    }
}
