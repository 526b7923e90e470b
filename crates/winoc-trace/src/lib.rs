//! WiNoC Trace Output
//!
//! Human-readable rendering of the values routers exchange, kept apart from
//! the geometry core. Formats are stable so logs can be diffed across runs:
//!
//! | value              | form                                   |
//! |--------------------|----------------------------------------|
//! | [`Flit`]           | `(H3, 0->9 VC 1)`, or a block at [`Verbosity::High`] |
//! | [`ChannelStatus`]  | `A(4)` / `N(0)`                        |
//! | [`NopData`]        | `      NoP data from [12] [ A(2) N(0) A(4) A(1) ]` |
//! | [`BufferFullStatus`] | `[0 1 0 ]`                           |
//!
//! [`TraceSignals`] names the scalar signals of each value for waveform
//! tracing, and [`write_stat_map`] dumps labelled statistics.

mod flit;
mod signals;
mod stats;
mod status;

pub use flit::{Flit, FlitDisplay, FlitType};
pub use signals::{Signal, SignalValue, TraceSignals};
pub use stats::{write_stat_map, Scientific};
pub use status::{BufferFullStatus, ChannelStatus, NopData};

/// Neighbor directions reported in NoP data: north, east, south, west.
pub const DIRECTIONS: usize = 4;

/// How much detail trace output carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verbosity {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_ordered() {
        assert!(Verbosity::Off < Verbosity::Low);
        assert!(Verbosity::Medium < Verbosity::High);
        assert_eq!(Verbosity::default(), Verbosity::Off);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn flit_serializes() {
        let flit = Flit {
            src_id: winoc_topology::NodeId(1),
            dst_id: winoc_topology::NodeId(2),
            vc_id: 0,
            flit_type: FlitType::Body,
            sequence_no: 4,
            timestamp: 0.5,
            hop_no: 1,
        };
        let json = serde_json::to_value(flit).unwrap();
        assert_eq!(json["src_id"], 1);
        assert_eq!(json["flit_type"], "Body");
    }
}
