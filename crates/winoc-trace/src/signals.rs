//! Named scalar signals for waveform tracing.
//!
//! Each traceable value lists its signals under a caller-chosen prefix, e.g.
//! a flit traced as `"r3.in"` yields `r3.in.src_id`, `r3.in.dst_id` and so on.
//! Recording backends consume the list; this crate only decides the names.

use std::fmt;

use crate::{BufferFullStatus, ChannelStatus, Flit, NopData};

/// Value of one traced signal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SignalValue {
    Bool(bool),
    Uint(u32),
    Float(f64),
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", u8::from(*v)),
            Self::Uint(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

/// One named signal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    pub name: String,
    pub value: SignalValue,
}

impl Signal {
    pub fn new(prefix: &str, field: &str, value: SignalValue) -> Self {
        Self {
            name: format!("{prefix}.{field}"),
            value,
        }
    }
}

/// A value that can be broken into traced signals.
pub trait TraceSignals {
    fn signals(&self, prefix: &str) -> Vec<Signal>;
}

impl TraceSignals for Flit {
    fn signals(&self, prefix: &str) -> Vec<Signal> {
        vec![
            Signal::new(prefix, "src_id", SignalValue::Uint(self.src_id.value())),
            Signal::new(prefix, "dst_id", SignalValue::Uint(self.dst_id.value())),
            Signal::new(prefix, "sequence_no", SignalValue::Uint(self.sequence_no)),
            Signal::new(prefix, "timestamp", SignalValue::Float(self.timestamp)),
            Signal::new(prefix, "hop_no", SignalValue::Uint(self.hop_no)),
        ]
    }
}

impl TraceSignals for NopData {
    fn signals(&self, prefix: &str) -> Vec<Signal> {
        vec![Signal::new(
            prefix,
            "sender_id",
            SignalValue::Uint(self.sender_id.value()),
        )]
    }
}

impl TraceSignals for ChannelStatus {
    fn signals(&self, prefix: &str) -> Vec<Signal> {
        vec![
            Signal::new(prefix, "free_slots", SignalValue::Uint(self.free_slots)),
            Signal::new(prefix, "available", SignalValue::Bool(self.available)),
        ]
    }
}

impl TraceSignals for BufferFullStatus {
    fn signals(&self, prefix: &str) -> Vec<Signal> {
        self.mask
            .iter()
            .enumerate()
            .map(|(vc, &full)| Signal::new(prefix, &format!("vc_{vc}"), SignalValue::Bool(full)))
            .collect()
    }
}
