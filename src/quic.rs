//! The transport-facing event shapes. The QUIC transport itself lives
//! outside this crate; it feeds these in and carries them out.

use crate::Binary;

/// Reserved id meaning "no stream assigned yet".
pub const STREAM_ID_NONE: u64 = u64::MAX;

/// A run of stream bytes crossing the transport boundary, in either
/// direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    pub id: u64,
    pub fin: bool,
    pub buffer: Binary,
}

/// Abrupt stream termination reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamError {
    pub id: u64,
    pub code: u64,
}

#[derive(Debug, Clone)]
pub enum Event {
    Data(Data),
    Error(StreamError),
}

impl Event {
    pub fn id(&self) -> u64 {
        match self {
            Event::Data(data) => data.id,
            Event::Error(error) => error.id,
        }
    }
}
