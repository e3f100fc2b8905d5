use crate::{Binary, H3Error, Header, Settings};

/// What a stream surfaces to the application. Handlers receive these in wire
/// order per stream; ownership moves with the event.
#[derive(Debug)]
pub enum Event {
    /// The peer's SETTINGS arrived on its control stream.
    Settings { id: u64, settings: Settings },
    /// One decoded header or trailer field.
    Header { id: u64, header: Header },
    /// A run of request or response body bytes.
    Body { id: u64, buffer: Binary },
    /// The peer is shutting down; `stream_id` is the last it will process.
    Goaway { id: u64, stream_id: u64 },
    /// The peer finished its side of the stream cleanly.
    Finished { id: u64 },
    /// The stream failed; it has been removed from the connection.
    Error { id: u64, error: H3Error },
}

impl Event {
    pub fn id(&self) -> u64 {
        match self {
            Event::Settings { id, .. } => *id,
            Event::Header { id, .. } => *id,
            Event::Body { id, .. } => *id,
            Event::Goaway { id, .. } => *id,
            Event::Finished { id } => *id,
            Event::Error { id, .. } => *id,
        }
    }
}
