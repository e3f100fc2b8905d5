pub mod binary;
pub mod codec;
mod connection;
mod error;
mod event;
mod header;
pub mod quic;
mod settings;
pub mod stream;

pub use binary::{Anchor, Binary, BinaryMut, BinaryQueue, Buf, BufMut, Discarder, Lookahead};
pub use codec::frame::{ElementType, Frame, FrameKind, Priority};
pub use connection::Connection;
pub use error::{H3Error, H3Result};
pub use event::Event;
pub use header::Header;
pub use settings::Settings;
pub use stream::Role;
