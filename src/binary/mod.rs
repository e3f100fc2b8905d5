mod binary;
mod binary_mut;
mod buf;
mod buf_mut;
mod segments;

pub use binary::Binary;
pub use binary_mut::BinaryMut;
pub use buf::Buf;
pub use buf_mut::BufMut;
pub use segments::{Anchor, BinaryQueue, Discarder, Lookahead};
