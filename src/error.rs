// Copyright 2022 - 2023 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Author: tickbh
// -----
// Created Date: 2023/09/14 10:21:33

use std::{fmt, result};

/// The single failure type shared by the codecs, the stream state machines
/// and the connection. `Incomplete`, `Idle` and `Delegate` are control-flow
/// signals rather than failures; everything else is fatal for the stream it
/// occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum H3Error {
    /// Not enough bytes buffered to finish the current parse.
    Incomplete,
    /// A frame payload did not match its advertised length.
    MalformedFrame,
    /// A frame whose declared payload exceeds what the peer may send.
    FrameTooLarge,
    /// Huffman or representation decoding of a header block failed.
    QpackDecompressionFailed,
    /// A header field violated the lowercase-name rule.
    MalformedHeader,
    /// A value outside the 62-bit varint range was encoded.
    VarintOverflow,
    /// A frame that is never valid in the stream's current state.
    UnexpectedFrame,
    /// The first frame on the control stream was not SETTINGS.
    MissingSettings,
    /// A frame that only belongs on a different stream type.
    WrongStream,
    /// The stream has already terminated.
    StreamClosed,
    /// The peer closed its control stream.
    ClosedCriticalStream,
    InternalError,
    InvalidArgument,
    NotImplemented,
    /// No progress possible right now; retry after feeding or draining.
    Idle,
    /// The decoder skipped an unknown frame; the caller should loop.
    Delegate,
}

impl H3Error {
    #[inline]
    pub fn description_str(&self) -> &'static str {
        match self {
            H3Error::Incomplete => "incomplete",
            H3Error::MalformedFrame => "malformed frame",
            H3Error::FrameTooLarge => "frame too large",
            H3Error::QpackDecompressionFailed => "qpack decompression failed",
            H3Error::MalformedHeader => "malformed header",
            H3Error::VarintOverflow => "varint overflow",
            H3Error::UnexpectedFrame => "unexpected frame",
            H3Error::MissingSettings => "missing settings",
            H3Error::WrongStream => "wrong stream",
            H3Error::StreamClosed => "stream closed",
            H3Error::ClosedCriticalStream => "closed critical stream",
            H3Error::InternalError => "internal error",
            H3Error::InvalidArgument => "invalid argument",
            H3Error::NotImplemented => "not implemented",
            H3Error::Idle => "idle",
            H3Error::Delegate => "delegate",
        }
    }

    pub fn is_incomplete(&self) -> bool {
        match self {
            H3Error::Incomplete => true,
            _ => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        match self {
            H3Error::Idle => true,
            _ => false,
        }
    }

    /// Errors that take the whole connection down, not just one stream.
    pub fn is_connection_fatal(&self) -> bool {
        match self {
            H3Error::MissingSettings | H3Error::ClosedCriticalStream => true,
            _ => false,
        }
    }
}

impl fmt::Display for H3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description_str())
    }
}

pub type H3Result<T> = result::Result<T, H3Error>;
