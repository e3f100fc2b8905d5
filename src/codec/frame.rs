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
// Created Date: 2023/09/15 03:12:08

use super::varint;
use crate::settings::{
    SETTINGS_MAX_HEADER_LIST_SIZE, SETTINGS_NUM_PLACEHOLDERS, SETTINGS_QPACK_BLOCKED_STREAMS,
    SETTINGS_QPACK_MAX_TABLE_CAPACITY,
};
use crate::{Buf, BufMut, H3Error, H3Result, Lookahead, Settings};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Data,
    Headers,
    Priority,
    CancelPush,
    Settings,
    PushPromise,
    Goaway,
    MaxPushId,
    DuplicatePush,
}

impl FrameKind {
    pub fn from_type(frame_type: u64) -> Option<FrameKind> {
        match frame_type {
            0x0 => Some(FrameKind::Data),
            0x1 => Some(FrameKind::Headers),
            0x2 => Some(FrameKind::Priority),
            0x3 => Some(FrameKind::CancelPush),
            0x4 => Some(FrameKind::Settings),
            0x5 => Some(FrameKind::PushPromise),
            0x6 => Some(FrameKind::Goaway),
            0xd => Some(FrameKind::MaxPushId),
            0xe => Some(FrameKind::DuplicatePush),
            _ => None,
        }
    }

    pub fn type_id(&self) -> u64 {
        match self {
            FrameKind::Data => 0x0,
            FrameKind::Headers => 0x1,
            FrameKind::Priority => 0x2,
            FrameKind::CancelPush => 0x3,
            FrameKind::Settings => 0x4,
            FrameKind::PushPromise => 0x5,
            FrameKind::Goaway => 0x6,
            FrameKind::MaxPushId => 0xd,
            FrameKind::DuplicatePush => 0xe,
        }
    }
}

/// What a PRIORITY element id refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementType {
    RequestStream,
    PushStream,
    Placeholder,
    RootOfTree,
}

impl ElementType {
    fn from_bits(bits: u8) -> ElementType {
        match bits & 0x03 {
            0 => ElementType::RequestStream,
            1 => ElementType::PushStream,
            2 => ElementType::Placeholder,
            _ => ElementType::RootOfTree,
        }
    }

    fn bits(&self) -> u8 {
        match self {
            ElementType::RequestStream => 0,
            ElementType::PushStream => 1,
            ElementType::Placeholder => 2,
            ElementType::RootOfTree => 3,
        }
    }
}

/// PRIORITY is parsed so the stream keeps its framing, but never acted upon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Priority {
    pub prioritized_element_type: ElementType,
    pub element_dependency_type: ElementType,
    pub prioritized_element_id: u64,
    pub element_dependency_id: u64,
    pub weight: u8,
}

/// One HTTP/3 frame. DATA, HEADERS and the PUSH_PROMISE block carry only
/// their declared payload size; those bytes are streamed by the stream
/// machines, never buffered here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Data { size: u64 },
    Headers { size: u64 },
    Priority(Priority),
    CancelPush { push_id: u64 },
    Settings(Settings),
    PushPromise { push_id: u64, size: u64 },
    Goaway { stream_id: u64 },
    MaxPushId { push_id: u64 },
    DuplicatePush { push_id: u64 },
}

fn decode_u8<B: Buf>(src: &mut B) -> H3Result<u8> {
    match src.get_next() {
        Some(byte) => Ok(byte),
        None => Err(H3Error::Incomplete),
    }
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Data { .. } => FrameKind::Data,
            Frame::Headers { .. } => FrameKind::Headers,
            Frame::Priority(_) => FrameKind::Priority,
            Frame::CancelPush { .. } => FrameKind::CancelPush,
            Frame::Settings(_) => FrameKind::Settings,
            Frame::PushPromise { .. } => FrameKind::PushPromise,
            Frame::Goaway { .. } => FrameKind::Goaway,
            Frame::MaxPushId { .. } => FrameKind::MaxPushId,
            Frame::DuplicatePush { .. } => FrameKind::DuplicatePush,
        }
    }

    /// Decodes one frame, skipping over unknown types. On `Incomplete` the
    /// source cursor is unchanged, so the caller retries once more bytes
    /// arrive; on success exactly the frame's bytes have been consumed.
    pub fn decode<B: Buf>(src: &mut B) -> H3Result<Frame> {
        loop {
            let (result, consumed) = {
                let mut lookahead = Lookahead::new(&*src);
                let result = Frame::decode_single(&mut lookahead);
                (result, lookahead.consumed())
            };
            match result {
                Ok(frame) => {
                    src.advance(consumed);
                    log::trace!("decoded {:?} frame, {} bytes", frame.kind(), consumed);
                    return Ok(frame);
                }
                Err(H3Error::Delegate) => {
                    src.advance(consumed);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Decodes the next recognized frame type without consuming anything,
    /// skipping unknown frames in between. Used to classify streams.
    pub fn peek<B: Buf>(src: &B) -> H3Result<FrameKind> {
        let mut lookahead = Lookahead::new(src);
        loop {
            let frame_type = varint::decode(&mut lookahead)?;
            if let Some(kind) = FrameKind::from_type(frame_type) {
                return Ok(kind);
            }
            let payload_size = varint::decode(&mut lookahead)?;
            if payload_size > lookahead.remaining() as u64 {
                return Err(H3Error::Incomplete);
            }
            lookahead.advance(payload_size as usize);
        }
    }

    fn decode_single<B: Buf>(lookahead: &mut Lookahead<B>) -> H3Result<Frame> {
        let frame_type = varint::decode(lookahead)?;
        let payload_size = varint::decode(lookahead)?;

        let kind = match FrameKind::from_type(frame_type) {
            Some(kind) => kind,
            None => {
                // Unknown types are legal; skip the whole payload and let
                // the caller loop.
                if payload_size > lookahead.remaining() as u64 {
                    return Err(H3Error::Incomplete);
                }
                log::trace!("skipping unknown frame type 0x{:x}", frame_type);
                lookahead.advance(payload_size as usize);
                return Err(H3Error::Delegate);
            }
        };

        let before = lookahead.consumed();
        // How much of the advertised payload `decode_single` itself reads;
        // streamed payloads are left to the stream machines.
        let mut expected = payload_size;

        let frame = match kind {
            FrameKind::Data => {
                expected = 0;
                Frame::Data { size: payload_size }
            }
            FrameKind::Headers => {
                expected = 0;
                Frame::Headers { size: payload_size }
            }
            FrameKind::Priority => {
                let byte = decode_u8(lookahead)?;
                let prioritized_element_type = ElementType::from_bits(byte >> 6);
                let element_dependency_type = ElementType::from_bits(byte >> 4);
                let prioritized_element_id = varint::decode(lookahead)?;
                let element_dependency_id = varint::decode(lookahead)?;
                let weight = decode_u8(lookahead)?;
                Frame::Priority(Priority {
                    prioritized_element_type,
                    element_dependency_type,
                    prioritized_element_id,
                    element_dependency_id,
                    weight,
                })
            }
            FrameKind::CancelPush => Frame::CancelPush {
                push_id: varint::decode(lookahead)?,
            },
            FrameKind::Settings => {
                let mut settings = Settings::default();
                while ((lookahead.consumed() - before) as u64) < payload_size {
                    let id = varint::decode(lookahead)?;
                    let value = varint::decode(lookahead)?;
                    match id {
                        SETTINGS_MAX_HEADER_LIST_SIZE => settings.max_header_list_size = value,
                        SETTINGS_NUM_PLACEHOLDERS => settings.num_placeholders = value,
                        SETTINGS_QPACK_MAX_TABLE_CAPACITY => {
                            settings.qpack_max_table_capacity = value
                        }
                        SETTINGS_QPACK_BLOCKED_STREAMS => settings.qpack_blocked_streams = value,
                        _ => log::trace!("ignoring unknown setting 0x{:x}", id),
                    }
                }
                Frame::Settings(settings)
            }
            FrameKind::PushPromise => {
                let push_id = varint::decode(lookahead)?;
                let id_size = (lookahead.consumed() - before) as u64;
                if id_size > payload_size {
                    // the mismatch check below rejects the frame
                    Frame::PushPromise { push_id, size: 0 }
                } else {
                    expected = id_size;
                    Frame::PushPromise {
                        push_id,
                        size: payload_size - id_size,
                    }
                }
            }
            FrameKind::Goaway => Frame::Goaway {
                stream_id: varint::decode(lookahead)?,
            },
            FrameKind::MaxPushId => Frame::MaxPushId {
                push_id: varint::decode(lookahead)?,
            },
            FrameKind::DuplicatePush => Frame::DuplicatePush {
                push_id: varint::decode(lookahead)?,
            },
        };

        let actual = (lookahead.consumed() - before) as u64;
        if actual != expected {
            log::debug!(
                "frame payload length {} does not match its advertised length {}",
                actual,
                payload_size
            );
            return Err(H3Error::MalformedFrame);
        }

        Ok(frame)
    }

    /// The advertised payload length, streamed block bytes included.
    pub fn payload_size(&self) -> H3Result<u64> {
        let size = match self {
            Frame::Data { size } => *size,
            Frame::Headers { size } => *size,
            Frame::Priority(priority) => {
                // element type byte + two ids + weight
                let mut size = 2;
                size += varint::encoded_size(priority.prioritized_element_id)? as u64;
                size += varint::encoded_size(priority.element_dependency_id)? as u64;
                size
            }
            Frame::CancelPush { push_id } => varint::encoded_size(*push_id)? as u64,
            Frame::Settings(settings) => {
                let mut size = 0;
                for (id, value) in settings.pairs() {
                    size += varint::encoded_size(id)? as u64;
                    size += varint::encoded_size(value)? as u64;
                }
                size
            }
            Frame::PushPromise { push_id, size } => {
                varint::encoded_size(*push_id)? as u64 + size
            }
            Frame::Goaway { stream_id } => varint::encoded_size(*stream_id)? as u64,
            Frame::MaxPushId { push_id } => varint::encoded_size(*push_id)? as u64,
            Frame::DuplicatePush { push_id } => varint::encoded_size(*push_id)? as u64,
        };
        Ok(size)
    }

    /// Bytes `encode` itself writes: the envelope plus any non-streamed
    /// payload.
    pub fn encoded_size(&self) -> H3Result<usize> {
        let payload_size = self.payload_size()?;
        let written = match self {
            Frame::Data { .. } | Frame::Headers { .. } => 0,
            Frame::PushPromise { push_id, .. } => varint::encoded_size(*push_id)?,
            _ => payload_size as usize,
        };
        Ok(varint::encoded_size(self.kind().type_id())?
            + varint::encoded_size(payload_size)?
            + written)
    }

    pub fn encode<B: BufMut>(&self, dst: &mut B) -> H3Result<usize> {
        let mut size = varint::encode(dst, self.kind().type_id())?;
        size += varint::encode(dst, self.payload_size()?)?;

        match self {
            Frame::Data { .. } | Frame::Headers { .. } => {}
            Frame::Priority(priority) => {
                let byte = (priority.prioritized_element_type.bits() << 6
                    | priority.element_dependency_type.bits() << 4)
                    & 0xf0;
                size += dst.put_u8(byte);
                size += varint::encode(dst, priority.prioritized_element_id)?;
                size += varint::encode(dst, priority.element_dependency_id)?;
                size += dst.put_u8(priority.weight);
            }
            Frame::CancelPush { push_id } => {
                size += varint::encode(dst, *push_id)?;
            }
            Frame::Settings(settings) => {
                for (id, value) in settings.pairs() {
                    size += varint::encode(dst, id)?;
                    size += varint::encode(dst, value)?;
                }
            }
            Frame::PushPromise { push_id, .. } => {
                size += varint::encode(dst, *push_id)?;
            }
            Frame::Goaway { stream_id } => {
                size += varint::encode(dst, *stream_id)?;
            }
            Frame::MaxPushId { push_id } => {
                size += varint::encode(dst, *push_id)?;
            }
            Frame::DuplicatePush { push_id } => {
                size += varint::encode(dst, *push_id)?;
            }
        }

        log::trace!("encoded {:?} frame, {} bytes", self.kind(), size);
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementType, Frame, FrameKind, Priority};
    use crate::codec::varint;
    use crate::{Binary, BinaryQueue, Buf, H3Error, Settings};

    fn roundtrip(frame: Frame) {
        let mut encoded = vec![];
        let size = frame.encode(&mut encoded).unwrap();
        assert_eq!(size, encoded.len());
        assert_eq!(frame.encoded_size().unwrap(), size);
        let mut src = &encoded[..];
        assert_eq!(Frame::decode(&mut src).unwrap(), frame);
        assert!(!src.has_remaining());
    }

    #[test]
    fn roundtrip_every_variant() {
        roundtrip(Frame::Data { size: 12345 });
        roundtrip(Frame::Headers { size: 0 });
        roundtrip(Frame::Priority(Priority {
            prioritized_element_type: ElementType::PushStream,
            element_dependency_type: ElementType::RootOfTree,
            prioritized_element_id: 16384,
            element_dependency_id: 5,
            weight: 77,
        }));
        roundtrip(Frame::CancelPush { push_id: 64 });
        roundtrip(Frame::Settings(Settings {
            max_header_list_size: 16384,
            num_placeholders: 13,
            qpack_max_table_capacity: 0,
            qpack_blocked_streams: 0,
        }));
        roundtrip(Frame::PushPromise {
            push_id: 3,
            size: 57,
        });
        roundtrip(Frame::Goaway { stream_id: 444 });
        roundtrip(Frame::MaxPushId { push_id: 1 << 40 });
        roundtrip(Frame::DuplicatePush { push_id: 0 });
    }

    #[test]
    fn data_payload_not_buffered() {
        // the declared size is carried, the bytes stay in the source
        let mut encoded = vec![];
        Frame::Data { size: 4 }.encode(&mut encoded).unwrap();
        encoded.extend_from_slice(b"body");
        let mut src = &encoded[..];
        assert_eq!(Frame::decode(&mut src).unwrap(), Frame::Data { size: 4 });
        assert_eq!(src, &b"body"[..]);
    }

    #[test]
    fn settings_unknown_id_ignored() {
        let mut encoded = vec![];
        varint::encode(&mut encoded, 0x4).unwrap();
        let mut payload = vec![];
        varint::encode(&mut payload, 0x6).unwrap();
        varint::encode(&mut payload, 16384).unwrap();
        varint::encode(&mut payload, 0x9999).unwrap();
        varint::encode(&mut payload, 1).unwrap();
        varint::encode(&mut encoded, payload.len() as u64).unwrap();
        encoded.extend_from_slice(&payload);

        match Frame::decode(&mut &encoded[..]).unwrap() {
            Frame::Settings(settings) => {
                assert_eq!(settings.max_header_list_size, 16384);
                assert_eq!(settings.num_placeholders, 0);
            }
            other => panic!("expected settings, got {:?}", other),
        }
    }

    #[test]
    fn incomplete_keeps_cursor() {
        let mut encoded = vec![];
        Frame::Goaway { stream_id: 15248 }.encode(&mut encoded).unwrap();
        let mut queue = BinaryQueue::new();
        for byte in &encoded[..encoded.len() - 1] {
            queue.push(Binary::from(&[*byte][..]));
            assert_eq!(Frame::decode(&mut queue), Err(H3Error::Incomplete));
            assert_eq!(queue.consumed(), 0);
        }
        queue.push(Binary::from(&encoded[encoded.len() - 1..]));
        assert_eq!(
            Frame::decode(&mut queue).unwrap(),
            Frame::Goaway { stream_id: 15248 }
        );
        assert_eq!(queue.consumed(), encoded.len());
    }

    #[test]
    fn payload_length_mismatch() {
        // GOAWAY advertising five payload bytes whose id takes only one
        let encoded = [0x06u8, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(
            Frame::decode(&mut &encoded[..]),
            Err(H3Error::MalformedFrame)
        );
    }

    #[test]
    fn unknown_frame_skipped() {
        let mut encoded = vec![];
        varint::encode(&mut encoded, 0x21).unwrap();
        varint::encode(&mut encoded, 3).unwrap();
        encoded.extend_from_slice(b"xyz");
        Frame::MaxPushId { push_id: 9 }.encode(&mut encoded).unwrap();

        let mut src = &encoded[..];
        assert_eq!(
            Frame::decode(&mut src).unwrap(),
            Frame::MaxPushId { push_id: 9 }
        );
        assert!(!src.has_remaining());
    }

    #[test]
    fn peek_skips_unknown_without_consuming() {
        let mut encoded = vec![];
        varint::encode(&mut encoded, 0x21).unwrap();
        varint::encode(&mut encoded, 2).unwrap();
        encoded.extend_from_slice(b"zz");
        Frame::Settings(Settings::default()).encode(&mut encoded).unwrap();

        let src = &encoded[..];
        assert_eq!(Frame::peek(&src).unwrap(), FrameKind::Settings);
        assert_eq!(src.len(), encoded.len());
    }
}
