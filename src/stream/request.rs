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
// Created Date: 2023/09/18 08:55:41

use std::collections::VecDeque;

use super::Role;
use crate::codec::{frame::Frame, qpack};
use crate::{
    quic, Binary, BinaryMut, BinaryQueue, Discarder, Event, H3Error, H3Result, Header,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SenderState {
    Headers,
    Body,
    Fin,
    Error,
}

/// Our half of one request/response exchange. The application queues one
/// header block, any number of body buffers and a fin; `send` drains them
/// one frame at a time.
pub struct Sender {
    id: u64,
    state: SenderState,
    headers: Vec<Header>,
    sealed: bool,
    bodies: VecDeque<Binary>,
    fin_pending: bool,
}

impl Sender {
    pub fn new(id: u64) -> Sender {
        Sender {
            id,
            state: SenderState::Headers,
            headers: vec![],
            sealed: false,
            bodies: VecDeque::new(),
            fin_pending: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Queues one header field. Only legal until the block is sealed by the
    /// first `body` or by `fin`.
    pub fn header(&mut self, name: &str, value: &str) -> H3Result<()> {
        match self.state {
            SenderState::Headers if !self.sealed => {
                if !Header::name_is_lowercase(name.as_bytes()) {
                    return Err(H3Error::MalformedHeader);
                }
                self.headers.push((name, value).into());
                Ok(())
            }
            _ => Err(H3Error::StreamClosed),
        }
    }

    pub fn body(&mut self, buffer: Binary) -> H3Result<()> {
        self.seal()?;
        self.bodies.push_back(buffer);
        Ok(())
    }

    pub fn fin(&mut self) -> H3Result<()> {
        self.seal()?;
        self.fin_pending = true;
        Ok(())
    }

    fn seal(&mut self) -> H3Result<()> {
        match self.state {
            SenderState::Fin | SenderState::Error => return Err(H3Error::StreamClosed),
            _ => {}
        }
        if self.fin_pending {
            return Err(H3Error::StreamClosed);
        }
        if !self.sealed {
            // a request or response without headers is not a thing
            if self.headers.is_empty() {
                return Err(H3Error::InvalidArgument);
            }
            self.sealed = true;
        }
        Ok(())
    }

    pub fn finished(&self) -> bool {
        match self.state {
            SenderState::Fin => true,
            _ => false,
        }
    }

    /// Produces at most one outbound event per call, `Err(Idle)` once all
    /// queued output has been drained.
    pub fn send(&mut self) -> H3Result<quic::Data> {
        match self.state {
            SenderState::Headers => {
                if !self.sealed {
                    return Err(H3Error::Idle);
                }
                let buffer = match self.encode_headers() {
                    Ok(buffer) => buffer,
                    Err(err) => {
                        self.state = SenderState::Error;
                        return Err(err);
                    }
                };
                let fin = self.fin_pending && self.bodies.is_empty();
                self.state = if fin {
                    SenderState::Fin
                } else {
                    SenderState::Body
                };
                Ok(quic::Data {
                    id: self.id,
                    fin,
                    buffer,
                })
            }
            SenderState::Body => {
                if let Some(body) = self.bodies.pop_front() {
                    let buffer = match self.encode_data(body) {
                        Ok(buffer) => buffer,
                        Err(err) => {
                            self.state = SenderState::Error;
                            return Err(err);
                        }
                    };
                    let fin = self.fin_pending && self.bodies.is_empty();
                    if fin {
                        self.state = SenderState::Fin;
                    }
                    Ok(quic::Data {
                        id: self.id,
                        fin,
                        buffer,
                    })
                } else if self.fin_pending {
                    self.state = SenderState::Fin;
                    Ok(quic::Data {
                        id: self.id,
                        fin: true,
                        buffer: Binary::new(),
                    })
                } else {
                    Err(H3Error::Idle)
                }
            }
            SenderState::Fin => Err(H3Error::Idle),
            SenderState::Error => Err(H3Error::StreamClosed),
        }
    }

    fn encode_headers(&mut self) -> H3Result<Binary> {
        let mut block = BinaryMut::new();
        qpack::encode_block(&mut block, &self.headers)?;
        let frame = Frame::Headers {
            size: block.len() as u64,
        };
        let mut dst = BinaryMut::with_capacity(frame.encoded_size()? + block.len());
        frame.encode(&mut dst)?;
        dst.put(block);
        self.headers.clear();
        log::trace!("request stream {} sending header block", self.id);
        Ok(dst.freeze())
    }

    fn encode_data(&self, body: Binary) -> H3Result<Binary> {
        let frame = Frame::Data {
            size: body.len() as u64,
        };
        let mut dst = BinaryMut::with_capacity(frame.encoded_size()? + body.len());
        frame.encode(&mut dst)?;
        dst.put(body);
        Ok(dst.freeze())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReceiverState {
    Headers,
    HeaderBlock { size: usize },
    Body,
    DataChunk { remaining: u64 },
    Fin,
    Error,
}

/// The peer's half of one exchange. Frames stream straight through: header
/// blocks are decoded once the declared length is buffered, DATA payloads
/// flow out chunk by chunk as they arrive.
pub struct Receiver {
    id: u64,
    role: Role,
    state: ReceiverState,
    buffers: BinaryQueue,
    fin: bool,
    trailers: bool,
}

impl Receiver {
    pub fn new(id: u64, role: Role) -> Receiver {
        Receiver {
            id,
            role,
            state: ReceiverState::Headers,
            buffers: BinaryQueue::new(),
            fin: false,
            trailers: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn finished(&self) -> bool {
        match self.state {
            ReceiverState::Fin => true,
            _ => false,
        }
    }

    pub fn recv<F: FnMut(Event)>(&mut self, data: quic::Data, handler: &mut F) -> H3Result<()> {
        match self.state {
            ReceiverState::Fin | ReceiverState::Error => return Err(H3Error::StreamClosed),
            _ => {}
        }
        debug_assert_eq!(data.id, self.id);
        self.fin |= data.fin;
        self.buffers.push(data.buffer);
        match self.process(handler) {
            Err(H3Error::Incomplete) => {
                if self.fin {
                    let clean = match self.state {
                        ReceiverState::Body => self.buffers.is_empty(),
                        _ => false,
                    };
                    if clean {
                        self.state = ReceiverState::Fin;
                        log::debug!("request stream {} finished", self.id);
                        handler(Event::Finished { id: self.id });
                        Ok(())
                    } else {
                        // fin landed in the middle of a frame
                        self.state = ReceiverState::Error;
                        Err(H3Error::MalformedFrame)
                    }
                } else {
                    Ok(())
                }
            }
            Err(err) => {
                self.state = ReceiverState::Error;
                Err(err)
            }
            Ok(()) => Ok(()),
        }
    }

    fn process<F: FnMut(Event)>(&mut self, handler: &mut F) -> H3Result<()> {
        let id = self.id;
        let role = self.role;
        let state = &mut self.state;
        let trailers = &mut self.trailers;
        let mut queue = Discarder::new(&mut self.buffers);
        loop {
            match *state {
                ReceiverState::Headers => {
                    let frame = Frame::decode(&mut *queue)?;
                    match frame {
                        Frame::Headers { size } => {
                            let size =
                                usize::try_from(size).map_err(|_| H3Error::FrameTooLarge)?;
                            *state = ReceiverState::HeaderBlock { size };
                        }
                        Frame::Priority(_) => match role {
                            Role::Server => {
                                log::debug!("ignoring PRIORITY before headers on stream {}", id)
                            }
                            Role::Client => return Err(H3Error::UnexpectedFrame),
                        },
                        Frame::Data { .. } => return Err(H3Error::UnexpectedFrame),
                        Frame::PushPromise { .. } | Frame::DuplicatePush { .. } => {
                            return Err(match role {
                                Role::Server => H3Error::UnexpectedFrame,
                                Role::Client => H3Error::NotImplemented,
                            })
                        }
                        _ => return Err(H3Error::WrongStream),
                    }
                }
                ReceiverState::HeaderBlock { size } => {
                    if queue.size() < size {
                        return Err(H3Error::Incomplete);
                    }
                    let mut block = queue.slice(size);
                    let headers = qpack::decode_block(&mut block)?;
                    for header in headers {
                        handler(Event::Header { id, header });
                    }
                    *state = ReceiverState::Body;
                }
                ReceiverState::Body => {
                    let frame = Frame::decode(&mut *queue)?;
                    match frame {
                        Frame::Data { size } => {
                            if *trailers {
                                return Err(H3Error::UnexpectedFrame);
                            }
                            if size > 0 {
                                *state = ReceiverState::DataChunk { remaining: size };
                            }
                        }
                        Frame::Headers { size } => {
                            if *trailers {
                                return Err(H3Error::UnexpectedFrame);
                            }
                            *trailers = true;
                            let size =
                                usize::try_from(size).map_err(|_| H3Error::FrameTooLarge)?;
                            *state = ReceiverState::HeaderBlock { size };
                        }
                        Frame::Priority(_) => return Err(H3Error::UnexpectedFrame),
                        Frame::PushPromise { .. } | Frame::DuplicatePush { .. } => {
                            return Err(match role {
                                Role::Server => H3Error::UnexpectedFrame,
                                Role::Client => H3Error::NotImplemented,
                            })
                        }
                        _ => return Err(H3Error::WrongStream),
                    }
                }
                ReceiverState::DataChunk { remaining } => {
                    if queue.is_empty() {
                        return Err(H3Error::Incomplete);
                    }
                    let take = (queue.size() as u64).min(remaining) as usize;
                    let chunk = queue.slice(take);
                    handler(Event::Body { id, buffer: chunk });
                    let left = remaining - take as u64;
                    *state = if left == 0 {
                        ReceiverState::Body
                    } else {
                        ReceiverState::DataChunk { remaining: left }
                    };
                }
                ReceiverState::Fin | ReceiverState::Error => return Err(H3Error::StreamClosed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Receiver, Sender};
    use crate::codec::frame::{ElementType, Frame, Priority};
    use crate::{quic, Binary, Event, H3Error, H3Result, Role};

    fn data(id: u64, bytes: Binary) -> quic::Data {
        quic::Data {
            id,
            fin: false,
            buffer: bytes,
        }
    }

    fn fin(id: u64) -> quic::Data {
        quic::Data {
            id,
            fin: true,
            buffer: Binary::new(),
        }
    }

    fn priority() -> Frame {
        Frame::Priority(Priority {
            prioritized_element_type: ElementType::RequestStream,
            element_dependency_type: ElementType::RootOfTree,
            prioritized_element_id: 0,
            element_dependency_id: 0,
            weight: 16,
        })
    }

    #[test]
    fn sender_emits_headers_then_bodies_then_fin() {
        let mut sender = Sender::new(0);
        assert_eq!(sender.send(), Err(H3Error::Idle));
        sender.header(":method", "GET").unwrap();
        sender.header(":path", "/").unwrap();
        assert_eq!(sender.send(), Err(H3Error::Idle));
        sender.body(Binary::from(&b"hello "[..])).unwrap();
        sender.body(Binary::from(&b"world"[..])).unwrap();
        sender.fin().unwrap();

        let headers = sender.send().unwrap();
        assert!(!headers.fin);
        let first = sender.send().unwrap();
        assert!(!first.fin);
        let second = sender.send().unwrap();
        // fin rides on the last DATA frame
        assert!(second.fin);
        assert!(sender.finished());
        assert_eq!(sender.send(), Err(H3Error::Idle));
    }

    #[test]
    fn sender_headers_only_response() {
        let mut sender = Sender::new(4);
        sender.header(":status", "204").unwrap();
        sender.fin().unwrap();
        let out = sender.send().unwrap();
        assert!(out.fin);
        assert!(sender.finished());
    }

    #[test]
    fn sender_rules() {
        let mut sender = Sender::new(0);
        assert_eq!(sender.fin(), Err(H3Error::InvalidArgument));
        assert_eq!(
            sender.header("X-Bad", "1"),
            Err(H3Error::MalformedHeader)
        );
        sender.header(":status", "200").unwrap();
        sender.body(Binary::from(&b"x"[..])).unwrap();
        // block is sealed now
        assert_eq!(sender.header("late", "1"), Err(H3Error::StreamClosed));
        sender.fin().unwrap();
        assert_eq!(sender.body(Binary::new()), Err(H3Error::StreamClosed));
    }

    fn run(receiver: &mut Receiver, events: Vec<quic::Data>) -> (Vec<Event>, H3Result<()>) {
        let mut seen = vec![];
        for event in events {
            if let Err(err) = receiver.recv(event, &mut |ev| seen.push(ev)) {
                return (seen, Err(err));
            }
        }
        (seen, Ok(()))
    }

    #[test]
    fn receiver_full_exchange() {
        let mut sender = Sender::new(0);
        sender.header(":method", "POST").unwrap();
        sender.header(":path", "/upload").unwrap();
        sender.body(Binary::from(&b"payload"[..])).unwrap();
        sender.fin().unwrap();

        let mut inbound = vec![];
        loop {
            match sender.send() {
                Ok(data) => inbound.push(data),
                Err(err) => {
                    assert_eq!(err, H3Error::Idle);
                    break;
                }
            }
        }

        let mut receiver = Receiver::new(0, Role::Server);
        let (events, result) = run(&mut receiver, inbound);
        result.unwrap();
        assert!(receiver.finished());

        let mut names = vec![];
        let mut body = vec![];
        let mut finished = false;
        for event in events {
            match event {
                Event::Header { header, .. } => {
                    names.push(header.name().to_vec());
                }
                Event::Body { buffer, .. } => body.extend_from_slice(&buffer),
                Event::Finished { .. } => finished = true,
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(names, vec![b":method".to_vec(), b":path".to_vec()]);
        assert_eq!(body, b"payload");
        assert!(finished);
    }

    #[test]
    fn receiver_streams_data_chunks() {
        let mut sender = Sender::new(0);
        sender.header(":method", "POST").unwrap();
        sender.body(Binary::from(&b"0123456789"[..])).unwrap();
        sender.fin().unwrap();

        let headers = sender.send().unwrap();
        let body = sender.send().unwrap();

        let mut receiver = Receiver::new(0, Role::Server);
        let mut events = vec![data(0, headers.buffer)];
        // re-chunk the DATA frame byte by byte, fin on the last
        let bytes = body.buffer.as_slice().to_vec();
        for (i, byte) in bytes.iter().enumerate() {
            events.push(quic::Data {
                id: 0,
                fin: i == bytes.len() - 1,
                buffer: Binary::from(&[*byte][..]),
            });
        }
        let (seen, result) = run(&mut receiver, events);
        result.unwrap();
        let mut body = vec![];
        let mut chunks = 0;
        for event in seen {
            if let Event::Body { buffer, .. } = event {
                chunks += 1;
                body.extend_from_slice(&buffer);
            }
        }
        assert_eq!(body, b"0123456789");
        assert!(chunks > 1);
    }

    #[test]
    fn trailers_accepted() {
        let mut sender = Sender::new(0);
        sender.header(":method", "POST").unwrap();
        sender.body(Binary::from(&b"data"[..])).unwrap();
        let headers = sender.send().unwrap();
        let body = sender.send().unwrap();

        // a second HEADERS frame after the body is a trailer block
        let mut trailer_sender = Sender::new(0);
        trailer_sender.header("checksum", "abcd").unwrap();
        trailer_sender.fin().unwrap();
        let trailers = trailer_sender.send().unwrap();

        let mut receiver = Receiver::new(0, Role::Server);
        let (events, result) = run(
            &mut receiver,
            vec![
                data(0, headers.buffer),
                data(0, body.buffer),
                data(0, trailers.buffer),
                fin(0),
            ],
        );
        result.unwrap();
        let headers: Vec<Vec<u8>> = events
            .iter()
            .filter_map(|event| match event {
                Event::Header { header, .. } => Some(header.name().to_vec()),
                _ => None,
            })
            .collect();
        assert_eq!(headers, vec![b":method".to_vec(), b"checksum".to_vec()]);
    }

    #[test]
    fn first_frame_must_be_headers() {
        let mut encoded = vec![];
        Frame::Data { size: 1 }.encode(&mut encoded).unwrap();
        encoded.push(b'x');
        let mut receiver = Receiver::new(0, Role::Server);
        let (_, result) = run(&mut receiver, vec![data(0, Binary::from(encoded))]);
        assert_eq!(result, Err(H3Error::UnexpectedFrame));
    }

    #[test]
    fn priority_only_before_headers_and_server_only() {
        let mut encoded = vec![];
        priority().encode(&mut encoded).unwrap();
        let mut sender = Sender::new(0);
        sender.header(":method", "GET").unwrap();
        sender.fin().unwrap();
        let headers = sender.send().unwrap();

        // server tolerates PRIORITY before the header block
        let mut receiver = Receiver::new(0, Role::Server);
        let (_, result) = run(
            &mut receiver,
            vec![data(0, Binary::from(encoded.clone())), data(0, headers.buffer.clone())],
        );
        result.unwrap();

        // after HEADERS it is a protocol violation
        let mut receiver = Receiver::new(0, Role::Server);
        let (_, result) = run(
            &mut receiver,
            vec![data(0, headers.buffer), data(0, Binary::from(encoded.clone()))],
        );
        assert_eq!(result, Err(H3Error::UnexpectedFrame));

        // and the client never accepts it
        let mut receiver = Receiver::new(0, Role::Client);
        let (_, result) = run(&mut receiver, vec![data(0, Binary::from(encoded))]);
        assert_eq!(result, Err(H3Error::UnexpectedFrame));
    }

    #[test]
    fn fin_mid_frame_is_malformed() {
        let mut sender = Sender::new(0);
        sender.header(":method", "GET").unwrap();
        sender.body(Binary::from(&b"full body"[..])).unwrap();
        let headers = sender.send().unwrap();
        let body = sender.send().unwrap();
        let truncated = Binary::from(&body.buffer.as_slice()[..3]);

        let mut receiver = Receiver::new(0, Role::Server);
        let (_, result) = run(
            &mut receiver,
            vec![
                data(0, headers.buffer),
                quic::Data {
                    id: 0,
                    fin: true,
                    buffer: truncated,
                },
            ],
        );
        assert_eq!(result, Err(H3Error::MalformedFrame));
    }

    #[test]
    fn settings_on_request_stream_rejected() {
        let mut sender = Sender::new(0);
        sender.header(":method", "GET").unwrap();
        sender.fin().unwrap();
        let headers = sender.send().unwrap();
        let mut encoded = vec![];
        Frame::MaxPushId { push_id: 4 }.encode(&mut encoded).unwrap();

        let mut receiver = Receiver::new(0, Role::Server);
        let (_, result) = run(
            &mut receiver,
            vec![data(0, headers.buffer), data(0, Binary::from(encoded))],
        );
        assert_eq!(result, Err(H3Error::WrongStream));
    }
}
