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
// Created Date: 2023/09/18 02:40:19

use super::Role;
use crate::codec::{frame::Frame, varint};
use crate::{
    quic, Anchor, Binary, BinaryMut, BinaryQueue, Discarder, Event, H3Error, H3Result, Settings,
};

/// Stream-type preface carried by every control stream. The preface crosses
/// the transport boundary on both sides: the sender writes it and the
/// receiver strips it.
pub(crate) const CONTROL_STREAM_TYPE: u64 = 0x0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SenderState {
    Settings,
    Idle,
    Error,
}

/// Our half of the control stream. All it ever carries is the preface and
/// the local SETTINGS; after that it idles forever.
pub struct Sender {
    id: u64,
    state: SenderState,
    settings: Settings,
}

impl Sender {
    pub fn new(id: u64, settings: Settings) -> Sender {
        Sender {
            id,
            state: SenderState::Settings,
            settings,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn send(&mut self) -> H3Result<quic::Data> {
        match self.state {
            SenderState::Settings => match self.encode_settings() {
                Ok(buffer) => {
                    self.state = SenderState::Idle;
                    log::debug!("control stream {} sent settings", self.id);
                    Ok(quic::Data {
                        id: self.id,
                        fin: false,
                        buffer,
                    })
                }
                Err(err) => {
                    self.state = SenderState::Error;
                    Err(err)
                }
            },
            SenderState::Idle => Err(H3Error::Idle),
            SenderState::Error => Err(H3Error::StreamClosed),
        }
    }

    fn encode_settings(&self) -> H3Result<Binary> {
        let frame = Frame::Settings(self.settings);
        let mut dst = BinaryMut::with_capacity(1 + frame.encoded_size()?);
        varint::encode(&mut dst, CONTROL_STREAM_TYPE)?;
        frame.encode(&mut dst)?;
        Ok(dst.freeze())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReceiverState {
    Settings,
    Active,
    Error,
}

/// The peer's control stream. The first frame after the preface must be
/// SETTINGS; afterwards only connection-level frames belong here, filtered
/// by role.
pub struct Receiver {
    id: u64,
    role: Role,
    state: ReceiverState,
    buffers: BinaryQueue,
}

impl Receiver {
    pub fn new(id: u64, role: Role) -> Receiver {
        Receiver {
            id,
            role,
            state: ReceiverState::Settings,
            buffers: BinaryQueue::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn recv<F: FnMut(Event)>(&mut self, data: quic::Data, handler: &mut F) -> H3Result<()> {
        if let ReceiverState::Error = self.state {
            return Err(H3Error::StreamClosed);
        }
        debug_assert_eq!(data.id, self.id);
        let fin = data.fin;
        self.buffers.push(data.buffer);
        match self.process(handler) {
            Err(H3Error::Incomplete) => {
                if fin {
                    // the control stream must outlive the connection
                    self.state = ReceiverState::Error;
                    Err(H3Error::ClosedCriticalStream)
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
        let mut queue = Discarder::new(&mut self.buffers);
        loop {
            match *state {
                ReceiverState::Settings => {
                    // preface and first frame parse as one unit; the anchor
                    // rewinds both when the frame is still short
                    let mut anchor = Anchor::new(&mut *queue);
                    let stream_type = varint::decode(&mut *anchor)?;
                    if stream_type != CONTROL_STREAM_TYPE {
                        return Err(H3Error::WrongStream);
                    }
                    let frame = Frame::decode(&mut *anchor)?;
                    anchor.release();
                    match frame {
                        Frame::Settings(settings) => {
                            log::debug!("control stream {} received settings", id);
                            handler(Event::Settings { id, settings });
                            *state = ReceiverState::Active;
                        }
                        frame => {
                            log::debug!(
                                "control stream {} opened with {:?} instead of settings",
                                id,
                                frame.kind()
                            );
                            return Err(H3Error::MissingSettings);
                        }
                    }
                }
                ReceiverState::Active => {
                    let frame = Frame::decode(&mut *queue)?;
                    match frame {
                        Frame::Settings(_) => return Err(H3Error::UnexpectedFrame),
                        Frame::Goaway { stream_id } => match role {
                            Role::Client => handler(Event::Goaway { id, stream_id }),
                            Role::Server => return Err(H3Error::WrongStream),
                        },
                        Frame::CancelPush { push_id } => match role {
                            Role::Client => {
                                log::debug!("ignoring CANCEL_PUSH for push {}", push_id)
                            }
                            Role::Server => return Err(H3Error::WrongStream),
                        },
                        Frame::MaxPushId { push_id } => match role {
                            Role::Server => log::debug!("ignoring MAX_PUSH_ID {}", push_id),
                            Role::Client => return Err(H3Error::WrongStream),
                        },
                        Frame::Priority(_) => match role {
                            Role::Server => log::debug!("ignoring PRIORITY on control stream"),
                            Role::Client => return Err(H3Error::WrongStream),
                        },
                        _ => return Err(H3Error::UnexpectedFrame),
                    }
                }
                ReceiverState::Error => return Err(H3Error::StreamClosed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Receiver, Sender};
    use crate::codec::frame::Frame;
    use crate::{quic, Binary, Buf, Event, H3Error, Role, Settings};

    fn data(id: u64, bytes: Binary) -> quic::Data {
        quic::Data {
            id,
            fin: false,
            buffer: bytes,
        }
    }

    #[test]
    fn sender_emits_preface_then_settings() {
        let mut sender = Sender::new(3, Settings::default());
        let out = sender.send().unwrap();
        assert_eq!(out.id, 3);
        assert!(!out.fin);
        assert_eq!(out.buffer.as_slice()[0], 0x00);
        let mut rest = &out.buffer.as_slice()[1..];
        assert_eq!(
            Frame::decode(&mut rest).unwrap(),
            Frame::Settings(Settings::default())
        );
        assert!(!rest.has_remaining());
        assert_eq!(sender.send(), Err(H3Error::Idle));
    }

    #[test]
    fn receiver_settings_flow() {
        let mut sender = Sender::new(3, Settings::default());
        let out = sender.send().unwrap();

        let mut receiver = Receiver::new(3, Role::Client);
        let mut events = vec![];
        receiver
            .recv(data(3, out.buffer), &mut |event| events.push(event))
            .unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Event::Settings { id, settings } => {
                assert_eq!(*id, 3);
                assert_eq!(*settings, Settings::default());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn receiver_byte_by_byte() {
        let mut sender = Sender::new(3, Settings::default());
        let bytes = sender.send().unwrap().buffer;

        let mut receiver = Receiver::new(3, Role::Client);
        let mut events = vec![];
        for byte in bytes.as_slice() {
            receiver
                .recv(data(3, Binary::from(&[*byte][..])), &mut |event| {
                    events.push(event)
                })
                .unwrap();
        }
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn first_frame_must_be_settings() {
        let mut buffer = vec![0x00u8];
        Frame::Goaway { stream_id: 0 }.encode(&mut buffer).unwrap();
        let mut receiver = Receiver::new(3, Role::Client);
        assert_eq!(
            receiver.recv(data(3, Binary::from(buffer)), &mut |_| {}),
            Err(H3Error::MissingSettings)
        );
    }

    #[test]
    fn settings_twice_rejected() {
        let mut buffer = vec![0x00u8];
        let settings = Frame::Settings(Settings::default());
        settings.encode(&mut buffer).unwrap();
        settings.encode(&mut buffer).unwrap();
        let mut receiver = Receiver::new(3, Role::Client);
        assert_eq!(
            receiver.recv(data(3, Binary::from(buffer)), &mut |_| {}),
            Err(H3Error::UnexpectedFrame)
        );
    }

    #[test]
    fn wrong_stream_type_rejected() {
        let mut buffer = vec![0x03u8];
        Frame::Settings(Settings::default())
            .encode(&mut buffer)
            .unwrap();
        let mut receiver = Receiver::new(3, Role::Client);
        assert_eq!(
            receiver.recv(data(3, Binary::from(buffer)), &mut |_| {}),
            Err(H3Error::WrongStream)
        );
    }

    #[test]
    fn fin_is_fatal() {
        let mut sender = Sender::new(3, Settings::default());
        let bytes = sender.send().unwrap().buffer;
        let mut receiver = Receiver::new(3, Role::Client);
        let event = quic::Data {
            id: 3,
            fin: true,
            buffer: bytes,
        };
        assert_eq!(
            receiver.recv(event, &mut |_| {}),
            Err(H3Error::ClosedCriticalStream)
        );
    }

    #[test]
    fn role_filters() {
        // server must not receive GOAWAY on its peer's control stream
        let mut buffer = vec![0x00u8];
        Frame::Settings(Settings::default())
            .encode(&mut buffer)
            .unwrap();
        Frame::Goaway { stream_id: 4 }.encode(&mut buffer).unwrap();
        let mut receiver = Receiver::new(2, Role::Server);
        assert_eq!(
            receiver.recv(data(2, Binary::from(buffer)), &mut |_| {}),
            Err(H3Error::WrongStream)
        );

        // client must not receive MAX_PUSH_ID
        let mut buffer = vec![0x00u8];
        Frame::Settings(Settings::default())
            .encode(&mut buffer)
            .unwrap();
        Frame::MaxPushId { push_id: 1 }.encode(&mut buffer).unwrap();
        let mut receiver = Receiver::new(3, Role::Client);
        assert_eq!(
            receiver.recv(data(3, Binary::from(buffer)), &mut |_| {}),
            Err(H3Error::WrongStream)
        );
    }
}
