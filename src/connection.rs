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
// Created Date: 2023/09/19 09:30:27

use std::collections::BTreeMap;

use crate::stream::{control, request, Role};
use crate::{quic, Event, H3Error, H3Result, Settings};

// First unidirectional stream of each role carries its control data.
const CLIENT_CONTROL_STREAM_ID: u64 = 2;
const SERVER_CONTROL_STREAM_ID: u64 = 3;

type RequestPair = (request::Sender, request::Receiver);

/// One HTTP/3 connection end. Owns the control stream pair and every
/// request stream, fans inbound transport events to the right machine and
/// drains outbound data one event per `send` call.
///
/// The connection is sans-I/O: the embedding transport pumps `send` until
/// `Idle` and feeds `recv` as stream data arrives.
pub struct Connection {
    role: Role,
    local: Settings,
    peer: Settings,
    control: (control::Sender, control::Receiver),
    requests: BTreeMap<u64, RequestPair>,
    next_request_id: u64,
}

impl Connection {
    pub fn client(settings: Settings) -> Connection {
        Connection::new(
            Role::Client,
            settings,
            CLIENT_CONTROL_STREAM_ID,
            SERVER_CONTROL_STREAM_ID,
        )
    }

    pub fn server(settings: Settings) -> Connection {
        Connection::new(
            Role::Server,
            settings,
            SERVER_CONTROL_STREAM_ID,
            CLIENT_CONTROL_STREAM_ID,
        )
    }

    fn new(role: Role, settings: Settings, send_id: u64, recv_id: u64) -> Connection {
        Connection {
            role,
            local: settings,
            peer: Settings::default(),
            control: (
                control::Sender::new(send_id, settings),
                control::Receiver::new(recv_id, role),
            ),
            requests: BTreeMap::new(),
            next_request_id: 0,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn local_settings(&self) -> &Settings {
        &self.local
    }

    /// The peer's settings; defaults until its SETTINGS frame arrives.
    pub fn peer_settings(&self) -> &Settings {
        &self.peer
    }

    /// Returns the next outbound transport event: control stream output
    /// first, then request streams in ascending id order. `Err(Idle)` when
    /// nothing can make progress.
    pub fn send(&mut self) -> H3Result<quic::Data> {
        match self.control.0.send() {
            Ok(data) => return Ok(data),
            Err(H3Error::Idle) => {}
            Err(err) => return Err(err),
        }

        let ids: Vec<u64> = self.requests.keys().copied().collect();
        for id in ids {
            if let Some(pair) = self.requests.get_mut(&id) {
                if pair.0.finished() && pair.1.finished() {
                    self.requests.remove(&id);
                    continue;
                }
                match pair.0.send() {
                    Ok(data) => return Ok(data),
                    Err(H3Error::Idle) => {}
                    Err(err) => {
                        self.requests.remove(&id);
                        return Err(err);
                    }
                }
            }
        }

        Err(H3Error::Idle)
    }

    /// Feeds one transport event in. Per-stream failures surface as
    /// `Event::Error` on that stream and free its record; only control
    /// stream failures are returned, taking the connection down.
    pub fn recv<F: FnMut(Event)>(&mut self, event: quic::Event, handler: &mut F) -> H3Result<()> {
        match event {
            quic::Event::Data(data) => {
                if data.id == self.control.1.id() {
                    // keep a copy of the peer's settings before the
                    // application sees them
                    let peer = &mut self.peer;
                    let control = &mut self.control.1;
                    control.recv(data, &mut |event: Event| {
                        if let Event::Settings { settings, .. } = &event {
                            *peer = *settings;
                        }
                        handler(event);
                    })
                } else {
                    self.recv_request(data, handler)
                }
            }
            quic::Event::Error(error) => {
                if error.id == self.control.1.id() {
                    log::debug!("control stream reset with code {}", error.code);
                    return Err(H3Error::ClosedCriticalStream);
                }
                log::debug!("stream {} reset with code {}", error.id, error.code);
                if self.requests.remove(&error.id).is_some() {
                    handler(Event::Error {
                        id: error.id,
                        error: H3Error::StreamClosed,
                    });
                }
                Ok(())
            }
        }
    }

    fn recv_request<F: FnMut(Event)>(
        &mut self,
        data: quic::Data,
        handler: &mut F,
    ) -> H3Result<()> {
        let id = data.id;
        if !self.requests.contains_key(&id) {
            match self.role {
                // a server sees new request streams as the peer opens them
                Role::Server => {
                    let pair = (request::Sender::new(id), request::Receiver::new(id, self.role));
                    self.requests.insert(id, pair);
                }
                // a client only receives on streams it opened itself
                Role::Client => {
                    handler(Event::Error {
                        id,
                        error: H3Error::StreamClosed,
                    });
                    return Ok(());
                }
            }
        }
        if let Some(pair) = self.requests.get_mut(&id) {
            match pair.1.recv(data, handler) {
                Ok(()) => {}
                Err(err) if err.is_connection_fatal() => return Err(err),
                Err(err) => {
                    handler(Event::Error { id, error: err });
                    self.requests.remove(&id);
                }
            }
        }
        Ok(())
    }

    /// Opens a new request stream (client only) and returns its id.
    pub fn open_request(&mut self) -> H3Result<u64> {
        match self.role {
            Role::Client => {}
            Role::Server => return Err(H3Error::InvalidArgument),
        }
        let id = self.next_request_id;
        self.next_request_id += 4;
        let pair = (request::Sender::new(id), request::Receiver::new(id, self.role));
        self.requests.insert(id, pair);
        Ok(id)
    }

    /// The sender half of a request stream the client opened.
    pub fn request(&mut self, id: u64) -> H3Result<&mut request::Sender> {
        match self.role {
            Role::Client => self.sender(id),
            Role::Server => Err(H3Error::InvalidArgument),
        }
    }

    /// The sender half for responding to a request the server received.
    pub fn response(&mut self, id: u64) -> H3Result<&mut request::Sender> {
        match self.role {
            Role::Server => self.sender(id),
            Role::Client => Err(H3Error::InvalidArgument),
        }
    }

    fn sender(&mut self, id: u64) -> H3Result<&mut request::Sender> {
        match self.requests.get_mut(&id) {
            Some(pair) => Ok(&mut pair.0),
            None => Err(H3Error::StreamClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Connection;
    use crate::{quic, Binary, Event, H3Error, Settings};

    #[test]
    fn send_idle_when_drained() {
        let mut client = Connection::client(Settings::default());
        // first the control stream flushes its settings
        let control = client.send().unwrap();
        assert_eq!(control.id, 2);
        assert_eq!(client.send(), Err(H3Error::Idle));
    }

    #[test]
    fn requests_sent_in_ascending_order() {
        let mut server = Connection::server(Settings::default());
        let _ = server.send().unwrap();

        // responses pushed out of order still drain 4 first, then 8
        server.requests.insert(
            8,
            (
                crate::stream::request::Sender::new(8),
                crate::stream::request::Receiver::new(8, crate::Role::Server),
            ),
        );
        server.requests.insert(
            4,
            (
                crate::stream::request::Sender::new(4),
                crate::stream::request::Receiver::new(4, crate::Role::Server),
            ),
        );
        for id in [4u64, 8] {
            let sender = server.response(id).unwrap();
            sender.header(":status", "200").unwrap();
            sender.fin().unwrap();
        }

        assert_eq!(server.send().unwrap().id, 4);
        assert_eq!(server.send().unwrap().id, 8);
        assert_eq!(server.send(), Err(H3Error::Idle));
    }

    #[test]
    fn transport_error_frees_stream() {
        let mut client = Connection::client(Settings::default());
        let id = client.open_request().unwrap();
        let mut events = vec![];
        client
            .recv(
                quic::Event::Error(quic::StreamError { id, code: 0x10c }),
                &mut |event| events.push(event),
            )
            .unwrap();
        match &events[..] {
            [Event::Error { id: event_id, error }] => {
                assert_eq!(*event_id, id);
                assert_eq!(*error, H3Error::StreamClosed);
            }
            other => panic!("unexpected events {:?}", other),
        }
        assert!(client.request(id).is_err());
    }

    #[test]
    fn transport_error_on_control_is_fatal() {
        let mut client = Connection::client(Settings::default());
        let result = client.recv(
            quic::Event::Error(quic::StreamError { id: 3, code: 1 }),
            &mut |_| {},
        );
        assert_eq!(result, Err(H3Error::ClosedCriticalStream));
    }

    #[test]
    fn client_rejects_unknown_stream() {
        let mut client = Connection::client(Settings::default());
        let mut events = vec![];
        client
            .recv(
                quic::Event::Data(quic::Data {
                    id: 12,
                    fin: false,
                    buffer: Binary::from(&b"\x01\x00"[..]),
                }),
                &mut |event| events.push(event),
            )
            .unwrap();
        match &events[..] {
            [Event::Error { id, error }] => {
                assert_eq!(*id, 12);
                assert_eq!(*error, H3Error::StreamClosed);
            }
            other => panic!("unexpected events {:?}", other),
        }
    }
}
