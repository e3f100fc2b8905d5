use h3parse::{quic, Binary, Connection, Event, H3Error, Settings};

fn drain<F: FnMut(quic::Data)>(connection: &mut Connection, mut deliver: F) {
    loop {
        match connection.send() {
            Ok(data) => deliver(data),
            Err(H3Error::Idle) => break,
            Err(err) => panic!("send failed: {}", err),
        }
    }
}

fn pump(from: &mut Connection, to: &mut Connection, events: &mut Vec<Event>) {
    loop {
        match from.send() {
            Ok(data) => to
                .recv(quic::Event::Data(data), &mut |event| events.push(event))
                .unwrap(),
            Err(H3Error::Idle) => break,
            Err(err) => panic!("send failed: {}", err),
        }
    }
}

/// Like `pump`, but every transport buffer is re-delivered one byte at a
/// time, exercising the restartable parsers end to end.
fn pump_byte_by_byte(from: &mut Connection, to: &mut Connection, events: &mut Vec<Event>) {
    let mut outbound = vec![];
    drain(from, |data| outbound.push(data));
    for data in outbound {
        let bytes = data.buffer.to_vec();
        if bytes.is_empty() {
            to.recv(quic::Event::Data(data), &mut |event| events.push(event))
                .unwrap();
            continue;
        }
        for (i, byte) in bytes.iter().enumerate() {
            let chunk = quic::Data {
                id: data.id,
                fin: data.fin && i == bytes.len() - 1,
                buffer: Binary::from(&[*byte][..]),
            };
            to.recv(quic::Event::Data(chunk), &mut |event| events.push(event))
                .unwrap();
        }
    }
}

fn header_names(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Header { header, .. } => {
                Some(String::from_utf8_lossy(header.name()).into_owned())
            }
            _ => None,
        })
        .collect()
}

fn body_bytes(events: &[Event]) -> Vec<u8> {
    let mut body = vec![];
    for event in events {
        if let Event::Body { buffer, .. } = event {
            body.extend_from_slice(buffer);
        }
    }
    body
}

#[test]
fn request_response_exchange() {
    let client_settings = Settings {
        max_header_list_size: 16384,
        ..Settings::default()
    };
    let mut client = Connection::client(client_settings);
    let mut server = Connection::server(Settings::default());

    let id = client.open_request().unwrap();
    assert_eq!(id, 0);
    {
        let request = client.request(id).unwrap();
        request.header(":method", "POST").unwrap();
        request.header(":scheme", "https").unwrap();
        request.header(":authority", "www.example.com").unwrap();
        request.header(":path", "/upload").unwrap();
        request.body(Binary::from(&b"ping"[..])).unwrap();
        request.fin().unwrap();
    }

    let mut server_events = vec![];
    pump(&mut client, &mut server, &mut server_events);

    assert_eq!(server.peer_settings().max_header_list_size, 16384);
    assert_eq!(
        header_names(&server_events),
        [":method", ":scheme", ":authority", ":path"]
    );
    assert_eq!(body_bytes(&server_events), b"ping");
    assert!(server_events
        .iter()
        .any(|event| match event {
            Event::Finished { id } => *id == 0,
            _ => false,
        }));

    {
        let response = server.response(id).unwrap();
        response.header(":status", "200").unwrap();
        response.header("content-type", "text/plain").unwrap();
        response.body(Binary::from(&b"pong"[..])).unwrap();
        response.fin().unwrap();
    }

    let mut client_events = vec![];
    pump(&mut server, &mut client, &mut client_events);

    assert_eq!(header_names(&client_events), [":status", "content-type"]);
    assert_eq!(body_bytes(&client_events), b"pong");
    assert!(client_events
        .iter()
        .any(|event| match event {
            Event::Finished { id } => *id == 0,
            _ => false,
        }));
}

#[test]
fn exchange_survives_single_byte_chunks() {
    let mut client = Connection::client(Settings::default());
    let mut server = Connection::server(Settings::default());

    let id = client.open_request().unwrap();
    {
        let request = client.request(id).unwrap();
        request.header(":method", "GET").unwrap();
        request.header(":path", "/").unwrap();
        request.fin().unwrap();
    }

    let mut whole = vec![];
    let mut chunked = vec![];
    {
        let mut server_whole = Connection::server(Settings::default());
        let mut client_whole = Connection::client(Settings::default());
        let whole_id = client_whole.open_request().unwrap();
        let request = client_whole.request(whole_id).unwrap();
        request.header(":method", "GET").unwrap();
        request.header(":path", "/").unwrap();
        request.fin().unwrap();
        pump(&mut client_whole, &mut server_whole, &mut whole);
    }
    pump_byte_by_byte(&mut client, &mut server, &mut chunked);

    // byte-at-a-time delivery produces the same headers and terminal event;
    // only body chunk boundaries may differ
    assert_eq!(header_names(&whole), header_names(&chunked));
    assert_eq!(body_bytes(&whole), body_bytes(&chunked));
    assert_eq!(whole.len(), chunked.len());
}

#[test]
fn responses_drain_in_stream_id_order() {
    let mut client = Connection::client(Settings::default());
    let mut server = Connection::server(Settings::default());

    for _ in 0..3 {
        let id = client.open_request().unwrap();
        let request = client.request(id).unwrap();
        request.header(":method", "GET").unwrap();
        request.header(":path", "/").unwrap();
        request.fin().unwrap();
    }

    let mut server_events = vec![];
    pump(&mut client, &mut server, &mut server_events);

    // flush the server's control stream so only responses remain queued
    let mut client_events = vec![];
    pump(&mut server, &mut client, &mut client_events);

    // queue the responses in reverse order
    for id in [8u64, 4, 0] {
        let response = server.response(id).unwrap();
        response.header(":status", "200").unwrap();
        response.fin().unwrap();
    }

    let mut order = vec![];
    drain(&mut server, |data| order.push(data.id));
    assert_eq!(order, [0, 4, 8]);
}

#[test]
fn goaway_reaches_the_client() {
    // hand-roll a GOAWAY on the server's control stream
    let mut client = Connection::client(Settings::default());
    let mut server = Connection::server(Settings::default());

    let mut events = vec![];
    pump(&mut server, &mut client, &mut events);

    let mut goaway = vec![];
    h3parse::Frame::Goaway { stream_id: 0 }
        .encode(&mut goaway)
        .unwrap();
    client
        .recv(
            quic::Event::Data(quic::Data {
                id: 3,
                fin: false,
                buffer: Binary::from(goaway),
            }),
            &mut |event| events.push(event),
        )
        .unwrap();

    assert!(events.iter().any(|event| match event {
        Event::Goaway { stream_id, .. } => *stream_id == 0,
        _ => false,
    }));
}
