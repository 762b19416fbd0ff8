//! Chat client tests against a local stub HTTP server.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use hero_scene::{ChatClient, ChatConfig, ChatTransport};

const RECV_TIMEOUT: Duration = Duration::from_secs(10);

fn endpoint(port: u16) -> ChatConfig {
    ChatConfig {
        endpoint: format!("http://127.0.0.1:{port}/chatbot/")
            .parse()
            .unwrap(),
    }
}

/// Accepts one connection, reads the full request, and answers with the
/// given status and body. Returns the captured request bytes.
fn serve_once(
    listener: TcpListener,
    status: &'static str,
    body: &'static str,
) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    })
}

fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            return buf;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            return buf;
        }
    }
}

#[test]
fn reply_is_delivered_and_request_carries_message() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = serve_once(listener, "200 OK", r#"{"reply":"hi"}"#);

    let channel = ChatClient::spawn(endpoint(port));
    channel.outgoing.send("hello".to_string()).unwrap();

    let reply = channel.incoming.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(reply, "hi");

    let request = server.join().unwrap();
    let request = String::from_utf8_lossy(&request);
    assert!(request.starts_with("POST /chatbot/"));
    assert!(request.contains(r#"{"message":"hello"}"#));
}

#[test]
fn server_error_field_is_shown() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    serve_once(
        listener,
        "429 Too Many Requests",
        r#"{"error":"Rate limit exceeded. Try again."}"#,
    );

    let channel = ChatClient::spawn(endpoint(port));
    channel.outgoing.send("hello".to_string()).unwrap();

    let reply = channel.incoming.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(reply, "Rate limit exceeded. Try again.");
}

#[test]
fn malformed_body_collapses_to_invalid_response() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    serve_once(listener, "200 OK", "<html>oops</html>");

    let channel = ChatClient::spawn(endpoint(port));
    channel.outgoing.send("hello".to_string()).unwrap();

    let reply = channel.incoming.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(reply, "Invalid response.");
}

#[test]
fn empty_object_collapses_to_no_response() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    serve_once(listener, "200 OK", "{}");

    let channel = ChatClient::spawn(endpoint(port));
    channel.outgoing.send("hello".to_string()).unwrap();

    let reply = channel.incoming.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(reply, "No response.");
}

#[test]
fn connection_refused_collapses_to_network_error() {
    // Bind to grab a free port, then drop the listener before connecting.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let channel = ChatClient::spawn(endpoint(port));
    channel.outgoing.send("hello".to_string()).unwrap();

    let reply = channel.incoming.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(reply, "Network error. Please try again.");
}

#[test]
fn worker_serves_sequential_messages() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        for body in [r#"{"reply":"first"}"#, r#"{"reply":"second"}"#] {
            let (mut stream, _) = listener.accept().unwrap();
            read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    let channel = ChatClient::spawn(endpoint(port));

    channel.outgoing.send("one".to_string()).unwrap();
    assert_eq!(channel.incoming.recv_timeout(RECV_TIMEOUT).unwrap(), "first");

    channel.outgoing.send("two".to_string()).unwrap();
    assert_eq!(
        channel.incoming.recv_timeout(RECV_TIMEOUT).unwrap(),
        "second"
    );
}
