//! Integration tests for the wellatlas server
//!
//! These tests start the real binary against a seeded database and talk
//! HTTP to it over a plain TCP socket.

#[path = "../unit/common/mod.rs"]
#[allow(dead_code)]
mod common;

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use common::TestDb;

/// A running `wellatlas serve` process, killed on drop
struct Server {
    child: Child,
    port: u16,
}

impl Server {
    fn start(db: &TestDb) -> Self {
        let port = free_port();
        let child = Command::new(assert_cmd::cargo::cargo_bin!("wellatlas"))
            .args(["serve", "--host", "127.0.0.1", "--reference-date", "2025-05-15"])
            .args(["--port", &port.to_string()])
            .arg("--db")
            .arg(db.path())
            .env("MAPTILER_KEY", "integration-key")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to spawn wellatlas");

        let server = Self { child, port };
        server.wait_ready();
        server
    }

    fn wait_ready(&self) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("server did not start on port {}", self.port);
    }

    /// Send a GET and return (status, body)
    fn get(&self, path: &str) -> (u16, String) {
        let mut stream = TcpStream::connect(("127.0.0.1", self.port)).unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(10))).unwrap();
        write!(
            stream,
            "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
        )
        .unwrap();

        let mut raw = String::new();
        stream.read_to_string(&mut raw).unwrap();

        let status = raw
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
            .unwrap_or(0);
        let body = raw
            .split_once("\r\n\r\n")
            .map(|(_, body)| body.to_string())
            .unwrap_or_default();
        (status, body)
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("no free port")
}

#[test]
fn test_browse_dashboard() {
    let db = TestDb::seeded();
    let server = Server::start(&db);

    let (status, body) = server.get("/");
    assert_eq!(status, 200);
    assert!(body.contains("integration-key"));
    assert!(body.contains("North Well"));

    let (status, body) = server.get("/customers");
    assert_eq!(status, 200);
    assert!(body.contains("Acme Farms"));
    assert!(body.contains("Zephyr Estates"));

    let (status, body) = server.get("/customers/1");
    assert_eq!(status, 200);
    assert!(body.contains("Orchard Pump"));

    let (status, body) = server.get("/sites/1");
    assert_eq!(status, 200);
    assert!(body.contains("well-log.pdf"));

    let (status, body) = server.get("/jobs/1");
    assert_eq!(status, 200);
    assert!(body.contains("2025-01-10"));

    let (status, body) = server.get("/calendar");
    assert_eq!(status, 200);
    assert!(body.contains("2025-04-01"));
}

#[test]
fn test_missing_records_are_not_found() {
    let db = TestDb::seeded();
    let server = Server::start(&db);

    assert_eq!(server.get("/customers/999").0, 404);
    assert_eq!(server.get("/sites/999").0, 404);
    assert_eq!(server.get("/jobs/999").0, 404);
    assert_eq!(server.get("/nowhere").0, 404);
}

#[test]
fn test_server_keeps_serving_after_store_loss() {
    let db = TestDb::seeded();
    let server = Server::start(&db);

    assert_eq!(server.get("/customers").0, 200);
    std::fs::remove_file(db.path()).unwrap();
    assert_eq!(server.get("/customers").0, 500);
    assert_eq!(server.get("/nowhere").0, 404);
}
