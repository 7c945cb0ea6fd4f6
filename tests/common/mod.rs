use assert_cmd::Command;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-key-123";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sluice").expect("sluice binary");
        cmd.current_dir(&self.work)
            .env("HOME", &self.home)
            .env("SLUICE_API_KEY", TEST_API_KEY)
            .env_remove("SLUICE_API_URL");
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn audit_log(&self) -> String {
        fs::read_to_string(self.home.join(".config/sluice/audit.log")).unwrap_or_default()
    }
}

/// One-shot stand-in for the content-processing service: accepts a single
/// request, answers with the given status and body, and hands the raw
/// request bytes back through the join handle.
pub fn mock_service(status: u16, body: &str) -> (String, thread::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock service");
    let addr = listener.local_addr().expect("mock service addr");
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept request");
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        let header_end = loop {
            let n = stream.read(&mut buf).expect("read request headers");
            request.extend_from_slice(&buf[..n]);
            if let Some(pos) = find_header_end(&request) {
                break pos;
            }
            if n == 0 {
                break request.len();
            }
        };
        let content_length = parse_content_length(&request[..header_end]).unwrap_or(0);
        while request.len() < header_end + content_length {
            let n = stream.read(&mut buf).expect("read request body");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let reason = match status {
            200 => "OK",
            401 => "Unauthorized",
            403 => "Forbidden",
            _ => "Error",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        let _ = stream.flush();
        request
    });

    (format!("http://{}/v1/files", addr), handle)
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn parse_content_length(headers: &[u8]) -> Option<usize> {
    let text = String::from_utf8_lossy(headers);
    for line in text.lines() {
        let lower = line.to_ascii_lowercase();
        if let Some(value) = lower.strip_prefix("content-length:") {
            return value.trim().parse().ok();
        }
    }
    None
}
