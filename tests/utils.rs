use assert_cmd::Command;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Get a Command for running the provider without any proxy configuration
/// leaking in from the host.
pub fn provider_command() -> Command {
    let mut cmd = Command::cargo_bin("onepassword-urlprovider").unwrap();
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_PROXY", "127.0.0.1,localhost");
    cmd.env_remove("ONEPASSWORD_URLPROVIDER_LOG");
    cmd
}

/// A single-shot HTTP server on localhost that answers one request with a
/// fixed status and body.
#[allow(dead_code)] // May not be used in all test configurations
pub struct UpdateServer {
    pub url: String,
    handle: JoinHandle<String>,
}

#[allow(dead_code)] // May not be used in all test configurations
impl UpdateServer {
    pub fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/check/1/18.0.0/OPM7/en/700000", listener.local_addr().unwrap());
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        Self { url, handle }
    }

    /// Waits for the request and returns its request line.
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}
