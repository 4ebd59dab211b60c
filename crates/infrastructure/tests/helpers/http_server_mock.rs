use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

/// Minimal HTTP/1.1 responder: one scripted `(status, body)` per path,
/// 404 for everything else, one request per connection.
pub struct MockHttpServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHttpServer {
    pub async fn start(routes: Vec<(&str, u16, &str)>) -> Self {
        Self::start_with_chunk_delay(routes, None).await
    }

    /// Sends each body in four chunks, sleeping `chunk_delay` before each.
    pub async fn start_trickling(routes: Vec<(&str, u16, &str)>, chunk_delay: Duration) -> Self {
        Self::start_with_chunk_delay(routes, Some(chunk_delay)).await
    }

    async fn start_with_chunk_delay(
        routes: Vec<(&str, u16, &str)>,
        chunk_delay: Option<Duration>,
    ) -> Self {
        let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
                .collect(),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        let routes = Arc::clone(&routes);
                        let recorded = Arc::clone(&recorded);
                        tokio::spawn(async move {
                            let Some(request) = read_request(&mut stream).await else { return };
                            let (status, body) = routes
                                .get(&request.path)
                                .cloned()
                                .unwrap_or((404, "not found".to_string()));
                            recorded.lock().unwrap().push(request);

                            let head = format!(
                                "HTTP/1.1 {} Scripted\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                                status,
                                body.len()
                            );
                            let _ = stream.write_all(head.as_bytes()).await;
                            match chunk_delay {
                                None => {
                                    let _ = stream.write_all(body.as_bytes()).await;
                                }
                                Some(delay) => {
                                    let chunk_len = body.len().div_ceil(4).max(1);
                                    for chunk in body.as_bytes().chunks(chunk_len) {
                                        tokio::time::sleep(delay).await;
                                        let _ = stream.write_all(chunk).await;
                                        let _ = stream.flush().await;
                                    }
                                }
                            }
                            let _ = stream.shutdown().await;
                        });
                    }
                }
            }
        });

        Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let mut lines = head.lines();
    let path = lines.next()?.split_whitespace().nth(1)?.to_string();

    let mut authorization = None;
    let mut accept = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "authorization" => authorization = Some(value.trim().to_string()),
                "accept" => accept = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    Some(RecordedRequest {
        path,
        authorization,
        accept,
    })
}
