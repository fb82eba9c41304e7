#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// A localhost resolver double that answers every query with one A record
/// (`93.184.216.34`) whose name compresses back to the question.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = build_mock_response(&buf[..len]);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A UDP socket that swallows queries, for timeout tests.
pub struct SilentUdpServer {
    _socket: std::sync::Arc<UdpSocket>,
    addr: SocketAddr,
}

impl SilentUdpServer {
    pub async fn start() -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = std::sync::Arc::new(UdpSocket::bind("127.0.0.1:0").await?);
        let addr = socket.local_addr()?;
        Ok((
            Self {
                _socket: socket,
                addr,
            },
            addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

/// TCP sibling of [`MockDnsServer`]: RFC 1035 §4.2.2 length framing, with
/// the response body optionally split into two writes.
pub struct MockTcpDnsServer {
    addr: SocketAddr,
}

impl MockTcpDnsServer {
    pub async fn start(chunked: bool) -> Result<(Self, SocketAddr), std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut len_buf = [0u8; 2];
                if stream.read_exact(&mut len_buf).await.is_err() {
                    continue;
                }
                let len = u16::from_be_bytes(len_buf) as usize;
                let mut query = vec![0u8; len];
                if stream.read_exact(&mut query).await.is_err() {
                    continue;
                }

                let response = build_mock_response(&query);
                let prefix = (response.len() as u16).to_be_bytes();
                let _ = stream.write_all(&prefix).await;
                if chunked {
                    let middle = response.len() / 2;
                    let _ = stream.write_all(&response[..middle]).await;
                    let _ = stream.flush().await;
                    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                    let _ = stream.write_all(&response[middle..]).await;
                } else {
                    let _ = stream.write_all(&response).await;
                }
                let _ = stream.flush().await;
            }
        });

        Ok((Self { addr }, addr))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

pub fn build_mock_response(query: &[u8]) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);

    response.push(0x81);
    response.push(0x80);

    response.extend_from_slice(&query[4..6]);

    response.extend_from_slice(&[0x00, 0x01]);

    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&[0x00, 0x00]);

    if query.len() > 12 {
        response.extend_from_slice(&query[12..]);
    }

    response.extend_from_slice(&[
        0xc0, 0x0c, // name: pointer to the question
        0x00, 0x01, // TYPE A
        0x00, 0x01, // CLASS IN
        0x00, 0x00, 0x00, 0x3c, // TTL 60
        0x00, 0x04, // RDLENGTH
        93, 184, 216, 34,
    ]);

    response
}
