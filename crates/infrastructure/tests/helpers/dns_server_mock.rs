#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream answers every query it receives.
#[derive(Debug, Clone)]
pub enum MockBehaviour {
    /// NOERROR with one A record per address.
    Answer(Vec<Ipv4Addr>),
    /// NOERROR with an empty answer section.
    Empty,
    /// Never replies.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behaviour: MockBehaviour) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = received.clone();

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
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&buf[..len], &behaviour) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    fn build_mock_response(query: &[u8], behaviour: &MockBehaviour) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let addresses: &[Ipv4Addr] = match behaviour {
            MockBehaviour::Silent => return None,
            MockBehaviour::Empty => &[],
            MockBehaviour::Answer(addresses) => addresses,
        };

        let mut response = Vec::with_capacity(512);

        // id
        response.extend_from_slice(&query[0..2]);
        // QR, RD, RA
        response.push(0x81);
        response.push(0x80);
        // QDCOUNT copied from the query
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&(addresses.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        // question section, assuming no additional records in the query
        response.extend_from_slice(&query[12..]);

        for address in addresses {
            response.extend_from_slice(&[
                0xc0, 0x0c, // pointer to the question name
                0x00, 0x01, // A
                0x00, 0x01, // IN
                0x00, 0x00, 0x00, 0x3c, // TTL 60
                0x00, 0x04,
            ]);
            response.extend_from_slice(&address.octets());
        }

        Some(response)
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
