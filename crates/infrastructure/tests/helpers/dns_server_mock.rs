#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Answer record served by the mock
#[derive(Debug, Clone)]
pub enum MockAnswer {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ptr(&'static str),
}

/// How the mock server reacts to every query
#[derive(Debug, Clone)]
pub enum Behavior {
    Answer(Vec<MockAnswer>),
    /// NOERROR with an empty answer section
    Empty,
    NxDomain,
    ServFail,
    /// Never replies
    Silent,
    /// Replies with a transaction ID that does not match the query
    WrongId,
    /// UDP replies carry TC=1 and no answers; TCP replies carry the records
    TruncatedUdp(Vec<MockAnswer>),
    Delayed(Duration, Box<Behavior>),
}

/// Loopback DNS server answering over UDP and TCP on the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: Behavior) -> Result<Self, std::io::Error> {
        let (socket, listener) = Self::bind_pair().await?;
        let addr = socket.local_addr()?;
        let socket = Arc::new(socket);
        let behavior = Arc::new(behavior);
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let query = buf[..len].to_vec();
                            let socket = Arc::clone(&socket);
                            let behavior = Arc::clone(&behavior);
                            tokio::spawn(async move {
                                if let Some(response) = respond(&behavior, &query, false).await {
                                    let _ = socket.send_to(&response, peer).await;
                                }
                            });
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let behavior = Arc::clone(&behavior);
                            tokio::spawn(serve_tcp(stream, behavior));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// UDP socket and TCP listener sharing one ephemeral port.
    async fn bind_pair() -> Result<(UdpSocket, TcpListener), std::io::Error> {
        let mut last_error = None;
        for _ in 0..16 {
            let socket = UdpSocket::bind("127.0.0.1:0").await?;
            let addr = socket.local_addr()?;
            match TcpListener::bind(addr).await {
                Ok(listener) => return Ok((socket, listener)),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| std::io::Error::other("no free port")))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
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

async fn serve_tcp(mut stream: tokio::net::TcpStream, behavior: Arc<Behavior>) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }

    if let Some(response) = respond(&behavior, &query, true).await {
        let mut frame = (response.len() as u16).to_be_bytes().to_vec();
        frame.extend_from_slice(&response);
        let _ = stream.write_all(&frame).await;
    }
}

async fn respond(behavior: &Behavior, query: &[u8], over_tcp: bool) -> Option<Vec<u8>> {
    let mut behavior = behavior;
    while let Behavior::Delayed(delay, inner) = behavior {
        tokio::time::sleep(*delay).await;
        behavior = inner;
    }

    match behavior {
        Behavior::Answer(answers) => build_response(query, 0, false, answers, false),
        Behavior::Empty => build_response(query, 0, false, &[], false),
        Behavior::NxDomain => build_response(query, 3, false, &[], false),
        Behavior::ServFail => build_response(query, 2, false, &[], false),
        Behavior::Silent => None,
        Behavior::WrongId => build_response(query, 0, false, &[], true),
        Behavior::TruncatedUdp(answers) if over_tcp => {
            build_response(query, 0, false, answers, false)
        }
        Behavior::TruncatedUdp(_) => build_response(query, 0, true, &[], false),
        Behavior::Delayed(..) => None,
    }
}

/// Builds a wire-format response echoing the question of `query`.
pub fn build_response(
    query: &[u8],
    rcode: u8,
    truncated: bool,
    answers: &[MockAnswer],
    wrong_id: bool,
) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }
    let question_end = question_end(query)?;

    let mut response = Vec::with_capacity(512);

    // Transaction ID
    if wrong_id {
        let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
        response.extend_from_slice(&id.to_be_bytes());
    } else {
        response.extend_from_slice(&query[0..2]);
    }

    // QR=1, Opcode=0, AA=0, TC, RD=1
    response.push(if truncated { 0x83 } else { 0x81 });
    // RA=1, RCODE
    response.push(0x80 | (rcode & 0x0f));

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    response.extend_from_slice(&query[12..question_end]);

    for answer in answers {
        // Name pointer to question, then TYPE
        response.extend_from_slice(&[0xc0, 0x0c]);
        let (rtype, rdata) = match answer {
            MockAnswer::A(ip) => (1u16, ip.octets().to_vec()),
            MockAnswer::Aaaa(ip) => (28u16, ip.octets().to_vec()),
            MockAnswer::Ptr(name) => (12u16, encode_name(name)),
        };
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]); // Class IN
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]); // TTL: 60 seconds
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    Some(response)
}

fn question_end(query: &[u8]) -> Option<usize> {
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    // QTYPE + QCLASS
    let end = pos + 4;
    (end <= query.len()).then_some(end)
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    for label in name.trim_end_matches('.').split('.') {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_response_builder() {
        let query = vec![
            0xab, 0xcd, // ID
            0x01, 0x00, // Flags
            0x00, 0x01, // Questions
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // Counts
            0x00, // Root name
            0x00, 0x01, 0x00, 0x01, // A, IN
        ];

        let response =
            build_response(&query, 0, false, &[MockAnswer::A(Ipv4Addr::LOCALHOST)], false)
                .unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[2], 0x81);
        assert_eq!(response[7], 1);
    }

    #[test]
    fn test_truncated_and_wrong_id_flags() {
        let query = vec![
            0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x01,
        ];

        let truncated = build_response(&query, 0, true, &[], false).unwrap();
        assert_eq!(truncated[2] & 0x02, 0x02);

        let wrong = build_response(&query, 0, false, &[], true).unwrap();
        assert_eq!(wrong[0..2], [0x12, 0x35]);
    }
}
