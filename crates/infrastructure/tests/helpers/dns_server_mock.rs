#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{rdata, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{IpAddr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Scripted DNS server for tests.
///
/// Listens on an ephemeral localhost port and answers every query the same
/// way. `answering` is the ordinary happy path; the other constructors
/// produce the broken replies a prober has to survive.
pub struct MockDnsServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

enum Behavior {
    /// Well-formed response with these answer records and rcode.
    Answer {
        addresses: Vec<IpAddr>,
        rcode: ResponseCode,
    },
    /// Receive and never reply; the client runs into its timeout.
    Silent,
    /// Reply with bytes that are not a DNS message.
    Garbage,
    /// Well-formed response under a different message ID.
    WrongId { addresses: Vec<IpAddr> },
}

impl MockDnsServer {
    pub async fn answering(addresses: Vec<&str>) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(Behavior::Answer {
            addresses: parse_ips(addresses),
            rcode: ResponseCode::NoError,
        })
        .await
    }

    pub async fn empty(rcode: ResponseCode) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(Behavior::Answer {
            addresses: Vec::new(),
            rcode,
        })
        .await
    }

    pub async fn silent() -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(Behavior::Silent).await
    }

    pub async fn garbage() -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(Behavior::Garbage).await
    }

    pub async fn wrong_id(addresses: Vec<&str>) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(Behavior::WrongId {
            addresses: parse_ips(addresses),
        })
        .await
    }

    async fn start(behavior: Behavior) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = build_response(&buf[..len], &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
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

fn parse_ips(addresses: Vec<&str>) -> Vec<IpAddr> {
    addresses.iter().map(|a| a.parse().unwrap()).collect()
}

fn build_response(query_bytes: &[u8], behavior: &Behavior) -> Option<Vec<u8>> {
    match behavior {
        Behavior::Silent => None,
        Behavior::Garbage => Some(b"definitely not a dns message".to_vec()),
        Behavior::Answer { addresses, rcode } => {
            let query = Message::from_vec(query_bytes).ok()?;
            Some(answer_message(query.id(), &query, addresses, *rcode))
        }
        Behavior::WrongId { addresses } => {
            let query = Message::from_vec(query_bytes).ok()?;
            Some(answer_message(
                query.id().wrapping_add(1),
                &query,
                addresses,
                ResponseCode::NoError,
            ))
        }
    }
}

fn answer_message(
    id: u16,
    query: &Message,
    addresses: &[IpAddr],
    rcode: ResponseCode,
) -> Vec<u8> {
    let name = query
        .queries()
        .first()
        .map(|q| q.name().clone())
        .unwrap_or_else(Name::root);

    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);
    response.set_response_code(rcode);
    for q in query.queries() {
        response.add_query(q.clone());
    }

    for ip in addresses {
        let record = match ip {
            IpAddr::V4(v4) => Record::from_rdata(name.clone(), 60, RData::A(rdata::A::from(*v4))),
            IpAddr::V6(v6) => {
                Record::from_rdata(name.clone(), 60, RData::AAAA(rdata::AAAA::from(*v6)))
            }
        };
        response.add_answer(record);
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    response.emit(&mut encoder).unwrap();
    buf
}
