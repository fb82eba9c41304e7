#![allow(dead_code)]
//! Scripted codec and exchanger doubles for orchestrator tests.
//!
//! The mock wire format is four octets: transaction id (big-endian),
//! a TC flag octet, and an answer count.

use async_trait::async_trait;
use dnsx_application::{DnsExchanger, EncodeOptions, MessageCodec};
use dnsx_domain::{
    DnsError, DnsQuery, DnsRecord, DnsResponse, Flags, RData, TransportKind,
};
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::time::Duration;

pub const DEFAULT_TXID: u16 = 0x1234;

pub struct MockCodec;

impl MessageCodec for MockCodec {
    fn encode_query(
        &self,
        query: &DnsQuery,
        options: &EncodeOptions,
    ) -> Result<(u16, Vec<u8>), DnsError> {
        let txid = options.txid.unwrap_or(DEFAULT_TXID);
        let mut bytes = txid.to_be_bytes().to_vec();
        bytes.extend_from_slice(query.domain.as_bytes());
        Ok((txid, bytes))
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DnsError> {
        if bytes.len() < 4 {
            return Err(DnsError::TruncatedPacket);
        }
        let id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let flags = Flags {
            response: true,
            recursion_desired: true,
            recursion_available: true,
            truncated: bytes[2] == 1,
            ..Flags::default()
        };
        let answers = (0..bytes[3])
            .map(|_| DnsRecord {
                name: "example.com".to_string(),
                rtype: 1,
                class: 1,
                ttl: 300,
                data: RData::A(Ipv4Addr::new(93, 184, 216, 34)),
            })
            .collect();
        Ok(DnsResponse {
            id,
            flags,
            answers,
            authorities: Vec::new(),
            additionals: Vec::new(),
        })
    }
}

/// What the exchanger should do for one incoming call.
#[derive(Debug, Clone)]
pub enum Step {
    /// Reply echoing the request id, with the given TC flag and answer count.
    Echo { tc: bool, answers: u8 },
    /// Reply with the request id bit-flipped.
    WrongId,
    /// Fail with the given error.
    Fail(DnsError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub kind: TransportKind,
    pub request: Vec<u8>,
}

pub struct ScriptedExchanger {
    steps: Mutex<Vec<Step>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedExchanger {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behave the same way for every call.
    pub fn repeating(step: Step) -> Self {
        Self {
            steps: Mutex::new(vec![step]),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next_step(&self) -> Step {
        let mut steps = self.steps.lock().unwrap();
        if steps.len() > 1 {
            steps.remove(0)
        } else {
            steps[0].clone()
        }
    }
}

#[async_trait]
impl DnsExchanger for ScriptedExchanger {
    async fn exchange(
        &self,
        kind: TransportKind,
        request: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<u8>, DnsError> {
        self.calls.lock().unwrap().push(Call {
            kind,
            request: request.to_vec(),
        });

        match self.next_step() {
            Step::Echo { tc, answers } => {
                Ok(vec![request[0], request[1], u8::from(tc), answers])
            }
            Step::WrongId => Ok(vec![request[0] ^ 0xff, request[1], 0, 1]),
            Step::Fail(error) => Err(error),
        }
    }

    fn server_name(&self) -> String {
        "mock://nameserver".to_string()
    }
}
