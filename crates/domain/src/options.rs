use crate::errors::DnsError;
use crate::name::validate_domain;
use crate::protocol::TransportKind;
use crate::qclass::QClass;
use crate::record_type::RecordType;

/// How EDNS material is treated: never sent, sent but not rendered, or
/// sent and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdnsMode {
    Disable,
    #[default]
    Hide,
    Show,
}

impl EdnsMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "disable" => Some(EdnsMode::Disable),
            "hide" => Some(EdnsMode::Hide),
            "show" => Some(EdnsMode::Show),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Header-flag opt-ins carried by `-Z` tweaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProtocolTweaks {
    pub authoritative: bool,
    pub authentic_data: bool,
    pub checking_disabled: bool,
    pub udp_payload_size: Option<u16>,
}

/// Everything a `run()` needs, assembled by the CLI (or another caller)
/// and validated before any I/O happens.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub domains: Vec<String>,
    pub record_types: Vec<RecordType>,
    pub classes: Vec<QClass>,
    pub nameserver: Option<String>,
    pub edns: EdnsMode,
    pub txid: Option<u16>,
    pub tweaks: ProtocolTweaks,

    pub udp: bool,
    pub tcp: bool,
    pub tls: bool,
    pub https: bool,

    pub timeout_ms: u64,
    pub retries: u32,

    // Consumed by the renderer only.
    pub short: bool,
    pub json: bool,
    pub color: ColorMode,
    pub seconds: bool,
    pub time: bool,
}

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_RETRIES: u32 = 3;

impl ClientOptions {
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            domains,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
            ..Self::default()
        }
    }

    /// Reject malformed or contradictory options before any socket opens.
    pub fn validate(&self) -> Result<(), DnsError> {
        if self.domains.is_empty() {
            return Err(DnsError::NoDomains);
        }
        for domain in &self.domains {
            validate_domain(domain)?;
        }

        let picked = [self.udp, self.tcp, self.tls, self.https]
            .iter()
            .filter(|flag| **flag)
            .count();
        if picked > 1 {
            return Err(DnsError::ConflictingTransports);
        }

        if self.https {
            let has_url = self
                .nameserver
                .as_deref()
                .map(|ns| ns.starts_with("https://"))
                .unwrap_or(false);
            if !has_url {
                return Err(DnsError::HttpsRequiresUrl);
            }
        }

        Ok(())
    }

    /// The transport picked by explicit flags; UDP when none is set.
    pub fn transport_kind(&self) -> TransportKind {
        if self.tcp {
            TransportKind::Tcp
        } else if self.tls {
            TransportKind::Tls
        } else if self.https {
            TransportKind::Https
        } else {
            TransportKind::Udp
        }
    }

    /// Number of attempts per query; zero retries still means one attempt.
    pub fn attempts(&self) -> u32 {
        self.retries.max(1)
    }

    /// The (domain × type × class) product in declaration order, with the
    /// documented defaults for empty selectors.
    pub fn query_plan(&self) -> Vec<crate::question::DnsQuery> {
        let types: &[RecordType] = if self.record_types.is_empty() {
            &[RecordType::A]
        } else {
            &self.record_types
        };
        let classes: &[QClass] = if self.classes.is_empty() {
            &[QClass::IN]
        } else {
            &self.classes
        };

        let mut plan = Vec::with_capacity(self.domains.len() * types.len() * classes.len());
        for domain in &self.domains {
            for rtype in types {
                for class in classes {
                    plan.push(crate::question::DnsQuery::with_class(
                        domain.clone(),
                        *rtype,
                        *class,
                    ));
                }
            }
        }
        plan
    }
}
