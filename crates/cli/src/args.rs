use clap::Parser;
use dnsx_domain::{
    ClientConfig, ClientOptions, ColorMode, DnsError, EdnsMode, ProtocolTweaks, QClass, RecordType,
};
use std::str::FromStr;
use tracing::debug;

/// Type mnemonics recognised as bare positional tokens. Anything else in
/// positional position is treated as another domain.
const POSITIONAL_TYPES: [&str; 10] = [
    "A", "AAAA", "NS", "MX", "TXT", "SRV", "PTR", "CNAME", "SOA", "CAA",
];

#[derive(Parser, Debug)]
#[command(name = "dnsx")]
#[command(version)]
#[command(about = "dnsx - DNS lookup client speaking UDP, TCP, DoT and DoH")]
pub struct Cli {
    /// Domains to query; bare record-type tokens (A, MX, ...) select types
    pub args: Vec<String>,

    /// Host to query (may be repeated)
    #[arg(short = 'q', long = "query", value_name = "HOST")]
    pub query: Vec<String>,

    /// Record type, by name or number (may be repeated)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub record_type: Vec<String>,

    /// Nameserver address, or an https:// URL for DoH
    #[arg(short = 'n', long, value_name = "ADDR")]
    pub nameserver: Option<String>,

    /// Query class (IN, CH, HS; may be repeated)
    #[arg(long, value_name = "CLASS")]
    pub class: Vec<String>,

    /// EDNS handling: disable, hide or show
    #[arg(long, value_name = "SETTING")]
    pub edns: Option<String>,

    /// Pin the transaction id instead of randomising it
    #[arg(long, value_name = "NUMBER")]
    pub txid: Option<u16>,

    /// Protocol tweak: aa, ad, cd or bufsize=<n> (may be repeated)
    #[arg(short = 'Z', value_name = "TWEAK")]
    pub tweaks: Vec<String>,

    /// Query over UDP
    #[arg(short = 'U', long)]
    pub udp: bool,

    /// Query over TCP
    #[arg(short = 'T', long)]
    pub tcp: bool,

    /// Query over DNS-over-TLS
    #[arg(short = 'S', long)]
    pub tls: bool,

    /// Query over DNS-over-HTTPS
    #[arg(short = 'H', long)]
    pub https: bool,

    /// Print the answer data only, one per line
    #[arg(short = '1', long)]
    pub short: bool,

    /// Print responses as JSON
    #[arg(short = 'J', long)]
    pub json: bool,

    /// Colourise output: auto, always or never
    #[arg(long, value_name = "WHEN")]
    pub color: Option<String>,

    /// Print TTLs as raw seconds
    #[arg(long)]
    pub seconds: bool,

    /// Print the round-trip time of each query
    #[arg(long)]
    pub time: bool,

    /// Query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Attempts per query before giving up
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge CLI flags over config-file defaults into validated options.
    pub fn into_options(self, config: &ClientConfig) -> Result<ClientOptions, DnsError> {
        let (mut domains, mut record_types) = classify_positionals(&self.args)?;
        domains.extend(self.query.iter().cloned());

        for text in &self.record_type {
            let rtype = RecordType::from_str(text).map_err(DnsError::InvalidType)?;
            record_types.push(rtype);
        }

        let mut classes = Vec::new();
        for text in &self.class {
            let class = QClass::from_str(text).map_err(DnsError::InvalidClass)?;
            classes.push(class);
        }

        let edns = match &self.edns {
            Some(text) => EdnsMode::parse(text)
                .ok_or_else(|| DnsError::ConfigError(format!("Unknown EDNS setting: {}", text)))?,
            None => EdnsMode::default(),
        };

        let color_text = self
            .color
            .clone()
            .unwrap_or_else(|| config.output.color.clone());
        let color = ColorMode::parse(&color_text)
            .ok_or_else(|| DnsError::ConfigError(format!("Unknown color mode: {}", color_text)))?;

        Ok(ClientOptions {
            domains,
            record_types,
            classes,
            nameserver: self.nameserver.clone().or_else(|| config.nameserver.clone()),
            edns,
            txid: self.txid,
            tweaks: parse_tweaks(&self.tweaks),
            udp: self.udp,
            tcp: self.tcp,
            tls: self.tls,
            https: self.https,
            timeout_ms: self.timeout.unwrap_or(config.timeout),
            retries: self.retries.unwrap_or(config.retries),
            short: self.short || config.output.short,
            json: self.json || config.output.json,
            color,
            seconds: self.seconds || config.output.seconds,
            time: self.time || config.output.time,
        })
    }
}

/// Left-to-right: the first token is always a domain; later tokens that
/// spell a well-known type select types, the rest are more domains.
fn classify_positionals(args: &[String]) -> Result<(Vec<String>, Vec<RecordType>), DnsError> {
    let mut domains = Vec::new();
    let mut types = Vec::new();

    for (index, token) in args.iter().enumerate() {
        let upper = token.to_uppercase();
        if index > 0 && POSITIONAL_TYPES.contains(&upper.as_str()) {
            let rtype = RecordType::from_str(&upper).map_err(DnsError::InvalidType)?;
            types.push(rtype);
        } else {
            domains.push(token.clone());
        }
    }

    Ok((domains, types))
}

/// Parse `-Z` tokens. Unknown tokens are ignored.
fn parse_tweaks(tokens: &[String]) -> ProtocolTweaks {
    let mut tweaks = ProtocolTweaks::default();
    for token in tokens {
        match token.to_lowercase().as_str() {
            "aa" | "authoritative" => tweaks.authoritative = true,
            "ad" | "authentic" => tweaks.authentic_data = true,
            "cd" | "checking-disabled" => tweaks.checking_disabled = true,
            other => {
                if let Some(size) = other.strip_prefix("bufsize=") {
                    match size.parse::<u16>() {
                        Ok(size) => tweaks.udp_payload_size = Some(size),
                        Err(_) => debug!(tweak = token.as_str(), "Ignoring malformed bufsize"),
                    }
                } else {
                    debug!(tweak = token.as_str(), "Ignoring unknown tweak");
                }
            }
        }
    }
    tweaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_positional_is_always_a_domain() {
        let (domains, types) = classify_positionals(&strings(&["mx", "example.com"])).unwrap();
        assert_eq!(domains, strings(&["mx", "example.com"]));
        assert_eq!(types, vec![]);
    }

    #[test]
    fn later_type_tokens_select_types() {
        let (domains, types) =
            classify_positionals(&strings(&["example.com", "MX", "aaaa", "example.org"])).unwrap();
        assert_eq!(domains, strings(&["example.com", "example.org"]));
        assert_eq!(types, vec![RecordType::MX, RecordType::AAAA]);
    }

    #[test]
    fn unknown_tokens_become_domains() {
        let (domains, types) =
            classify_positionals(&strings(&["example.com", "WWW", "NAPTR"])).unwrap();
        // NAPTR is queryable via -t but is not a bare positional selector.
        assert_eq!(domains, strings(&["example.com", "WWW", "NAPTR"]));
        assert_eq!(types, vec![]);
    }

    #[test]
    fn tweaks_accept_aliases_and_ignore_unknown() {
        let tweaks = parse_tweaks(&strings(&["aa", "authentic", "bogus", "bufsize=1232"]));
        assert!(tweaks.authoritative);
        assert!(tweaks.authentic_data);
        assert!(!tweaks.checking_disabled);
        assert_eq!(tweaks.udp_payload_size, Some(1232));
    }

    #[test]
    fn malformed_bufsize_is_ignored() {
        let tweaks = parse_tweaks(&strings(&["bufsize=huge"]));
        assert_eq!(tweaks.udp_payload_size, None);
    }
}
