use crate::errors::DnsError;

/// Longest label the wire format can carry (6-bit length octet).
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name: length octets + labels + terminal zero.
pub const MAX_NAME_LEN: usize = 255;

fn is_label_octet(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'_'
}

/// Validate a dot-joined domain name against the wire-format limits.
///
/// A single trailing dot (FQDN spelling) is accepted; the encoder strips it.
pub fn validate_domain(name: &str) -> Result<(), DnsError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);

    if trimmed.is_empty() {
        return Err(DnsError::InvalidDomain(name.to_string()));
    }

    // Encoded form: one length octet per label plus the label octets,
    // terminated by a single zero octet.
    let mut encoded_len = 1usize;

    for label in trimmed.split('.') {
        if label.is_empty() {
            // Consecutive dots, or a leading dot.
            return Err(DnsError::InvalidDomain(name.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DnsError::InvalidLabel(label.to_string()));
        }
        if !label.bytes().all(is_label_octet) {
            return Err(DnsError::InvalidDomain(name.to_string()));
        }
        encoded_len += 1 + label.len();
    }

    if encoded_len > MAX_NAME_LEN {
        return Err(DnsError::InvalidName(name.to_string()));
    }

    Ok(())
}
