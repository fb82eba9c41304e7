use dnsx_domain::RData;
use std::net::{Ipv4Addr, Ipv6Addr};

#[test]
fn a_renders_dotted_quad() {
    let data = RData::A(Ipv4Addr::new(93, 184, 216, 34));
    assert_eq!(data.to_string(), "93.184.216.34");
}

#[test]
fn aaaa_renders_all_eight_groups_without_compression() {
    let addr: Ipv6Addr = "2606:2800:220:1:248:1893:25c8:1946".parse().unwrap();
    assert_eq!(
        RData::Aaaa(addr).to_string(),
        "2606:2800:220:1:248:1893:25c8:1946"
    );

    // Zero runs are spelled out, not elided to `::`.
    let loopback: Ipv6Addr = "::1".parse().unwrap();
    assert_eq!(RData::Aaaa(loopback).to_string(), "0:0:0:0:0:0:0:1");
}

#[test]
fn mx_renders_preference_then_exchange() {
    let data = RData::Mx {
        preference: 10,
        exchange: "mail.example.com".to_string(),
    };
    assert_eq!(data.to_string(), "10 mail.example.com");
}

#[test]
fn txt_renders_quoted() {
    assert_eq!(RData::Txt("v=spf1 test".to_string()).to_string(), "\"v=spf1 test\"");
}

#[test]
fn opaque_renders_lowercase_hex_of_exact_length() {
    let data = RData::Opaque(vec![0xde, 0xad, 0x00, 0xbe, 0xef]);
    assert_eq!(data.to_string(), "dead00beef");
}
