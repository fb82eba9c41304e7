use dnsx_domain::{ClientOptions, DnsError, QClass, RecordType, TransportKind};

fn options(domains: &[&str]) -> ClientOptions {
    ClientOptions::new(domains.iter().map(|s| s.to_string()).collect())
}

#[test]
fn no_domains_is_rejected_before_io() {
    let opts = options(&[]);
    assert_eq!(opts.validate(), Err(DnsError::NoDomains));
}

#[test]
fn invalid_domains_are_rejected() {
    let opts = options(&["exa mple.com"]);
    assert!(matches!(
        opts.validate(),
        Err(DnsError::InvalidDomain(_))
    ));
}

#[test]
fn at_most_one_transport_flag() {
    let mut opts = options(&["example.com"]);
    opts.udp = true;
    opts.tcp = true;
    assert_eq!(opts.validate(), Err(DnsError::ConflictingTransports));

    let mut opts = options(&["example.com"]);
    opts.tls = true;
    opts.https = true;
    assert_eq!(opts.validate(), Err(DnsError::ConflictingTransports));
}

#[test]
fn https_requires_an_https_url() {
    let mut opts = options(&["example.com"]);
    opts.https = true;
    opts.nameserver = Some("8.8.8.8".to_string());
    assert_eq!(opts.validate(), Err(DnsError::HttpsRequiresUrl));

    opts.nameserver = Some("https://1.1.1.1/dns-query".to_string());
    assert!(opts.validate().is_ok());

    opts.nameserver = None;
    assert_eq!(opts.validate(), Err(DnsError::HttpsRequiresUrl));
}

#[test]
fn transport_defaults_to_udp() {
    let opts = options(&["example.com"]);
    assert_eq!(opts.transport_kind(), TransportKind::Udp);

    let mut opts = options(&["example.com"]);
    opts.tls = true;
    assert_eq!(opts.transport_kind(), TransportKind::Tls);
}

#[test]
fn zero_retries_still_means_one_attempt() {
    let mut opts = options(&["example.com"]);
    opts.retries = 0;
    assert_eq!(opts.attempts(), 1);
    opts.retries = 3;
    assert_eq!(opts.attempts(), 3);
}

#[test]
fn query_plan_is_the_cartesian_product_in_declaration_order() {
    let mut opts = options(&["a.example", "b.example"]);
    opts.record_types = vec![RecordType::A, RecordType::MX];
    opts.classes = vec![QClass::IN, QClass::CH];

    let plan = opts.query_plan();
    let triples: Vec<_> = plan
        .iter()
        .map(|q| (q.domain.as_str(), q.record_type, q.class))
        .collect();

    assert_eq!(
        triples,
        vec![
            ("a.example", RecordType::A, QClass::IN),
            ("a.example", RecordType::A, QClass::CH),
            ("a.example", RecordType::MX, QClass::IN),
            ("a.example", RecordType::MX, QClass::CH),
            ("b.example", RecordType::A, QClass::IN),
            ("b.example", RecordType::A, QClass::CH),
            ("b.example", RecordType::MX, QClass::IN),
            ("b.example", RecordType::MX, QClass::CH),
        ]
    );
}

#[test]
fn empty_selectors_default_to_a_and_in() {
    let opts = options(&["example.com"]);
    let plan = opts.query_plan();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].record_type, RecordType::A);
    assert_eq!(plan[0].class, QClass::IN);
}
