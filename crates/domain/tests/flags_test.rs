use dnsx_domain::{rcode_name, Flags};

#[test]
fn query_flags_encode_to_documented_bytes() {
    // RD-only query: 0x0100.
    let flags = Flags::query(true);
    assert_eq!(flags.to_bytes(), [0x01, 0x00]);

    // No recursion: all zero.
    let flags = Flags::query(false);
    assert_eq!(flags.to_bytes(), [0x00, 0x00]);
}

#[test]
fn response_flags_decode_bit_exactly() {
    // 0x8180: QR, RD, RA — the common recursive answer.
    let flags = Flags::from_bytes([0x81, 0x80]);
    assert!(flags.response);
    assert!(flags.recursion_desired);
    assert!(flags.recursion_available);
    assert!(!flags.authoritative);
    assert!(!flags.truncated);
    assert_eq!(flags.opcode, 0);
    assert_eq!(flags.rcode, 0);
}

#[test]
fn each_flag_maps_to_its_documented_bit() {
    let cases = [
        (
            Flags {
                response: true,
                ..Flags::default()
            },
            [0b1000_0000, 0],
        ),
        (
            Flags {
                opcode: 0b1111,
                ..Flags::default()
            },
            [0b0111_1000, 0],
        ),
        (
            Flags {
                authoritative: true,
                ..Flags::default()
            },
            [0b0000_0100, 0],
        ),
        (
            Flags {
                truncated: true,
                ..Flags::default()
            },
            [0b0000_0010, 0],
        ),
        (
            Flags {
                recursion_desired: true,
                ..Flags::default()
            },
            [0b0000_0001, 0],
        ),
        (
            Flags {
                recursion_available: true,
                ..Flags::default()
            },
            [0, 0b1000_0000],
        ),
        (
            Flags {
                authentic_data: true,
                ..Flags::default()
            },
            [0, 0b0010_0000],
        ),
        (
            Flags {
                checking_disabled: true,
                ..Flags::default()
            },
            [0, 0b0001_0000],
        ),
        (
            Flags {
                rcode: 0b1111,
                ..Flags::default()
            },
            [0, 0b0000_1111],
        ),
    ];

    for (flags, expected) in cases {
        assert_eq!(flags.to_bytes(), expected, "flags: {:?}", flags);
        assert_eq!(Flags::from_bytes(expected), flags, "bytes: {:?}", expected);
    }
}

#[test]
fn round_trip_preserves_every_field() {
    let flags = Flags {
        response: true,
        opcode: 2,
        authoritative: true,
        truncated: true,
        recursion_desired: true,
        recursion_available: true,
        authentic_data: true,
        checking_disabled: true,
        rcode: 3,
    };
    assert_eq!(Flags::from_bytes(flags.to_bytes()), flags);
}

#[test]
fn reserved_z_bit_is_ignored_on_parse() {
    let with_z = Flags::from_bytes([0x81, 0b1100_0000]);
    let without_z = Flags::from_bytes([0x81, 0b1000_0000]);
    assert_eq!(with_z, without_z);
    // And never emitted.
    assert_eq!(with_z.to_bytes()[1] & 0b0100_0000, 0);
}

#[test]
fn rcode_names() {
    assert_eq!(rcode_name(0), "NOERROR");
    assert_eq!(rcode_name(2), "SERVFAIL");
    assert_eq!(rcode_name(3), "NXDOMAIN");
    assert_eq!(rcode_name(5), "REFUSED");
    assert_eq!(rcode_name(11), "RCODE11");
}
