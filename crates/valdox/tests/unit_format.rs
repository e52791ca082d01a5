//! Unit tests for format validators
//!
//! Each format is checked against representative valid and invalid inputs.

use valdox::{Constraint, DateTimeOffset, IpVersion, UrlProtocol, UrlSecurity, ValidationErrors, Validator};

#[test]
fn test_email() {
    let v = Validator::new();
    let validator = v.string().email();

    assert!(validator.test("test@example.com"));
    assert!(validator.test("user.name@domain.co.uk"));
    assert!(validator.test("user+tag@example.com"));
    assert!(!validator.test("notanemail"));
    assert!(!validator.test("@example.com"));
    assert!(!validator.test("test@"));

    let mut errors = ValidationErrors::new();
    assert!(!validator.validate("notanemail", "email", &mut errors));
    assert_eq!(
        errors.messages()[0],
        "ValidationError: 'email' received \"notanemail\", expected valid email address."
    );
}

#[test]
fn test_uuid() {
    let v = Validator::new();
    let validator = v.string().uuid();

    assert!(validator.test("123e4567-e89b-12d3-a456-426614174000"));
    assert!(validator.test("550e8400-e29b-41d4-a716-446655440000"));
    assert!(validator.test("550E8400-E29B-41D4-B716-446655440000"));
    assert!(!validator.test("not-a-uuid"));
    assert!(!validator.test("123e4567-e89b-12d3-a456"));
    // version nibble 0 and variant nibble c are both out of range
    assert!(!validator.test("123e4567-e89b-02d3-a456-426614174000"));
    assert!(!validator.test("123e4567-e89b-12d3-c456-426614174000"));
}

#[test]
fn test_url_protocols() {
    let v = Validator::new();

    let http = v.string().url(UrlProtocol::Http, UrlSecurity::All);
    assert!(http.test("http://example.com"));
    assert!(http.test("https://example.com/path?q=1"));
    assert!(!http.test("ws://example.com"));
    assert!(!http.test("not-a-url"));

    let ws = v.string().url(UrlProtocol::Ws, UrlSecurity::All);
    assert!(ws.test("ws://example.com"));
    assert!(ws.test("wss://example.com"));
    assert!(!ws.test("http://example.com"));

    let all = v.string().url(UrlProtocol::All, UrlSecurity::All);
    for url in ["http://example.com", "https://example.com", "ws://example.com", "wss://example.com"] {
        assert!(all.test(url), "{} should be accepted", url);
    }
    assert!(!all.test("ftp://example.com"));
    assert!(!all.test("http://exa mple.com"));
}

#[test]
fn test_url_security() {
    let v = Validator::new();

    let secure = v.string().url(UrlProtocol::Http, UrlSecurity::Secure);
    assert!(secure.test("https://example.com"));
    assert!(!secure.test("http://example.com"));

    let plain = v.string().url(UrlProtocol::All, UrlSecurity::NonSecure);
    assert!(plain.test("ws://example.com"));
    assert!(!plain.test("wss://example.com"));
}

#[test]
fn test_global_date_time() {
    let v = Validator::new();
    let date_time = v.string().date_time();

    let none = date_time.global(DateTimeOffset::None);
    assert!(none.test("2023-12-25T10:30:00Z"));
    assert!(none.test("2023-12-25T10:30:00.123Z"));
    assert!(!none.test("2023-12-25T10:30:00+05:00"));
    assert!(!none.test("2023-12-25T10:30:00"));

    let optional = date_time.global(DateTimeOffset::Optional);
    assert!(optional.test("2023-12-25T10:30:00Z"));
    assert!(optional.test("2023-12-25T10:30:00+05:00"));
    assert!(optional.test("2023-12-25T10:30:00-05:00"));
    assert!(optional.test("2023-12-25T10:30:00"));

    let required = date_time.global(DateTimeOffset::Required);
    assert!(required.test("2023-12-25T10:30:00Z"));
    assert!(required.test("2023-12-25T10:30:00+05:00"));
    assert!(!required.test("2023-12-25T10:30:00"));

    let mut errors = ValidationErrors::new();
    assert!(!none.validate("invalid", "datetime", &mut errors));
    assert!(errors.messages()[0].contains("'datetime'"));
}

#[test]
fn test_local_date_time() {
    let v = Validator::new();
    let local = v.string().date_time().local();

    assert!(local.test("2023-12-25T10:30:00"));
    assert!(local.test("2023-12-25T23:59:59"));
    assert!(local.test("2023-01-01T00:00:00"));
    assert!(local.test("2023-01-01T00:00"));
    assert!(!local.test("2023-12-25T24:00:00"));
    assert!(!local.test("2023-13-25T10:30:00"));
    assert!(!local.test("2023-12-25T10:30:00Z"));
    assert!(!local.test("invalid"));
}

#[test]
fn test_date() {
    let v = Validator::new();
    let validator = v.string().date();

    assert!(validator.test("2023-12-25"));
    assert!(validator.test("2023-01-01"));
    assert!(validator.test("2023-02-28"));
    // only the 01-31 range is enforced
    assert!(validator.test("2023-02-31"));
    assert!(!validator.test("2023-13-01"));
    assert!(!validator.test("2023-12-32"));
    assert!(!validator.test("23-12-25"));
}

#[test]
fn test_time() {
    let v = Validator::new();
    let validator = v.string().time();

    assert!(validator.test("10:30:00"));
    assert!(validator.test("23:59:59"));
    assert!(validator.test("00:00:00"));
    assert!(validator.test("10:30"));
    assert!(validator.test("10:30:00.123"));
    assert!(!validator.test("24:00:00"));
    assert!(!validator.test("10:60:00"));
    assert!(!validator.test("10:30.123"));
}

#[test]
fn test_ipv4() {
    let v = Validator::new();

    let plain = v.string().ip(IpVersion::V4, false);
    assert!(plain.test("192.168.1.1"));
    assert!(plain.test("0.0.0.0"));
    assert!(plain.test("255.255.255.255"));
    assert!(!plain.test("256.1.1.1"));
    assert!(!plain.test("192.168.1"));
    assert!(!plain.test("192.168.1.1/24"));

    let prefixed = v.string().ip(IpVersion::V4, true);
    assert!(prefixed.test("192.168.1.1/24"));
    assert!(prefixed.test("10.0.0.0/8"));
    assert!(prefixed.test("10.0.0.0/0"));
    assert!(prefixed.test("10.0.0.0/32"));
    assert!(!prefixed.test("192.168.1.1/33"));
}

#[test]
fn test_ipv6() {
    let v = Validator::new();

    let plain = v.string().ip(IpVersion::V6, false);
    assert!(plain.test("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
    assert!(plain.test("2001:db8:85a3::8a2e:370:7334"));
    assert!(plain.test("::1"));
    assert!(plain.test("::"));
    assert!(plain.test("fe80::"));
    assert!(!plain.test("not-an-ipv6"));
    assert!(!plain.test("2001:db8::g1"));
    assert!(!plain.test("1:2:3:4:5:6:7:8:9"));

    assert!(plain.test("::ffff:1.2.3.4"));
    assert!(plain.test("::ffff:0:192.168.0.1"));
    assert!(plain.test("64:ff9b::192.0.2.33"));
    assert!(plain.test("0:0:0:0:0:ffff:10.0.0.1"));
    assert!(!plain.test("::ffff:256.1.1.1"));
    assert!(!plain.test("1:2:3:4:5:6:7:1.2.3.4"));

    let prefixed = v.string().ip(IpVersion::V6, true);
    assert!(prefixed.test("2001:db8::/32"));
    assert!(prefixed.test("2001:db8::/128"));
    assert!(!prefixed.test("2001:db8::/129"));
    assert!(prefixed.test("::ffff:10.0.0.0/104"));
}

#[test]
fn test_mac() {
    let v = Validator::new();

    let colon = v.string().mac(":");
    assert!(colon.test("00:11:22:33:44:55"));
    assert!(colon.test("AA:BB:CC:DD:EE:FF"));
    assert!(!colon.test("00-11-22-33-44-55"));
    assert!(!colon.test("00:11:22:33:44"));

    let hyphen = v.string().mac("-");
    assert!(hyphen.test("00-11-22-33-44-55"));
    assert!(!hyphen.test("00:11:22:33:44:55"));

    let bare = v.string().mac("");
    assert!(bare.test("001122334455"));
    assert!(!bare.test("00:11:22:33:44:55"));

    let mut errors = ValidationErrors::new();
    assert!(!colon.validate("invalid", "mac", &mut errors));
    assert!(errors.messages()[0].ends_with("expected valid MAC address."));
}
