//! Format validators: fixed regular-expression grammars for common string formats
//!
//! Each format derives one pattern from its parameters and otherwise behaves
//! like [`StringRegexValidator`]: full-string match through the factory's
//! regex strategy.
//!
//! Copyright (c) 2025 Valdox Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::Constraint;
use crate::validation::matcher::RegexStrategy;
use crate::validation::string::{StringRegexValidator, StringValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const EMAIL: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const UUID: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-8][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}";

const DATE: &str = "[0-9]{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])";
const HOUR: &str = "(?:[01][0-9]|2[0-3])";
const MINUTE: &str = "[0-5][0-9]";
const FRACTION: &str = r"(?:\.[0-9]+)?";

const IPV4_OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";
const IPV4_PREFIX: &str = "(?:3[0-2]|[12]?[0-9])";
const IPV6_HEXTET: &str = "[0-9a-fA-F]{1,4}";
const IPV6_PREFIX: &str = "(?:12[0-8]|1[01][0-9]|[1-9]?[0-9])";

const HEX_PAIR: &str = "[0-9a-fA-F]{2}";

/// URL schemes accepted by the `url` format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlProtocol {
    Ws,
    Http,
    All,
}

/// Whether the URL scheme must, may or must not carry the `s` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlSecurity {
    NonSecure,
    Secure,
    All,
}

/// Offset handling for global date-times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeOffset {
    /// Must end with `Z`
    None,
    /// `Z`, `±hh:mm`, or nothing
    Optional,
    /// `Z` or `±hh:mm`
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpVersion {
    V4,
    V6,
}

/// A fixed string format and its parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Email,
    Uuid,
    Url {
        protocol: UrlProtocol,
        security: UrlSecurity,
    },
    GlobalDateTime(DateTimeOffset),
    LocalDateTime,
    Date,
    Time,
    Ip {
        version: IpVersion,
        with_prefix_length: bool,
    },
    Mac {
        separator: String,
    },
}

impl Format {
    /// The regular expression this format matches against
    pub fn pattern(&self) -> String {
        match self {
            Format::Email => EMAIL.to_string(),
            Format::Uuid => UUID.to_string(),
            Format::Url { protocol, security } => url_pattern(*protocol, *security),
            Format::GlobalDateTime(offset) => {
                let numeric = format!("[+-]{}:{}", HOUR, MINUTE);
                let suffix = match offset {
                    DateTimeOffset::None => "Z".to_string(),
                    DateTimeOffset::Optional => format!("(?:Z|{})?", numeric),
                    DateTimeOffset::Required => format!("(?:Z|{})", numeric),
                };
                format!(
                    "{date}T{h}:{m}:{m}{frac}{suffix}",
                    date = DATE,
                    h = HOUR,
                    m = MINUTE,
                    frac = FRACTION,
                    suffix = suffix
                )
            }
            Format::LocalDateTime => format!("{}T{}:{}(?::{})?", DATE, HOUR, MINUTE, MINUTE),
            Format::Date => DATE.to_string(),
            Format::Time => format!("{}:{}(?::{}{})?", HOUR, MINUTE, MINUTE, FRACTION),
            Format::Ip {
                version,
                with_prefix_length,
            } => ip_pattern(*version, *with_prefix_length),
            Format::Mac { separator } => format!(
                "{pair}(?:{sep}{pair}){{5}}",
                pair = HEX_PAIR,
                sep = regex::escape(separator)
            ),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Email => write!(f, "email address"),
            Format::Uuid => write!(f, "UUID"),
            Format::Url { .. } => write!(f, "URL"),
            Format::GlobalDateTime(_) => write!(f, "global date-time"),
            Format::LocalDateTime => write!(f, "local date-time"),
            Format::Date => write!(f, "date"),
            Format::Time => write!(f, "time"),
            Format::Ip {
                version: IpVersion::V4,
                ..
            } => write!(f, "IPv4 address"),
            Format::Ip {
                version: IpVersion::V6,
                ..
            } => write!(f, "IPv6 address"),
            Format::Mac { .. } => write!(f, "MAC address"),
        }
    }
}

fn url_pattern(protocol: UrlProtocol, security: UrlSecurity) -> String {
    let scheme = match protocol {
        UrlProtocol::Ws => "ws",
        UrlProtocol::Http => "http",
        UrlProtocol::All => "(?:ws|http)",
    };
    let secure = match security {
        UrlSecurity::NonSecure => "",
        UrlSecurity::Secure => "s",
        UrlSecurity::All => "s?",
    };
    format!(r"{}{}://\S+", scheme, secure)
}

fn ip_pattern(version: IpVersion, with_prefix_length: bool) -> String {
    let ipv4 = format!(r"{o}(?:\.{o}){{3}}", o = IPV4_OCTET);
    match version {
        IpVersion::V4 => {
            let address = ipv4;
            if with_prefix_length {
                format!("{}(?:/{})?", address, IPV4_PREFIX)
            } else {
                address
            }
        }
        IpVersion::V6 => {
            let h = IPV6_HEXTET;
            let forms = [
                format!("(?:{h}:){{7}}{h}"),
                format!("(?:{h}:){{1,7}}:"),
                format!("(?:{h}:){{1,6}}:{h}"),
                format!("(?:{h}:){{1,5}}(?::{h}){{1,2}}"),
                format!("(?:{h}:){{1,4}}(?::{h}){{1,3}}"),
                format!("(?:{h}:){{1,3}}(?::{h}){{1,4}}"),
                format!("(?:{h}:){{1,2}}(?::{h}){{1,5}}"),
                format!("{h}:(?::{h}){{1,6}}"),
                format!(":(?:(?::{h}){{1,7}}|:)"),
                // trailing dotted quad
                format!("(?:{h}:){{6}}{ipv4}"),
                format!("::(?:ffff(?::0{{1,4}})?:)?{ipv4}"),
                format!("(?:{h}:){{1,4}}:{ipv4}"),
            ];
            let address = format!("(?:{})", forms.join("|"));
            if with_prefix_length {
                format!("{}(?:/{})?", address, IPV6_PREFIX)
            } else {
                address
            }
        }
    }
}

/// Validator for one fixed [`Format`]
#[derive(Debug, Clone)]
pub struct FormatValidator {
    format: Format,
    regex: StringRegexValidator,
}

impl FormatValidator {
    pub fn new(format: Format, strategy: Arc<dyn RegexStrategy>) -> Self {
        let regex = StringRegexValidator::trusted(format.pattern(), strategy);
        Self { format, regex }
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn pattern(&self) -> &str {
        self.regex.pattern()
    }

    /// Capture groups of a successful match; built-in formats define none
    pub fn captures(&self, value: &str) -> Option<Vec<String>> {
        self.regex.captures(value)
    }
}

impl Constraint for FormatValidator {
    type Value = str;

    fn test(&self, value: &str) -> bool {
        self.regex.test(value)
    }

    fn expected(&self) -> String {
        format!("valid {}", self.format)
    }
}

/// Factory for date-time formats
#[derive(Debug, Clone)]
pub struct DateTimeValidator {
    strategy: Arc<dyn RegexStrategy>,
}

impl DateTimeValidator {
    /// `YYYY-MM-DDThh:mm:ss[.fraction]` followed by the offset per `offset`
    pub fn global(&self, offset: DateTimeOffset) -> FormatValidator {
        FormatValidator::new(Format::GlobalDateTime(offset), self.strategy.clone())
    }

    /// `YYYY-MM-DDThh:mm[:ss]` with no offset
    pub fn local(&self) -> FormatValidator {
        FormatValidator::new(Format::LocalDateTime, self.strategy.clone())
    }
}

impl StringValidator {
    pub fn email(&self) -> FormatValidator {
        self.format(Format::Email)
    }

    /// Canonical 8-4-4-4-12 UUID, versions 1 to 8, RFC variant
    pub fn uuid(&self) -> FormatValidator {
        self.format(Format::Uuid)
    }

    pub fn url(&self, protocol: UrlProtocol, security: UrlSecurity) -> FormatValidator {
        self.format(Format::Url { protocol, security })
    }

    /// Date-time formats
    pub fn date_time(&self) -> DateTimeValidator {
        DateTimeValidator {
            strategy: self.strategy.clone(),
        }
    }

    /// `YYYY-MM-DD`; days are checked against 01-31 only
    pub fn date(&self) -> FormatValidator {
        self.format(Format::Date)
    }

    /// `hh:mm[:ss[.fraction]]`
    pub fn time(&self) -> FormatValidator {
        self.format(Format::Time)
    }

    /// IPv4 dotted quad, or IPv6 in hextet form (including `::` compression
    /// and an embedded IPv4 tail such as `::ffff:1.2.3.4`)
    pub fn ip(&self, version: IpVersion, with_prefix_length: bool) -> FormatValidator {
        self.format(Format::Ip {
            version,
            with_prefix_length,
        })
    }

    /// Six hex pairs joined by `separator`, which may be empty
    pub fn mac<S: Into<String>>(&self, separator: S) -> FormatValidator {
        self.format(Format::Mac {
            separator: separator.into(),
        })
    }

    /// Validator for an arbitrary [`Format`]
    pub fn format(&self, format: Format) -> FormatValidator {
        FormatValidator::new(format, self.strategy.clone())
    }
}
