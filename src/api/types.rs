//! Lookup request types.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

/// Lookup performed against the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Domain registration metadata
    Whois,
    /// DNS records
    Dns,
    /// SSL/TLS certificate details
    Ssl,
}

impl Operation {
    /// Short identifier used in single-lookup export file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Operation::Whois => "whois",
            Operation::Dns => "dns",
            Operation::Ssl => "ssl",
        }
    }

    /// Human-readable name of the operation.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Whois => "WHOIS Lookup",
            Operation::Dns => "DNS Lookup",
            Operation::Ssl => "SSL Certificate Check",
        }
    }

    /// Heading shown above a single lookup result.
    pub fn result_title(&self, domain: &str) -> String {
        match self {
            Operation::Whois => format!("WHOIS Information for {domain}"),
            Operation::Dns => format!("DNS Records for {domain}"),
            Operation::Ssl => format!("SSL Certificate for {domain}"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// DNS record type for `nslookup`.
///
/// `All` means "all records": no `type` parameter is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
pub enum RecordType {
    /// All records (no `type` parameter)
    #[default]
    All,
    /// IPv4 address
    A,
    /// Mail exchanger
    Mx,
    /// Text record
    Txt,
    /// Canonical name
    Cname,
    /// Name server
    Ns,
    /// Reverse pointer
    Ptr,
    /// IPv6 address
    Aaaa,
    /// Start of authority
    Soa,
}

impl RecordType {
    /// Value of the `type` query parameter, or `None` for all records.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            RecordType::All => None,
            RecordType::A => Some("A"),
            RecordType::Mx => Some("MX"),
            RecordType::Txt => Some("TXT"),
            RecordType::Cname => Some("CNAME"),
            RecordType::Ns => Some("NS"),
            RecordType::Ptr => Some("PTR"),
            RecordType::Aaaa => Some("AAAA"),
            RecordType::Soa => Some("SOA"),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value().unwrap_or("All Records"))
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" | "ALL RECORDS" => Ok(RecordType::All),
            "A" => Ok(RecordType::A),
            "MX" => Ok(RecordType::Mx),
            "TXT" => Ok(RecordType::Txt),
            "CNAME" => Ok(RecordType::Cname),
            "NS" => Ok(RecordType::Ns),
            "PTR" => Ok(RecordType::Ptr),
            "AAAA" => Ok(RecordType::Aaaa),
            "SOA" => Ok(RecordType::Soa),
            other => Err(format!("unknown DNS record type: {other}")),
        }
    }
}

/// One lookup to perform. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    domain: String,
    operation: Operation,
    record_type: Option<RecordType>,
}

impl LookupRequest {
    /// Creates a request with no record type. Surrounding whitespace is
    /// stripped from `domain`.
    pub fn new(domain: impl Into<String>, operation: Operation) -> Self {
        let domain = domain.into();
        let domain = if domain.trim().len() == domain.len() {
            domain
        } else {
            domain.trim().to_string()
        };
        Self {
            domain,
            operation,
            record_type: None,
        }
    }

    /// Sets the DNS record type. Ignored for non-DNS operations.
    pub fn with_record_type(mut self, record_type: RecordType) -> Self {
        if self.operation == Operation::Dns {
            self.record_type = Some(record_type);
        }
        self
    }

    /// Domain to look up.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Operation to perform.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// DNS record type, `None` outside DNS lookups.
    pub fn record_type(&self) -> Option<RecordType> {
        self.record_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_records_has_no_query_value() {
        assert_eq!(RecordType::All.query_value(), None);
        assert_eq!(RecordType::Mx.query_value(), Some("MX"));
        assert_eq!(RecordType::Aaaa.query_value(), Some("AAAA"));
    }

    #[test]
    fn test_record_type_from_str() {
        assert_eq!("mx".parse::<RecordType>(), Ok(RecordType::Mx));
        assert_eq!("CNAME".parse::<RecordType>(), Ok(RecordType::Cname));
        assert_eq!("All Records".parse::<RecordType>(), Ok(RecordType::All));
        assert_eq!("all".parse::<RecordType>(), Ok(RecordType::All));
        assert!("SRV".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_operation_labels() {
        assert_eq!(Operation::Whois.slug(), "whois");
        assert_eq!(Operation::Ssl.label(), "SSL Certificate Check");
        assert_eq!(
            Operation::Dns.result_title("example.com"),
            "DNS Records for example.com"
        );
    }

    #[test]
    fn test_request_domain_is_trimmed() {
        let request = LookupRequest::new("  example.com\t", Operation::Whois);
        assert_eq!(request.domain(), "example.com");
        assert_eq!(LookupRequest::new("   ", Operation::Ssl).domain(), "");
    }

    #[test]
    fn test_record_type_only_kept_for_dns() {
        let dns = LookupRequest::new("example.com", Operation::Dns).with_record_type(RecordType::Mx);
        assert_eq!(dns.record_type(), Some(RecordType::Mx));

        let whois =
            LookupRequest::new("example.com", Operation::Whois).with_record_type(RecordType::Mx);
        assert_eq!(whois.record_type(), None);
    }
}
