//! Reference claims struct carrying the RFC 7519 registered claims

use serde::{
    Deserialize,
    Serialize,
};
use serde_with::{
    OneOrMany,
    formats::PreferMany,
    serde_as,
};

use crate::claims::{
    Aud,
    Exp,
    Iat,
    Iss,
    Jti,
    Nbf,
    Sub,
};

static EMPTY_AUDIENCE: [String; 0] = [];

/// Decoded body of an identity token, restricted to the registered claims.
///
/// Every claim is optional; absent claims report their zero value through
/// the accessor traits (empty string, `0`, or an empty audience). The `aud`
/// field deserializes from either a bare JSON string or an array of strings,
/// as RFC 7519 permits both encodings.
///
/// A [`Payload`] is immutable input to validation; no validator mutates it.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// `iss` (Issuer) claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// `sub` (Subject) claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// `aud` (Audience) claim, in token order
    #[serde_as(as = "Option<OneOrMany<_, PreferMany>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<Vec<String>>,

    /// `exp` (Expiration Time) claim, Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// `nbf` (Not Before) claim, Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// `iat` (Issued At) claim, Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// `jti` (JWT ID) claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Iss for Payload {
    fn iss(&self) -> &str {
        self.iss.as_deref().unwrap_or("")
    }
}

impl Sub for Payload {
    fn sub(&self) -> &str {
        self.sub.as_deref().unwrap_or("")
    }
}

impl Aud for Payload {
    fn aud(&self) -> impl Iterator<Item = impl AsRef<str>> {
        self.aud
            .as_ref()
            .map_or_else(|| EMPTY_AUDIENCE.iter(), |aud| aud.iter())
    }
}

impl Exp for Payload {
    fn exp(&self) -> i64 {
        self.exp.unwrap_or(0)
    }
}

impl Nbf for Payload {
    fn nbf(&self) -> i64 {
        self.nbf.unwrap_or(0)
    }
}

impl Iat for Payload {
    fn iat(&self) -> i64 {
        self.iat.unwrap_or(0)
    }
}

impl Jti for Payload {
    fn jti(&self) -> &str {
        self.jti.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn aud_deserializes_from_single_string() {
        let payload: Payload = serde_json::from_str(r#"{"aud":"svc-a"}"#).unwrap();
        assert_eq!(payload.aud, Some(vec!["svc-a".to_owned()]));
    }

    #[test]
    fn aud_deserializes_from_array_preserving_order() {
        let payload: Payload = serde_json::from_str(r#"{"aud":["svc-a","svc-b"]}"#).unwrap();
        assert_eq!(
            payload.aud,
            Some(vec!["svc-a".to_owned(), "svc-b".to_owned()])
        );
    }

    #[test]
    fn absent_claims_report_zero_values() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, Payload::default());
        assert_eq!(Iss::iss(&payload), "");
        assert_eq!(Sub::sub(&payload), "");
        assert_eq!(Jti::jti(&payload), "");
        assert_eq!(Exp::exp(&payload), 0);
        assert_eq!(Nbf::nbf(&payload), 0);
        assert_eq!(Iat::iat(&payload), 0);
        assert_eq!(Aud::aud(&payload).count(), 0);
    }

    #[test]
    fn registered_claims_deserialize() {
        let payload: Payload = serde_json::from_str(
            r#"{
                "iss": "auth.example.org",
                "sub": "user-1",
                "aud": ["svc-a"],
                "exp": 1700000300,
                "nbf": 1700000000,
                "iat": 1700000000,
                "jti": "token-1"
            }"#,
        )
        .unwrap();
        assert_eq!(Iss::iss(&payload), "auth.example.org");
        assert_eq!(Sub::sub(&payload), "user-1");
        assert_eq!(Exp::exp(&payload), 1_700_000_300);
        assert_eq!(Nbf::nbf(&payload), 1_700_000_000);
        assert_eq!(Iat::iat(&payload), 1_700_000_000);
        assert_eq!(Jti::jti(&payload), "token-1");
    }
}
