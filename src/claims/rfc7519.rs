//! Accessor traits for the JWT claims registered in RFC 7519
//!
//! Validators are generic over any claims type implementing the traits for
//! the claims they inspect, so callers may bring their own payload struct.
//! Accessors return the claim's zero value when the claim is absent: the
//! empty string for string claims, `0` for timestamp claims and an empty
//! iterator for the audience.

/// `iss` (Issuer) Claim
///
/// Ref: [RFC 7519 4.1.1](<https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.1>)
pub trait Iss {
    /// Return the `iss` (Issuer) claim of the payload
    fn iss(&self) -> &str;
}

/// `sub` (Subject) Claim
///
/// Ref: [RFC 7519 4.1.2](<https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.2>)
pub trait Sub {
    /// Return the `sub` (Subject) claim of the payload
    fn sub(&self) -> &str;
}

/// `aud` (Audience) Claim
///
/// Ref: [RFC 7519 4.1.3](<https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.3>)
pub trait Aud {
    /// Return the `aud` (Audience) claim of the payload, in payload order
    fn aud(&self) -> impl Iterator<Item = impl AsRef<str>>;
}

/// `exp` (Expiration Time) Claim, in Unix seconds
///
/// Ref: [RFC 7519 4.1.4](<https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.4>)
pub trait Exp {
    /// Return the `exp` (Expiration Time) claim of the payload
    fn exp(&self) -> i64;
}

/// `nbf` (Not Before) Claim, in Unix seconds
///
/// Ref: [RFC 7519 4.1.5](<https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.5>)
pub trait Nbf {
    /// Return the `nbf` (Not Before) claim of the payload
    fn nbf(&self) -> i64;
}

/// `iat` (Issued At) Claim, in Unix seconds
///
/// Ref: [RFC 7519 4.1.6](<https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.6>)
pub trait Iat {
    /// Return the `iat` (Issued At) claim of the payload
    fn iat(&self) -> i64;
}

/// `jti` (JWT ID) Claim
///
/// Ref: [RFC 7519 4.1.7](<https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.7>)
pub trait Jti {
    /// Return the `jti` (JWT ID) claim of the payload
    fn jti(&self) -> &str;
}
