// JUSTIFICATION: using `pub(crate)` makes it immediately obvious that an item
// is not exposed via the public API.
#![allow(clippy::redundant_pub_crate)]

use crate::{
    ClaimError,
    claims::{
        Aud,
        Exp,
        Iat,
        Iss,
        Jti,
        Nbf,
        Sub,
    },
};

/// Trait for implementing custom claim validator units
///
/// A validator unit is a pure function of its captured configuration and the
/// claims argument: it holds no per-call state, never mutates the claims and
/// never reads the wall clock, so a configured unit may be invoked any
/// number of times, from any number of threads, with identical results.
///
/// # Example Implementation
///
/// ```rust
/// use std::collections::HashSet;
/// use claimgate::{
///     ClaimError,
///     claims::Iss,
///     validation::{
///         ClaimValidator,
///         ValidationPipeline,
///     },
/// };
///
/// pub struct MultiIssuerValidator {
///     accepted_issuers: HashSet<String>,
/// }
/// impl MultiIssuerValidator {
///     pub fn new(accepted_issuers: impl IntoIterator<Item = impl Into<String>>) -> Self {
///         let accepted_issuers = accepted_issuers.into_iter().map(|iss| iss.into());
///         Self {
///             accepted_issuers: HashSet::from_iter(accepted_issuers),
///         }
///     }
/// }
/// impl<C> ClaimValidator<C> for MultiIssuerValidator
/// where
///     C: Iss,
/// {
///     fn validate(&self, claims: &C) -> Result<(), ClaimError> {
///         if self.accepted_issuers.contains(claims.iss()) {
///             Ok(())
///         } else {
///             Err(ClaimError::WrongIssuer)
///         }
///     }
/// }
///
/// fn main() {
///     let now = 1_700_000_000;
///     let pipeline = ValidationPipeline::<claimgate::Payload>::builder()
///         .with_expiration_validator(now, false)
///         .with(MultiIssuerValidator::new([
///             "claimgate.example.org",
///             "jwt.example.org",
///         ]))
///         // additional `.with(...)` calls can be chained here
///         // all validators are ran in-order
///         .build();
/// }
/// ```
pub trait ClaimValidator<C: ?Sized> {
    /// Given the decoded `claims` of a token, perform some validation step.
    ///
    /// # Errors
    ///
    /// This method MUST return a [`ClaimError`] if `claims` do not pass the
    /// validation step performed by this [`ClaimValidator`] implementation
    /// (e.g. [`ClaimError::Expired`] if the `exp` field is in the past
    /// relative to the configured reference time).
    ///
    /// # Returns
    ///
    /// [`Ok`] if, and only if, the validation step performed by this
    /// [`ClaimValidator`] succeeds and indicates the claims are valid.
    fn validate(&self, claims: &C) -> Result<(), ClaimError>;
}

pub(crate) struct AudienceValidator {
    accepted_audiences: Vec<String>,
}
impl AudienceValidator {
    pub(crate) fn new(accepted_audiences: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let accepted_audiences = accepted_audiences.into_iter().map(Into::into).collect();
        Self { accepted_audiences }
    }
}
impl<C> ClaimValidator<C> for AudienceValidator
where
    C: Aud,
{
    fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        for accepted in &self.accepted_audiences {
            if claims.aud().any(|aud| aud.as_ref() == accepted) {
                return Ok(());
            }
        }
        Err(ClaimError::WrongAudience)
    }
}

pub(crate) struct ExpirationValidator {
    now: i64,
    validate_zero: bool,
}
impl ExpirationValidator {
    pub(crate) const fn new(now: i64, validate_zero: bool) -> Self {
        Self { now, validate_zero }
    }
}
impl<C> ClaimValidator<C> for ExpirationValidator
where
    C: Exp,
{
    fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        let exp = claims.exp();
        // zero means "never expires" unless the caller opted in to checking it
        if !self.validate_zero && exp == 0 {
            return Ok(());
        }
        if self.now > exp {
            Err(ClaimError::Expired)
        } else {
            Ok(())
        }
    }
}

pub(crate) struct IssuedAtValidator {
    now: i64,
}
impl IssuedAtValidator {
    pub(crate) const fn new(now: i64) -> Self {
        Self { now }
    }
}
impl<C> ClaimValidator<C> for IssuedAtValidator
where
    C: Iat,
{
    fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        if self.now < claims.iat() {
            Err(ClaimError::IssuedInFuture)
        } else {
            Ok(())
        }
    }
}

pub(crate) struct IssuerValidator {
    expected_issuer: String,
}
impl IssuerValidator {
    pub(crate) const fn new(iss: String) -> Self {
        Self {
            expected_issuer: iss,
        }
    }
}
impl<C> ClaimValidator<C> for IssuerValidator
where
    C: Iss,
{
    fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        if self.expected_issuer == claims.iss() {
            Ok(())
        } else {
            Err(ClaimError::WrongIssuer)
        }
    }
}

pub(crate) struct JwtIdValidator {
    expected_id: String,
}
impl JwtIdValidator {
    pub(crate) const fn new(jti: String) -> Self {
        Self { expected_id: jti }
    }
}
impl<C> ClaimValidator<C> for JwtIdValidator
where
    C: Jti,
{
    fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        if self.expected_id == claims.jti() {
            Ok(())
        } else {
            Err(ClaimError::WrongTokenId)
        }
    }
}

pub(crate) struct NotBeforeValidator {
    now: i64,
}
impl NotBeforeValidator {
    pub(crate) const fn new(now: i64) -> Self {
        Self { now }
    }
}
impl<C> ClaimValidator<C> for NotBeforeValidator
where
    C: Nbf,
{
    fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        if self.now < claims.nbf() {
            Err(ClaimError::NotYetValid)
        } else {
            Ok(())
        }
    }
}

pub(crate) struct SubjectValidator {
    expected_subject: String,
}
impl SubjectValidator {
    pub(crate) const fn new(sub: String) -> Self {
        Self {
            expected_subject: sub,
        }
    }
}
impl<C> ClaimValidator<C> for SubjectValidator
where
    C: Sub,
{
    fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        if self.expected_subject == claims.sub() {
            Ok(())
        } else {
            Err(ClaimError::WrongSubject)
        }
    }
}
