use thiserror::Error;

/// Errors raised during claim validation
///
/// Exactly one variant exists per registered claim, so a rejected payload is
/// always attributable to a single claim. Variants are unit values intended
/// to be compared by identity and matched exhaustively; no generic or
/// wrapping variant exists.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClaimError {
    /// Error raised when the `aud` claim shares no entry with the accepted audience list
    #[error("'aud' claim did not contain an accepted audience")]
    WrongAudience,

    /// Error raised when the `exp` claim is before the reference time
    #[error("'exp' claim indicates token is expired")]
    Expired,

    /// Error raised when the `iat` claim is after the reference time
    #[error("'iat' claim indicates token was issued in the future")]
    IssuedInFuture,

    /// Error raised when the `iss` claim does not match the expected issuer
    #[error("'iss' claim did not match expected issuer")]
    WrongIssuer,

    /// Error raised when the `jti` claim does not match the expected token id
    #[error("'jti' claim did not match expected token id")]
    WrongTokenId,

    /// Error raised when the `nbf` claim is after the reference time
    #[error("'nbf' claim indicates token is not yet valid")]
    NotYetValid,

    /// Error raised when the `sub` claim does not match the expected subject
    #[error("'sub' claim did not match expected subject")]
    WrongSubject,
}
