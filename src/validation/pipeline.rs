use crate::{
    claims::{
        Aud,
        Exp,
        Iat,
        Iss,
        Jti,
        Nbf,
        Sub,
    },
    error::ClaimError,
    validation::validator::{
        AudienceValidator,
        ClaimValidator,
        ExpirationValidator,
        IssuedAtValidator,
        IssuerValidator,
        JwtIdValidator,
        NotBeforeValidator,
        SubjectValidator,
    },
};

/// Builder assembling an ordered list of claim validators
///
/// Validators run in the order they are added, and the pipeline returns on
/// the first failure, so insertion order decides which error surfaces when
/// several claims are simultaneously invalid.
pub struct ValidationPipelineBuilder<C> {
    validators: Vec<Box<dyn ClaimValidator<C> + Send + Sync>>,
}

impl<C> Default for ValidationPipelineBuilder<C> {
    fn default() -> Self {
        Self {
            validators: Vec::new(),
        }
    }
}

impl<C> ValidationPipelineBuilder<C> {
    /// Returns an empty [`ValidationPipelineBuilder`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects payloads whose `aud` list shares no entry with `accepted_audiences`.
    ///
    /// Matching is many-to-many exact string equality, in the order given
    /// here, short-circuiting on the first hit; no normalization is applied.
    #[must_use]
    pub fn with_audience_validator(
        mut self,
        accepted_audiences: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self
    where
        C: Aud,
    {
        self.validators
            .push(Box::new(AudienceValidator::new(accepted_audiences)));
        self
    }

    /// Rejects payloads whose `exp` time is before the reference time `now`.
    ///
    /// When `validate_zero` is `false`, an `exp` of zero is treated as
    /// "never expires" and passes unconditionally. `exp` is the only claim
    /// with this bypass; `iat` and `nbf` are always checked.
    #[must_use]
    pub fn with_expiration_validator(mut self, now: i64, validate_zero: bool) -> Self
    where
        C: Exp,
    {
        self.validators
            .push(Box::new(ExpirationValidator::new(now, validate_zero)));
        self
    }

    /// Rejects payloads whose `iat` time is after the reference time `now`
    /// (i.e. tokens issued in the future).
    #[must_use]
    pub fn with_issued_at_validator(mut self, now: i64) -> Self
    where
        C: Iat,
    {
        self.validators.push(Box::new(IssuedAtValidator::new(now)));
        self
    }

    /// Rejects payloads whose `iss` field does not equal the given `iss` value.
    #[must_use]
    pub fn with_issuer_validator(mut self, iss: impl Into<String>) -> Self
    where
        C: Iss,
    {
        self.validators
            .push(Box::new(IssuerValidator::new(iss.into())));
        self
    }

    /// Rejects payloads whose `jti` field does not equal the given `jti` value.
    #[must_use]
    pub fn with_jwt_id_validator(mut self, jti: impl Into<String>) -> Self
    where
        C: Jti,
    {
        self.validators
            .push(Box::new(JwtIdValidator::new(jti.into())));
        self
    }

    /// Rejects payloads whose `nbf` time is after the reference time `now`.
    #[must_use]
    pub fn with_not_before_validator(mut self, now: i64) -> Self
    where
        C: Nbf,
    {
        self.validators.push(Box::new(NotBeforeValidator::new(now)));
        self
    }

    /// Rejects payloads whose `sub` field does not equal the given `sub` value.
    #[must_use]
    pub fn with_subject_validator(mut self, sub: impl Into<String>) -> Self
    where
        C: Sub,
    {
        self.validators
            .push(Box::new(SubjectValidator::new(sub.into())));
        self
    }

    /// Adds a custom validator to the validation pipeline.
    /// This method may be chained to add multiple custom validators.
    #[must_use]
    pub fn with(mut self, validator: impl ClaimValidator<C> + Send + Sync + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Finalizes the validation pipeline construction.
    #[must_use]
    pub fn build(self) -> ValidationPipeline<C> {
        ValidationPipeline::new(self.validators)
    }
}

/// Validation pipeline that, once built, applies its validators to decoded payloads
///
/// A pipeline is constructed once and reused for any number of payloads; it
/// holds no per-call state and is safe to share across threads.
pub struct ValidationPipeline<C> {
    validators: Vec<Box<dyn ClaimValidator<C> + Send + Sync>>,
}

impl<C> ValidationPipeline<C> {
    /// Returns a new [`ValidationPipelineBuilder`].
    #[must_use]
    pub fn builder() -> ValidationPipelineBuilder<C> {
        ValidationPipelineBuilder::new()
    }

    pub(crate) fn new(validators: Vec<Box<dyn ClaimValidator<C> + Send + Sync>>) -> Self {
        Self { validators }
    }

    /// Applies the pipeline's validators to `claims`, in insertion order.
    ///
    /// An empty pipeline accepts every payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClaimError`] raised by a validator, verbatim;
    /// validators after the failing one are not run.
    pub fn validate(&self, claims: &C) -> Result<(), ClaimError> {
        for v in &self.validators {
            v.validate(claims)?;
        }
        Ok(())
    }
}
