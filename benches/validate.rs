#![allow(clippy::unwrap_used)]
use std::hint::black_box;

use claimgate::{
    Payload,
    ValidationPipeline,
};
use criterion::{
    Criterion,
    criterion_group,
    criterion_main,
};

const NOW: i64 = 1_700_000_000;

fn payload() -> Payload {
    Payload {
        iss: Some("auth.example.com".into()),
        sub: Some("user-1".into()),
        aud: Some(vec!["svcA".into(), "svcB".into()]),
        exp: Some(NOW + 300),
        nbf: Some(NOW - 60),
        iat: Some(NOW - 60),
        jti: Some("token-1".into()),
    }
}

fn pipeline() -> ValidationPipeline<Payload> {
    ValidationPipeline::builder()
        .with_issuer_validator("auth.example.com")
        .with_audience_validator(["svcB", "svcC"])
        .with_expiration_validator(NOW, false)
        .with_not_before_validator(NOW)
        .with_issued_at_validator(NOW)
        .with_subject_validator("user-1")
        .with_jwt_id_validator("token-1")
        .build()
}

fn validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let payload = payload();

    let full = pipeline();
    group.bench_function("full_pipeline_pass", |b| {
        b.iter(|| black_box(full.validate(black_box(&payload)).unwrap()));
    });

    let failing = ValidationPipeline::builder()
        .with_issuer_validator("other.example.com")
        .build();
    group.bench_function("first_validator_fail", |b| {
        b.iter(|| black_box(failing.validate(black_box(&payload)).unwrap_err()));
    });

    group.finish();
}

criterion_group!(benches, validate);
criterion_main!(benches);
