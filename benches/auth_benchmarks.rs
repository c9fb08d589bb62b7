use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keygate::auth::password::{hash_password, verify_password};
use keygate::auth::validation::validate_signup;
use keygate::auth::TokenIssuer;

fn bench_password_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("password");
    // bcrypt at the fixed work factor is deliberately slow
    group.sample_size(10);

    group.bench_function("password_hash", |b| {
        b.iter(|| hash_password(black_box("secret1")))
    });

    let hash = hash_password("secret1").unwrap();
    group.bench_function("password_verify", |b| {
        b.iter(|| verify_password(black_box("secret1"), black_box(&hash)))
    });

    group.finish();
}

fn bench_tokens(c: &mut Criterion) {
    let issuer = TokenIssuer::new("bench-secret", 3600).unwrap();

    c.bench_function("token_issue", |b| {
        b.iter(|| issuer.issue(black_box(42), black_box("bench@example.com")))
    });

    let token = issuer.issue(42, "bench@example.com").unwrap();
    c.bench_function("token_verify", |b| b.iter(|| issuer.verify(black_box(&token))));
    c.bench_function("token_decode_unchecked", |b| {
        b.iter(|| issuer.decode_unchecked(black_box(&token)))
    });
}

fn bench_validation(c: &mut Criterion) {
    c.bench_function("validate_signup", |b| {
        b.iter(|| {
            validate_signup(
                black_box("Alice"),
                black_box("a@b.com"),
                black_box("secret1"),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_password_hashing,
    bench_tokens,
    bench_validation
);
criterion_main!(benches);
