use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::hash_password;
use service::auth::service::{AuthService, AuthConfig};
use service::auth::repository::mock::MockAuthRepository;
use service::auth::domain::LoginInput;

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    repo.insert_user("bench", hash_password("Benchmark1").unwrap(), Default::default()).unwrap();
    let svc = AuthService::new(repo.clone(), AuthConfig { jwt_secret: Some("secret".into()), ..Default::default() });

    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login(LoginInput { username: "bench".into(), password: "Benchmark1".into() })).unwrap();
        });
    });

    let token = rt
        .block_on(svc.login(LoginInput { username: "bench".into(), password: "Benchmark1".into() }))
        .unwrap()
        .token;
    c.bench_function("auth_validate_session", |b| {
        b.iter(|| rt.block_on(svc.validate_session(token.as_deref())));
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
