use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, Criterion};
use oauth2_grants::error::TransportError;
use oauth2_grants::models::decode_attributes;
use oauth2_grants::services::{HttpTransport, RequestOptions, TransportResponse};
use oauth2_grants::{AccessToken, ClientConfig, OAuth2Client};
use std::hint::black_box;

struct Offline;

#[async_trait]
impl HttpTransport for Offline {
    async fn get(&self, _: &str, _: RequestOptions) -> Result<TransportResponse, TransportError> {
        Err(TransportError::Request("offline".to_string()))
    }

    async fn post(&self, _: &str, _: RequestOptions) -> Result<TransportResponse, TransportError> {
        Err(TransportError::Request("offline".to_string()))
    }
}

fn benchmark_authorization_url(c: &mut Criterion) {
    let config = ClientConfig::new("9a3c1f7e-client", "secret", "https://auth.example");
    let client = OAuth2Client::new(config, Offline);

    let mut group = c.benchmark_group("authorization_url");

    group.bench_function("plain_redirect", |b| {
        b.iter(|| client.build_authorization_url(black_box("https://app.example/cb")))
    });

    group.bench_function("redirect_with_query", |b| {
        b.iter(|| {
            client.build_authorization_url(black_box(
                "https://app.example/oauth/callback?next=/settings/profile&lang=en US",
            ))
        })
    });

    group.finish();
}

fn benchmark_token_decoding(c: &mut Criterion) {
    let body = br#"{"token_type":"Bearer","expires_in":31536000,"access_token":"eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.payload.signature","refresh_token":"def50200a1b2c3","scope":""}"#;

    c.bench_function("decode_access_token", |b| {
        b.iter(|| {
            let attributes = decode_attributes(black_box(body)).unwrap();
            AccessToken::from_attributes(attributes).unwrap()
        })
    });
}

criterion_group!(benches, benchmark_authorization_url, benchmark_token_decoding);
criterion_main!(benches);
