use finweb_client::{ApiClient, ClientError};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn stats_success() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/stats/");
            then.status(200).json_body(json!({
                "total_deudores": 3,
                "total_por_cobrar": 500.0,
                "total_por_pagar": 200.0,
                "ingresos_mes": 1500.0,
                "egresos_mes": 800.0,
            }));
        })
        .await;

    let client = ApiClient::new(server.url("/api"));
    let stats = client.dashboard_stats().await.unwrap();

    assert_eq!(stats.total_deudores, Some(3));
    assert_eq!(stats.total_por_cobrar, Some(500.0));
    assert_eq!(stats.total_por_pagar, Some(200.0));
    // fields the API did not send stay modeled as absent
    assert_eq!(stats.deudas_vencidas, None);
}

#[tokio::test]
async fn stats_non_success_status_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/stats/");
            then.status(500).json_body(json!({"error": "boom"}));
        })
        .await;

    let client = ApiClient::new(server.url("/api"));
    let err = client.dashboard_stats().await.unwrap_err();

    match err {
        ClientError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/stats/");
            then.status(200)
                .header("content-type", "application/json")
                .body("{not json");
        })
        .await;

    let client = ApiClient::new(server.url("/api"));
    assert!(client.dashboard_stats().await.is_err());
}

#[tokio::test]
async fn connection_refused_is_an_error() {
    // discard port, nothing listens there
    let client = ApiClient::new("http://127.0.0.1:9/api");
    let err = client.dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn debtors_paginated_envelope_is_unwrapped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/deudores/");
            then.status(200).json_body(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    {"id": 1, "nombre": "Juan Pérez", "total_deuda": "1200000.00", "activo": true},
                    {"id": 2, "nombre": "Ana Gómez", "total_deuda": 50000.0, "activo": true},
                ],
            }));
        })
        .await;

    let client = ApiClient::new(server.url("/api"));
    let debtors = client.debtors().await.unwrap();

    assert_eq!(debtors.len(), 2);
    assert_eq!(debtors[0].nombre.as_deref(), Some("Juan Pérez"));
    assert_eq!(debtors[0].total_deuda.value(), 1200000.0);
    assert_eq!(debtors[1].total_deuda.value(), 50000.0);
}

#[tokio::test]
async fn debtors_bare_array_decodes_the_same() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/deudores/");
            then.status(200)
                .json_body(json!([{"id": 1, "nombre": "Juan Pérez", "total_deuda": 0}]));
        })
        .await;

    let client = ApiClient::new(server.url("/api"));
    let debtors = client.debtors().await.unwrap();

    assert_eq!(debtors.len(), 1);
    assert_eq!(debtors[0].nombre.as_deref(), Some("Juan Pérez"));
}

#[tokio::test]
async fn charts_with_missing_sections_default_to_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/graficos/");
            then.status(200).json_body(json!({
                "ingresos_egresos_meses": [
                    {"mes": "July 2025", "ingresos": 100.0, "egresos": 50.0},
                ],
            }));
        })
        .await;

    let client = ApiClient::new(server.url("/api"));
    let charts = client.dashboard_charts().await.unwrap();

    assert_eq!(charts.ingresos_egresos_meses.len(), 1);
    assert_eq!(charts.ingresos_egresos_meses[0].ingresos.value(), 100.0);
    assert!(charts.gastos_por_categoria.is_empty());
}

#[tokio::test]
async fn stats_raw_passes_payload_through_verbatim() {
    let server = MockServer::start_async().await;
    let payload = json!({"total_por_cobrar": 1000.0, "campo_nuevo": "se conserva"});
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard/stats/");
            then.status(200).json_body(payload.clone());
        })
        .await;

    let client = ApiClient::new(server.url("/api"));
    let raw = client.dashboard_stats_raw().await.unwrap();

    assert_eq!(raw, payload);
}

#[test]
fn trailing_slash_in_base_url_is_tolerated() {
    let client = ApiClient::new("http://localhost:8090/api/");
    assert_eq!(client.base_url(), "http://localhost:8090/api");
}
