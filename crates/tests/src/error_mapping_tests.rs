use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::ApiErrorKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{test_client, TOKEN};

#[tokio::test]
async fn forbidden_keeps_the_backend_message() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/paciente"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "solo administradores"
        })))
        .mount(&server)
        .await;

    let err = client.listar_pacientes(TOKEN).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Forbidden);
    assert_eq!(err.mensaje_usuario(), "solo administradores");
}

#[tokio::test]
async fn error_body_under_error_key_is_also_read() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/dentista"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "no hay dentistas"
        })))
        .mount(&server)
        .await;

    let err = client.listar_dentistas(TOKEN).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::NotFound);
    assert_eq!(err.mensaje_usuario(), "no hay dentistas");
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_message() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/turno"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.listar_turnos(TOKEN).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Internal);
    assert_eq!(err.mensaje_usuario(), "Ocurrió un error inesperado");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/turno"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let err = client.listar_turnos(TOKEN).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = api_client::ApiClient::new("http://127.0.0.1:1");

    let err = client.listar_turnos(TOKEN).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
}
