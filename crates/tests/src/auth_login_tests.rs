use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{BackendLoginRequest, UserRole};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{paciente_json, test_client, usuario_json, TOKEN};

fn login_request() -> BackendLoginRequest {
    BackendLoginRequest {
        auth0_id: "auth0|abc".to_string(),
        nombre: "Ana Pérez".to_string(),
        email: "ana@example.com".to_string(),
    }
}

#[tokio::test]
async fn login_sends_bearer_token_and_camel_case_body() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("authorization", format!("Bearer {TOKEN}")))
        .and(body_json(json!({
            "auth0Id": "auth0|abc",
            "nombre": "Ana Pérez",
            "email": "ana@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "role": "paciente",
            "patient": paciente_json(1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let respuesta = client.login(TOKEN, &login_request()).await.unwrap();
    let (rol, perfil) = respuesta.into_partes();
    assert_eq!(rol, UserRole::Paciente);
    assert_eq!(perfil.id(), 1);
}

#[tokio::test]
async fn login_resolves_dentist_role() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "role": "dentista",
            "dentist": crate::common::dentista_json(5)
        })))
        .mount(&server)
        .await;

    let respuesta = client.login(TOKEN, &login_request()).await.unwrap();
    assert_eq!(respuesta.role(), UserRole::Dentista);
}

#[tokio::test]
async fn login_resolves_administrator_role() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "role": "administrador",
            "administrator": {
                "id": 9,
                "usuario": usuario_json(300, "Marta", "Admin")
            }
        })))
        .mount(&server)
        .await;

    let respuesta = client.login(TOKEN, &login_request()).await.unwrap();
    let (rol, perfil) = respuesta.into_partes();
    assert_eq!(rol, UserRole::Administrador);
    assert_eq!(perfil.id(), 9);
}

#[tokio::test]
async fn login_with_expired_token_is_unauthorized() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "token expirado"
        })))
        .mount(&server)
        .await;

    let err = client.login(TOKEN, &login_request()).await.unwrap_err();
    assert_eq!(err.kind, shared_types::ApiErrorKind::Unauthorized);
}
