use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::ApiErrorKind;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{test_client, TOKEN};

#[tokio::test]
async fn listar_decodes_the_collection() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/especialidades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "nombre": "Ortodoncia" },
            { "id": 2, "nombre": "Endodoncia" }
        ])))
        .mount(&server)
        .await;

    let lista = client.listar_especialidades(TOKEN).await.unwrap();
    assert_eq!(lista.len(), 2);
    assert_eq!(lista[1].nombre, "Endodoncia");
}

#[tokio::test]
async fn crear_trims_the_name_before_sending() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/especialidades/crear"))
        .and(body_json(json!({ "nombre": "Periodoncia" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "id": 3, "nombre": "Periodoncia" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let creada = client
        .crear_especialidad(TOKEN, "  Periodoncia  ")
        .await
        .unwrap();
    assert_eq!(creada.id, 3);
}

#[tokio::test]
async fn actualizar_patches_by_id() {
    let (server, client) = test_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/especialidades/3"))
        .and(body_json(json!({ "nombre": "Implantología" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 3, "nombre": "Implantología" })),
        )
        .mount(&server)
        .await;

    let actualizada = client
        .actualizar_especialidad(TOKEN, 3, "Implantología")
        .await
        .unwrap();
    assert_eq!(actualizada.nombre, "Implantología");
}

#[tokio::test]
async fn eliminar_ignores_the_success_body() {
    let (server, client) = test_client().await;

    Mock::given(method("DELETE"))
        .and(path("/api/especialidades/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.eliminar_especialidad(TOKEN, 3).await.unwrap();
}

#[tokio::test]
async fn eliminar_referenced_specialty_surfaces_conflict() {
    let (server, client) = test_client().await;

    Mock::given(method("DELETE"))
        .and(path("/api/especialidades/1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "hay dentistas con esta especialidad"
        })))
        .mount(&server)
        .await;

    let err = client.eliminar_especialidad(TOKEN, 1).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Conflict);
}
