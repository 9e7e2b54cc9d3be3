use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::ActualizarDentistaRequest;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{dentista_json, test_client, TOKEN};

#[tokio::test]
async fn listar_decodes_nested_profiles() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/dentista"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([dentista_json(1), dentista_json(2)])),
        )
        .mount(&server)
        .await;

    let lista = client.listar_dentistas(TOKEN).await.unwrap();
    assert_eq!(lista.len(), 2);
    assert_eq!(lista[0].especialidad.nombre, "Ortodoncia");
    assert_eq!(lista[1].matricula, "MAT-2");
}

#[tokio::test]
async fn actualizar_sends_only_the_given_fields() {
    let (server, client) = test_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/dentista/actualizar/5"))
        .and(body_json(json!({
            "nombre": "Luis",
            "email": null,
            "especialidadId": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(dentista_json(5)))
        .expect(1)
        .mount(&server)
        .await;

    let request = ActualizarDentistaRequest {
        nombre: Some("Luis".into()),
        email: None,
        especialidad_id: Some(2),
    };
    let actualizado = client.actualizar_dentista(TOKEN, 5, &request).await.unwrap();
    assert_eq!(actualizado.id, 5);
}

#[tokio::test]
async fn dar_de_baja_posts_to_the_id() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/dentista/dar-de-baja/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.dar_de_baja_dentista(TOKEN, 5).await.unwrap();
}
