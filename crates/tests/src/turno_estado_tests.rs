use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ApiErrorKind, ConsultaMedica, TurnoEstado};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{test_client, turno_json, TOKEN};

#[tokio::test]
async fn cambiar_estado_sends_the_screaming_tag() {
    let (server, client) = test_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/turno/estado/10"))
        .and(body_json(json!({ "estado": "EN_CURSO" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(turno_json(10, "EN_CURSO", "2026-09-01T10:00:00Z")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let turno = client
        .cambiar_estado_turno(TOKEN, 10, TurnoEstado::EnCurso)
        .await
        .unwrap();
    assert_eq!(turno.estado, TurnoEstado::EnCurso);
}

#[tokio::test]
async fn registrar_consulta_includes_notes_and_final_state() {
    let (server, client) = test_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/turno/actualizar/10"))
        .and(body_json(json!({
            "estado": "TERMINADO",
            "notasTratamiento": "Limpieza y sellado de la pieza 26"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(turno_json(10, "TERMINADO", "2026-09-01T10:00:00Z")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let consulta = ConsultaMedica {
        estado: TurnoEstado::Terminado,
        notas_tratamiento: "Limpieza y sellado de la pieza 26".to_string(),
        comentarios: None,
    };
    let turno = client
        .registrar_consulta(TOKEN, 10, &consulta)
        .await
        .unwrap();
    assert_eq!(turno.estado, TurnoEstado::Terminado);
}

#[tokio::test]
async fn backend_rejecting_a_transition_maps_to_bad_request() {
    let (server, client) = test_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/turno/estado/10"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "transición inválida"
        })))
        .mount(&server)
        .await;

    let err = client
        .cambiar_estado_turno(TOKEN, 10, TurnoEstado::Terminado)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::BadRequest);
    assert_eq!(err.mensaje_usuario(), "transición inválida");
}

#[tokio::test]
async fn eliminar_turno_deletes_by_id() {
    let (server, client) = test_client().await;

    Mock::given(method("DELETE"))
        .and(path("/api/turno/10"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.eliminar_turno(TOKEN, 10).await.unwrap();
}
