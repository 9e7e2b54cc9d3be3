use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{CrearTurnoRequest, TurnoEstado};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{test_client, turno_json, TOKEN};

fn request() -> CrearTurnoRequest {
    CrearTurnoRequest {
        paciente_id: 1,
        dentista_id: 2,
        fecha_hora: Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn crear_sends_camel_case_body_with_bearer() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/turno/crear"))
        .and(header("authorization", format!("Bearer {TOKEN}")))
        .and(body_json(json!({
            "pacienteId": 1,
            "dentistaId": 2,
            "fechaHora": "2026-09-01T10:00:00Z"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(turno_json(10, "PROGRAMADO", "2026-09-01T10:00:00Z")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let turno = client.crear_turno(TOKEN, &request()).await.unwrap();
    assert_eq!(turno.id, 10);
    assert_eq!(turno.estado, TurnoEstado::Programado);
}

#[tokio::test]
async fn crear_on_taken_slot_gives_the_fixed_conflict_message() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/turno/crear"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "slot already booked"
        })))
        .mount(&server)
        .await;

    let err = client.crear_turno(TOKEN, &request()).await.unwrap_err();
    assert!(err.es_conflicto());
    assert_eq!(err.mensaje_usuario(), "Ya existe un turno para esa fecha y hora");
}

#[tokio::test]
async fn actualizar_reschedules_through_the_id() {
    let (server, client) = test_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/turno/actualizar/10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(turno_json(10, "PROGRAMADO", "2026-09-02T11:30:00Z")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let turno = client.actualizar_turno(TOKEN, 10, &request()).await.unwrap();
    assert_eq!(
        turno.fecha_hora,
        Utc.with_ymd_and_hms(2026, 9, 2, 11, 30, 0).unwrap()
    );
}

#[tokio::test]
async fn listar_de_paciente_hits_the_scoped_route() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/turno/paciente/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            turno_json(10, "TERMINADO", "2026-01-05T09:00:00Z"),
            turno_json(11, "PROGRAMADO", "2026-09-01T10:00:00Z")
        ])))
        .mount(&server)
        .await;

    let lista = client.listar_turnos_de_paciente(TOKEN, 1).await.unwrap();
    assert_eq!(lista.len(), 2);
    assert_eq!(lista[0].estado, TurnoEstado::Terminado);
}
