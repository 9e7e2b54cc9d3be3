use api_client::ApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "token-de-prueba";

/// Starts a mock backend and an [`ApiClient`] pointed at it.
pub async fn test_client() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri());
    (server, client)
}

pub fn usuario_json(id: i64, nombre: &str, apellido: &str) -> Value {
    json!({
        "id": id,
        "auth0Id": format!("auth0|{id}"),
        "nombre": nombre,
        "apellido": apellido,
        "dni": null,
        "email": format!("{}@example.com", nombre.to_lowercase()),
        "fechaNacimiento": null,
        "telefono": null
    })
}

pub fn paciente_json(id: i64) -> Value {
    json!({
        "id": id,
        "obraSocial": "OSDE",
        "telefonoEmergencia": null,
        "usuario": usuario_json(100 + id, "Ana", "Pérez")
    })
}

pub fn dentista_json(id: i64) -> Value {
    json!({
        "id": id,
        "especialidad": { "id": 1, "nombre": "Ortodoncia" },
        "matricula": format!("MAT-{id}"),
        "usuario": usuario_json(200 + id, "Luis", "García")
    })
}

pub fn turno_json(id: i64, estado: &str, fecha_hora: &str) -> Value {
    json!({
        "id": id,
        "paciente": paciente_json(1),
        "dentista": dentista_json(2),
        "fechaHora": fecha_hora,
        "estado": estado,
        "notasTratamiento": null,
        "comentarios": null
    })
}
