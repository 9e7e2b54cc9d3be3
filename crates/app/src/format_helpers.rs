//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};
use shared_types::{TurnoEstado, UserRole};
use shared_ui::BadgeVariant;

const MESES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun",
    "jul", "ago", "sep", "oct", "nov", "dic",
];

/// "12 mar 2026", in local time.
pub fn formatear_fecha(fecha: &DateTime<Utc>) -> String {
    let local = fecha.with_timezone(&Local);
    format!(
        "{} {} {}",
        local.day(),
        MESES[local.month0() as usize],
        local.year()
    )
}

/// "14:30", in local time.
pub fn formatear_hora(fecha: &DateTime<Utc>) -> String {
    let local = fecha.with_timezone(&Local);
    format!("{:02}:{:02}", local.hour(), local.minute())
}

/// "12 mar 2026, 14:30".
pub fn formatear_fecha_hora(fecha: &DateTime<Utc>) -> String {
    format!("{}, {}", formatear_fecha(fecha), formatear_hora(fecha))
}

/// Value for an HTML `datetime-local` input ("2026-03-12T14:30").
pub fn a_datetime_local(fecha: &DateTime<Utc>) -> String {
    fecha
        .with_timezone(&Local)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

/// Parses a `datetime-local` input value back to UTC. Returns None on
/// anything the input widget should never produce.
pub fn desde_datetime_local(valor: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M").ok()?;
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

/// Status badge colors: Programado=blue, EnCurso=yellow,
/// Terminado=green, Cancelado=red.
pub fn estado_badge_variant(estado: TurnoEstado) -> BadgeVariant {
    match estado {
        TurnoEstado::Programado => BadgeVariant::Info,
        TurnoEstado::EnCurso => BadgeVariant::Warning,
        TurnoEstado::Terminado => BadgeVariant::Success,
        TurnoEstado::Cancelado => BadgeVariant::Danger,
    }
}

/// Navbar accent class per role: paciente=blue, dentista=green,
/// administrador=purple.
pub fn clase_rol(rol: UserRole) -> &'static str {
    match rol {
        UserRole::Paciente => "rol-paciente",
        UserRole::Dentista => "rol-dentista",
        UserRole::Administrador => "rol-administrador",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn datetime_local_round_trips() {
        let parseado = desde_datetime_local("2026-03-12T14:30").unwrap();
        assert_eq!(a_datetime_local(&parseado), "2026-03-12T14:30");
    }

    #[test]
    fn datetime_local_rejects_garbage() {
        assert!(desde_datetime_local("").is_none());
        assert!(desde_datetime_local("12/03/2026").is_none());
    }

    #[test]
    fn badge_colors_follow_estado() {
        assert_eq!(
            estado_badge_variant(TurnoEstado::Programado),
            BadgeVariant::Info
        );
        assert_eq!(
            estado_badge_variant(TurnoEstado::EnCurso),
            BadgeVariant::Warning
        );
        assert_eq!(
            estado_badge_variant(TurnoEstado::Terminado),
            BadgeVariant::Success
        );
        assert_eq!(
            estado_badge_variant(TurnoEstado::Cancelado),
            BadgeVariant::Danger
        );
    }

    #[test]
    fn role_classes_are_distinct() {
        assert_eq!(clase_rol(UserRole::Paciente), "rol-paciente");
        assert_eq!(clase_rol(UserRole::Dentista), "rol-dentista");
        assert_eq!(clase_rol(UserRole::Administrador), "rol-administrador");
    }
}
