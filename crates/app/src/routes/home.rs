use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdMail, LdMapPin, LdPhone, LdSmile, LdStar,
};
use dioxus_free_icons::Icon;
use shared_types::ClinicConfig;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent};

use crate::routes::Route;
use crate::session::use_session;

struct EspecialidadDestacada {
    nombre: &'static str,
    descripcion: &'static str,
}

const ESPECIALIDADES: &[EspecialidadDestacada] = &[
    EspecialidadDestacada {
        nombre: "Ortodoncia",
        descripcion: "Corrección de malposiciones dentales y maxilares",
    },
    EspecialidadDestacada {
        nombre: "Implantología",
        descripcion: "Reemplazo de dientes perdidos con implantes de titanio",
    },
    EspecialidadDestacada {
        nombre: "Endodoncia",
        descripcion: "Tratamiento de conductos radiculares",
    },
    EspecialidadDestacada {
        nombre: "Periodoncia",
        descripcion: "Tratamiento de encías y tejidos de soporte",
    },
    EspecialidadDestacada {
        nombre: "Odontopediatría",
        descripcion: "Cuidado dental especializado para niños",
    },
    EspecialidadDestacada {
        nombre: "Estética Dental",
        descripcion: "Blanqueamientos y carillas estéticas",
    },
];

struct Resena {
    nombre: &'static str,
    comentario: &'static str,
    tratamiento: &'static str,
    fecha: &'static str,
}

const RESENAS: &[Resena] = &[
    Resena {
        nombre: "María González",
        comentario: "Excelente atención, el Dr. Martínez es muy profesional y me explicó todo el tratamiento paso a paso. Recomiendo 100%.",
        tratamiento: "Implante dental",
        fecha: "Hace 2 semanas",
    },
    Resena {
        nombre: "Carlos Rodríguez",
        comentario: "Después de años de tener miedo al dentista, aquí me sentí muy cómodo. El equipo es increíble y las instalaciones son de primera.",
        tratamiento: "Limpieza dental",
        fecha: "Hace 1 mes",
    },
    Resena {
        nombre: "Ana Pérez",
        comentario: "Mi hija de 8 años salió encantada de su primera consulta. La doctora tiene una paciencia increíble con los niños.",
        tratamiento: "Odontopediatría",
        fecha: "Hace 3 días",
    },
];

const ESTADISTICAS: &[(&str, &str)] = &[
    ("15+", "Años de experiencia"),
    ("5000+", "Pacientes satisfechos"),
    ("98%", "Tasa de éxito"),
    ("24/7", "Emergencias"),
];

/// Public landing page. The only way in is the provider login; an
/// already-authenticated visitor gets a shortcut to their dashboard.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let config = use_context::<ClinicConfig>();

    let iniciar_sesion = move |_| {
        if session.is_authenticated() {
            navigator().push(Route::Dashboard {});
        } else {
            session.login(&config);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        header { class: "home-header",
            div { class: "home-brand",
                Icon::<LdSmile> { icon: LdSmile, width: 24, height: 24 }
                span { "DentalCare Pro" }
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: iniciar_sesion,
                if session.is_authenticated() { "Ir a mi panel" } else { "Iniciar sesión" }
            }
        }

        section { class: "home-hero",
            Badge { variant: BadgeVariant::Info, "Clínica Certificada ISO 9001" }
            h1 {
                "Tu sonrisa perfecta "
                span { class: "home-hero-accent", "comienza aquí" }
            }
            p {
                "Tecnología de vanguardia, profesionales expertos y un enfoque humano \
                 para brindarte la mejor experiencia dental. Más de 15 años cuidando sonrisas."
            }
            div { class: "home-hero-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: iniciar_sesion,
                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                    "Reservar Turno"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    Icon::<LdPhone> { icon: LdPhone, width: 18, height: 18 }
                    "+54 11 1234-5678"
                }
            }
            div { class: "home-stats",
                for (numero, etiqueta) in ESTADISTICAS {
                    div { class: "home-stat",
                        span { class: "home-stat-numero", "{numero}" }
                        span { class: "home-stat-etiqueta", "{etiqueta}" }
                    }
                }
            }
        }

        section { class: "home-seccion",
            h2 { "Servicios Integrales de Salud Dental" }
            p { class: "home-seccion-subtitulo",
                "Contamos con especialistas certificados en todas las áreas de la odontología moderna"
            }
            div { class: "home-grid",
                for especialidad in ESPECIALIDADES {
                    Card {
                        CardContent {
                            h3 { "{especialidad.nombre}" }
                            p { "{especialidad.descripcion}" }
                        }
                    }
                }
            }
        }

        section { class: "home-seccion home-resenas",
            h2 { "Lo que dicen nuestros pacientes" }
            p { class: "home-seccion-subtitulo",
                "La confianza de nuestros pacientes es nuestro mayor logro"
            }
            div { class: "home-grid",
                for resena in RESENAS {
                    Card {
                        CardContent {
                            div { class: "home-resena-estrellas",
                                for _ in 0..5 {
                                    Icon::<LdStar> { icon: LdStar, width: 16, height: 16 }
                                }
                            }
                            p { class: "home-resena-comentario", "\"{resena.comentario}\"" }
                            div { class: "home-resena-pie",
                                div {
                                    span { class: "home-resena-nombre", "{resena.nombre}" }
                                    span { class: "home-resena-tratamiento", "{resena.tratamiento}" }
                                }
                                span { class: "home-resena-fecha", "{resena.fecha}" }
                            }
                        }
                    }
                }
            }
        }

        footer { class: "home-footer",
            div { class: "home-footer-col",
                h4 { "DentalCare Pro" }
                p { "Más de 15 años brindando servicios odontológicos de excelencia." }
            }
            div { class: "home-footer-col",
                h4 { "Contacto" }
                p {
                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                    " Av. Corrientes 1234, CABA"
                }
                p {
                    Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 }
                    " +54 11 1234-5678"
                }
                p {
                    Icon::<LdMail> { icon: LdMail, width: 16, height: 16 }
                    " info@dentalcarepro.com"
                }
            }
            div { class: "home-footer-col",
                h4 { "Horarios" }
                p { "Lun - Vie: 8:00 - 20:00" }
                p { "Sábados: 9:00 - 17:00" }
                p { "Domingos: Emergencias" }
            }
        }
    }
}
