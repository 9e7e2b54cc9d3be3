use dioxus::prelude::*;

/// Visual variant for badges. The status variants map onto the turno
/// lifecycle colors used across the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    /// Blue, for scheduled items.
    Info,
    /// Yellow, for items in progress.
    Warning,
    /// Green, for completed items.
    Success,
    /// Red, for cancelled items and destructive states.
    Danger,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Info => "info",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Success => "success",
            BadgeVariant::Danger => "danger",
        }
    }
}

/// Inline label, mostly used for appointment status and roles.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variant_maps_to_data_style() {
        assert_eq!(BadgeVariant::Info.class(), "info");
        assert_eq!(BadgeVariant::Warning.class(), "warning");
        assert_eq!(BadgeVariant::Success.class(), "success");
        assert_eq!(BadgeVariant::Danger.class(), "danger");
    }

    #[test]
    fn renders_variant_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Success, "Terminado" }
        });
        assert!(html.contains(r#"data-style="success""#));
        assert!(html.contains("Terminado"));
    }
}
