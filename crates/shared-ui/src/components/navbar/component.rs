use dioxus::prelude::*;
use dioxus_primitives::navbar as prim;

#[component]
pub fn Navbar(mut props: prim::NavbarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "clinic-navbar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Navbar { ..props }
    }
}

#[component]
pub fn NavbarNav(mut props: prim::NavbarNavProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "clinic-navbar-nav", None, false));

    rsx! {
        prim::NavbarNav { ..props }
    }
}

#[component]
pub fn NavbarItem(mut props: prim::NavbarItemProps) -> Element {
    if props.class.is_none() {
        props.class = Some("clinic-navbar-item".to_string());
    }

    rsx! {
        prim::NavbarItem { ..props }
    }
}
