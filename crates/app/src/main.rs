use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::ClinicConfig;

pub mod format_helpers;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(ClinicConfig::from_env);
    use_context_provider(|| ApiClient::new(config.api_url));
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
