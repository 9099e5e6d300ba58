use account::FrontendConfig;
use dioxus::prelude::*;

use views::AccountSignUp;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/account/sign-up")]
    AccountSignUp {},
}

const CONFIG_TOML: &str = include_str!("../customer_website.toml");

fn main() {
    dioxus::launch(App);
}

/// Application shell: shared configuration, stylesheet and the router.
#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = FrontendConfig::from_toml_or_default(CONFIG_TOML);
        tracing::info!("Registration endpoint: {}", config.register_endpoint());
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::INPUT_OUTPUT_CSS }

        Router::<Route> {}
    }
}
