mod browser;
mod components;
mod providers;

use yew::prelude::*;

use components::{AccessibilitySettings, Header};
use providers::AccessibilityProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <AccessibilityProvider>
            <main class="p-8">
                <Header />
                <AccessibilitySettings />
            </main>
        </AccessibilityProvider>
    }
}

fn main() {
    prism::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
