use prism::log::error;
use yew::prelude::*;

use crate::components::ScopeNotice;
use crate::providers::use_accessibility;

#[function_component(Header)]
pub fn header() -> Html {
    let accessibility = match use_accessibility() {
        Ok(accessibility) => accessibility,
        Err(err) => {
            error!(%err, "Header rendered without a provider");
            return html! { <ScopeNotice error={err} /> };
        }
    };

    let toggle = Callback::from(move |_: MouseEvent| accessibility.toggle_dark_mode());

    html! {
        <header class="flex justify-between items-center mb-4">
            <h1 class="text-2xl font-bold">{ "Prism" }</h1>
            <button
                class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
                onclick={toggle}
            >
                { "Toggle theme" }
            </button>
        </header>
    }
}
