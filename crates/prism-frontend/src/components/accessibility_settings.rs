use prism::ColorBlindMode;
use prism::log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::ScopeNotice;
use crate::providers::use_accessibility;

/// Dark mode switch and color blind mode picker.
#[function_component(AccessibilitySettings)]
pub fn accessibility_settings() -> Html {
    let accessibility = match use_accessibility() {
        Ok(accessibility) => accessibility,
        Err(err) => {
            error!(%err, "AccessibilitySettings rendered without a provider");
            return html! { <ScopeNotice error={err} /> };
        }
    };

    let on_dark_mode = {
        let set_dark_mode = accessibility.set_dark_mode.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                set_dark_mode.emit(input.checked());
            }
        })
    };

    let on_color_blind_mode = {
        let set_color_blind_mode = accessibility.set_color_blind_mode.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            match select.value().parse::<ColorBlindMode>() {
                Ok(mode) => set_color_blind_mode.emit(mode),
                Err(err) => error!(%err, "Unexpected option in color blind mode picker"),
            }
        })
    };

    let current = accessibility.color_blind_mode();

    html! {
        <section class="p-4 border border-gray-200 rounded space-y-4" aria-labelledby="a11y-heading">
            <h2 id="a11y-heading" class="text-xl font-semibold">{ "Accessibility" }</h2>

            <label class="flex items-center space-x-2">
                <input
                    type="checkbox"
                    checked={accessibility.dark_mode()}
                    onchange={on_dark_mode}
                />
                <span>{ "Dark mode" }</span>
            </label>

            <label class="flex flex-col space-y-1">
                <span>{ "Color vision" }</span>
                <select class="px-3 py-2 border border-gray-300 rounded" onchange={on_color_blind_mode}>
                    {
                        ColorBlindMode::ALL.iter().map(|mode| {
                            html! {
                                <option value={mode.as_str()} selected={*mode == current}>
                                    { mode.label() }
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </label>
        </section>
    }
}
