use prism::errors::ScopeError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScopeNoticeProps {
    pub error: ScopeError,
}

/// Shown in place of a consumer that was mounted outside its provider.
#[function_component(ScopeNotice)]
pub fn scope_notice(props: &ScopeNoticeProps) -> Html {
    html! {
        <div role="alert" class="p-4 bg-red-100 text-red-700 rounded">
            <p>{ props.error.to_string() }</p>
        </div>
    }
}
