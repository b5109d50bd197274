use std::cell::RefCell;
use std::rc::Rc;

use prism::errors::ScopeError;
use prism::log::warn;
use prism::{ColorBlindMode, PreferenceConfig, PreferenceStore, Preferences};
use yew::prelude::*;

use crate::browser::{BrowserStorage, DocumentRoot};

type BrowserStore = PreferenceStore<BrowserStorage, DocumentRoot>;

/// What consumers of [`AccessibilityProvider`] receive: the current
/// preferences and the setters that change them.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityContext {
    pub preferences: Preferences,
    pub set_dark_mode: Callback<bool>,
    pub set_color_blind_mode: Callback<ColorBlindMode>,
}

impl AccessibilityContext {
    pub fn dark_mode(&self) -> bool {
        self.preferences.dark_mode
    }

    pub fn color_blind_mode(&self) -> ColorBlindMode {
        self.preferences.color_blind_mode
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode.emit(!self.preferences.dark_mode);
    }
}

#[derive(Properties, PartialEq)]
pub struct AccessibilityProviderProps {
    #[prop_or_default]
    pub config: PreferenceConfig,
    pub children: Children,
}

#[function_component(AccessibilityProvider)]
pub fn accessibility_provider(props: &AccessibilityProviderProps) -> Html {
    // The store lives as long as the provider; the state only mirrors it so
    // consumers re-render on change.
    let store: Rc<RefCell<BrowserStore>> = {
        let config = props.config.clone();
        use_mut_ref(move || {
            PreferenceStore::open(BrowserStorage, DocumentRoot::current(), config)
        })
    };
    let preferences = {
        let store = store.clone();
        use_state(move || store.borrow().preferences())
    };

    let set_dark_mode = {
        let store = store.clone();
        let preferences = preferences.clone();
        Callback::from(move |enabled: bool| {
            let mut store = store.borrow_mut();
            if let Err(err) = store.set_dark_mode(enabled) {
                warn!(%err, "Dark mode was not fully applied");
            }
            preferences.set(store.preferences());
        })
    };

    let set_color_blind_mode = {
        let store = store.clone();
        let preferences = preferences.clone();
        Callback::from(move |mode: ColorBlindMode| {
            let mut store = store.borrow_mut();
            if let Err(err) = store.set_color_blind_mode(mode) {
                warn!(%err, "Color blind mode was not fully applied");
            }
            preferences.set(store.preferences());
        })
    };

    let context = AccessibilityContext {
        preferences: *preferences,
        set_dark_mode,
        set_color_blind_mode,
    };

    html! {
        <ContextProvider<AccessibilityContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AccessibilityContext>>
    }
}

/// Returns the accessibility preferences of the enclosing
/// [`AccessibilityProvider`], or [`ScopeError::MissingProvider`] when there
/// is none.
#[hook]
pub fn use_accessibility() -> Result<AccessibilityContext, ScopeError> {
    use_context::<AccessibilityContext>()
        .ok_or(ScopeError::MissingProvider("AccessibilityProvider"))
}
