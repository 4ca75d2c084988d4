//! Action buttons and the loading spinner
//!
//! Buttons are rendered inert: the page has no scripts, so `data-action`
//! only names what the control would trigger.

use leptos::prelude::*;
use crate::types::ActionButton;

/// Row of intent-colored buttons, followed by a spinner while busy
#[component]
pub fn ControlPanel(
    buttons: Vec<ActionButton>,
    #[prop(default = false)]
    loading: bool,
) -> impl IntoView {
    view! {
        <div class="controls">
            {buttons.into_iter().map(|button| {
                view! {
                    <button
                        type="button"
                        class=button.class()
                        data-action=button.action.clone()
                        disabled=button.disabled
                    >
                        {button.label.clone()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
        {loading.then(|| view! { <Loader label="Simulation running..." /> })}
    }
}

/// Indeterminate spinner with a caption
#[component]
pub fn Loader(label: &'static str) -> impl IntoView {
    view! {
        <div class="loading-row">
            <span class="loader" role="status" aria-label="Loading"></span>
            <span>{label}</span>
        </div>
    }
}
