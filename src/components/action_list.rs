use crate::action::{PanelAction, ResourceSection};
use crate::app::request_action;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ActionList(state: Signal<AppState>, section: ResourceSection) -> Element {
    rsx! {
        div { class: "section",
            div { class: "section-title", "{section.name}" }
            div { class: "action-row",
                for action in section.actions.clone() {
                    ActionButton { state, action }
                }
            }
        }
    }
}

#[component]
fn ActionButton(state: Signal<AppState>, action: PanelAction) -> Element {
    let request = action.request();

    rsx! {
        button {
            class: if action.verb.is_destructive() { "secondary danger" } else { "secondary" },
            onclick: move |_| request_action(state, request.clone()),
            "{action.label}"
        }
    }
}
