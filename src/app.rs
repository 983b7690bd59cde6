use crate::action::{
    ActionOutcome, ActionRequest, DialogTheme, PanelConfig, force_reload, perform,
};
use crate::components::*;
use crate::state::{AppState, FlowPhase};
use dioxus::prelude::*;
use dioxus_core::Task;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let theme = use_context::<DialogTheme>();
    let panel = use_context::<PanelConfig>();
    let mut state = use_signal(AppState::new);

    let flows = state.read().flows().to_vec();
    let dialogs = flows.into_iter().map(|flow| {
        let id = flow.id;
        match flow.phase {
            FlowPhase::AwaitingConfirmation => rsx! {
                ConfirmDialog {
                    theme,
                    on_confirm: move |_| {
                        let request = state.write().confirm(id);
                        if let Some(request) = request {
                            run_flow(state, id, request);
                        }
                    },
                    on_cancel: move |_| state.write().cancel(id),
                }
            },
            FlowPhase::Dispatching => rsx! {},
            FlowPhase::ShowingResult(dialog) => rsx! {
                ResultDialog {
                    theme,
                    dialog,
                    on_dismiss: move |_| {
                        if state.write().dismiss(id) {
                            force_reload();
                        }
                    },
                }
            },
        }
    });

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header { title: panel.title.clone() }
            div { class: "content",
                for section in panel.resources.clone() {
                    ActionList { state, section }
                }
            }
            {dialogs}
        }
    }
}

/// Asks the user to confirm before anything is sent. Declining ends the
/// flow silently; affirming hands the request to [`run_action`]'s path
/// unchanged.
pub fn request_action(mut state: Signal<AppState>, request: ActionRequest) {
    state.write().begin(request);
}

/// Sends the request immediately, without a confirmation prompt. The
/// returned task resolves once the result dialog is queued; callers are free
/// to drop it.
#[allow(dead_code)]
pub fn run_action(mut state: Signal<AppState>, request: ActionRequest) -> Task {
    let id = state.write().begin_dispatching(request.clone());
    run_flow(state, id, request)
}

fn run_flow(mut state: Signal<AppState>, id: u64, request: ActionRequest) -> Task {
    spawn(async move {
        let outcome = perform(&request).await;

        if let ActionOutcome::Failure(err) = &outcome {
            tracing::error!(
                "{} {} failed: {}",
                request.verb.as_str(),
                request.endpoint,
                err.reason
            );
        }

        state.write().complete(id, outcome.dialog());
    })
}
