use crate::action::{DialogSpec, DialogTheme, DialogTone};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdCheckCircle;
use dioxus_free_icons::icons::md_alert_icons::MdError;

/// Reports how an action went. The title and message come from the server
/// response verbatim; dismissing is the only way out.
#[component]
pub fn ResultDialog(
    theme: DialogTheme,
    dialog: DialogSpec,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog result-dialog",
                if dialog.tone == DialogTone::Success {
                    div { class: "dialog-icon success",
                        Icon {
                            width: 48,
                            height: 48,
                            icon: MdCheckCircle
                        }
                    }
                } else {
                    div { class: "dialog-icon error",
                        Icon {
                            width: 48,
                            height: 48,
                            icon: MdError
                        }
                    }
                }
                h3 { "{dialog.title}" }
                p { class: "dialog-message", "{dialog.message}" }
                div { class: "dialog-buttons",
                    button {
                        class: theme.confirm_class(),
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
