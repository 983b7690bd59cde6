use crate::action::DialogTheme;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_alert_icons::MdWarning;

#[component]
pub fn ConfirmDialog(
    theme: DialogTheme,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog confirm-dialog",
                div { class: "dialog-icon warning",
                    Icon {
                        width: 48,
                        height: 48,
                        icon: MdWarning
                    }
                }
                h3 { "Are you sure?" }
                p { "This action cannot be undone!" }
                div { class: "dialog-buttons",
                    button {
                        class: theme.confirm_class(),
                        onclick: move |_| on_confirm.call(()),
                        "Yes"
                    }
                    button {
                        class: theme.cancel_class(),
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
