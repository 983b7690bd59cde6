use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSettings;

#[component]
pub fn Header(title: String) -> Element {
    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdSettings
            }
            h1 { "{title}" }
        }
    }
}
