use dioxus::prelude::*;

use crate::{ActivityLogPanel, ActivityLogToggle, Navbar, RecordForm, RecordList};

/// The whole page: form on the left, record table on the right.
///
/// Must be rendered inside a [`crate::RecordsProvider`].
#[component]
pub fn RecordsView(#[props(default = "Users".to_string())] title: String) -> Element {
    rsx! {
        Navbar {
            title,
            ActivityLogToggle {}
        }
        div {
            class: "records-layout",
            div {
                class: "panel form-panel",
                RecordForm {}
            }
            div {
                class: "panel list-panel",
                RecordList {}
            }
        }
        ActivityLogPanel {}
    }
}
