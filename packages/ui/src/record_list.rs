use dioxus::prelude::*;
use store::Record;

use crate::icons::{FaPen, FaTrashCan};
use crate::{log_activity, use_activity_log, use_app_state, use_record_manager, Icon, LogLevel, LogoImage};

/// Table of all loaded records with edit and delete actions.
#[component]
pub fn RecordList() -> Element {
    let state = use_app_state();
    let snapshot = state();
    let busy = snapshot.form.busy;
    let records = snapshot.records;

    rsx! {
        table {
            class: "record-table",
            thead {
                tr {
                    th { "Logo" }
                    th { "Name" }
                    th { "Age" }
                    th { "Email" }
                    th { "Actions" }
                }
            }
            tbody {
                if busy {
                    tr {
                        td { colspan: 5, class: "record-table-loading", "Loading..." }
                    }
                } else {
                    for record in records {
                        RecordRow { key: "{record.id}", record: record.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordRow(record: Record) -> Element {
    let manager = use_record_manager();
    let mut activity_log = use_activity_log();
    let logo_url = manager.public_url(&record.logo_path);

    let handle_edit = {
        let manager = manager.clone();
        let record = record.clone();
        move |_: MouseEvent| {
            manager.begin_edit(&record);
            log_activity(&mut activity_log, LogLevel::Info, &format!("Editing record {}", record.id));
        }
    };

    let handle_delete = {
        let id = record.id;
        move |_: MouseEvent| {
            let manager = manager.clone();
            async move {
                if manager.delete_record(id).await {
                    log_activity(&mut activity_log, LogLevel::Success, &format!("Deleted record {id}"));
                } else {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Delete of record {id} failed"));
                }
            }
        }
    };

    rsx! {
        tr {
            class: "record-row",
            td { class: "record-logo", LogoImage { url: logo_url } }
            td { "{record.name}" }
            td { "{record.age}" }
            td { "{record.email}" }
            td {
                class: "record-actions",
                button {
                    class: "btn btn-edit",
                    title: "Edit",
                    onclick: handle_edit,
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                button {
                    class: "btn btn-delete",
                    title: "Delete",
                    onclick: handle_delete,
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
