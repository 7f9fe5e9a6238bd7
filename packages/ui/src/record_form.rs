use dioxus::prelude::*;
use store::{FormField, FormState, LogoFile, SubmitOutcome};

use crate::{log_activity, use_activity_log, use_app_state, use_record_manager, LogLevel, LogoImage};

/// Create/edit form: logo picker, the three text fields, save and cancel.
#[component]
pub fn RecordForm() -> Element {
    let manager = use_record_manager();
    let state = use_app_state();
    let mut activity_log = use_activity_log();

    let form = state().form;
    let logo_url = manager.public_url(&form.logo_path);
    let label = submit_label(&form);

    let handle_logo = {
        let manager = manager.clone();
        move |evt: FormEvent| {
            let manager = manager.clone();
            async move {
                let Some(engine) = evt.files() else {
                    return;
                };
                // Only the first picked file is used
                let Some(picked) = engine.files().into_iter().next() else {
                    return;
                };
                let Some(bytes) = engine.read_file(&picked).await else {
                    log_activity(&mut activity_log, LogLevel::Warning, &format!("Could not read {picked}"));
                    return;
                };
                let name = file_name(&picked).to_string();
                if manager.upload_logo(LogoFile::new(name.clone(), bytes)).await {
                    log_activity(&mut activity_log, LogLevel::Success, &format!("Uploaded {name}"));
                } else {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Upload of {name} failed"));
                }
            }
        }
    };

    let handle_submit = {
        let manager = manager.clone();
        move |_: MouseEvent| {
            let manager = manager.clone();
            async move {
                match manager.submit().await {
                    SubmitOutcome::Created => {
                        log_activity(&mut activity_log, LogLevel::Success, "Record saved");
                    }
                    SubmitOutcome::Updated(id) => {
                        log_activity(&mut activity_log, LogLevel::Success, &format!("Record {id} updated"));
                    }
                    SubmitOutcome::Rejected(missing) => {
                        let names: Vec<_> = missing.iter().map(|f| f.label()).collect();
                        log_activity(
                            &mut activity_log,
                            LogLevel::Warning,
                            &format!("Missing: {}", names.join(", ")),
                        );
                        if let Some(message) = manager.take_alert() {
                            show_alert(&message);
                        }
                    }
                    SubmitOutcome::Failed(e) => {
                        log_activity(&mut activity_log, LogLevel::Error, &format!("Save failed: {e}"));
                    }
                }
            }
        }
    };

    let handle_cancel = {
        let manager = manager.clone();
        move |_: MouseEvent| manager.cancel_edit()
    };

    let field_input = |field: FormField, placeholder: &'static str| {
        let manager = manager.clone();
        rsx! {
            input {
                class: "form-input",
                r#type: "text",
                placeholder,
                value: form.value(field).to_string(),
                oninput: move |evt: FormEvent| manager.set_field(field, evt.value()),
            }
        }
    };

    rsx! {
        div {
            class: "record-form",
            div {
                class: "logo-picker",
                label {
                    r#for: "logo-input",
                    class: "logo-drop",
                    if logo_url.is_some() {
                        LogoImage { url: logo_url.clone(), size: 160 }
                    } else {
                        "Upload Logo"
                    }
                    input {
                        id: "logo-input",
                        r#type: "file",
                        accept: "image/*",
                        hidden: true,
                        disabled: form.busy,
                        onchange: handle_logo,
                    }
                }
            }

            {field_input(FormField::Name, "Name...")}
            {field_input(FormField::Age, "Age...")}
            {field_input(FormField::Email, "Email...")}

            button {
                class: "btn btn-primary",
                disabled: form.busy,
                onclick: handle_submit,
                "{label}"
            }
            if form.is_editing() {
                button {
                    class: "btn btn-secondary",
                    onclick: handle_cancel,
                    "Cancel"
                }
            }
        }
    }
}

/// Label of the submit button for the current form.
pub fn submit_label(form: &FormState) -> &'static str {
    if form.busy {
        "Saving..."
    } else if form.is_editing() {
        "Update"
    } else {
        "Save"
    }
}

/// Last path component; desktop pickers report full paths.
fn file_name(picked: &str) -> &str {
    picked.rsplit(['/', '\\']).next().unwrap_or(picked)
}

fn show_alert(message: &str) {
    let _ = document::eval(&format!("alert({message:?});"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::FormMode;

    #[test]
    fn test_submit_label() {
        let mut form = FormState::default();
        assert_eq!(submit_label(&form), "Save");

        form.mode = FormMode::Edit { target_id: 3 };
        assert_eq!(submit_label(&form), "Update");

        form.busy = true;
        assert_eq!(submit_label(&form), "Saving...");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("logo.png"), "logo.png");
        assert_eq!(file_name("/home/ann/Pictures/logo.png"), "logo.png");
        assert_eq!(file_name("C:\\Users\\ann\\logo.png"), "logo.png");
    }
}
