use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry, LogLevel};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/activity_log.css");

fn entry_class(level: &LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    }
}

/// Newest-first list of log entries, optionally only failures.
fn visible_entries(entries: &[LogEntry], errors_only: bool) -> Vec<LogEntry> {
    entries
        .iter()
        .rev()
        .filter(|e| !errors_only || e.level == LogLevel::Error)
        .cloned()
        .collect()
}

/// Floating panel listing what the page did: loads, saves, uploads, deletes.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let mut errors_only = use_signal(|| false);

    if !log().visible {
        return rsx! {};
    }

    let entries = visible_entries(&log().entries, errors_only());
    let title = format!("Activity Log ({} errors)", log().error_count());

    rsx! {
        document::Link { rel: "stylesheet", href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "{title}" }
                div {
                    class: "activity-log-header-actions",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: errors_only(),
                            onchange: move |evt: FormEvent| errors_only.set(evt.checked()),
                        }
                        " Errors only"
                    }
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                for entry in entries {
                    div {
                        class: entry_class(&entry.level),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Header button that opens the panel; turns red once something failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let has_errors = log().error_count() > 0;

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Activity log",
            if count > 0 {
                "Log ({count})"
            } else {
                "Log"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry {
            timestamp: "00:00:00".to_string(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_visible_entries_newest_first() {
        let entries = vec![
            entry(LogLevel::Info, "loaded"),
            entry(LogLevel::Error, "save failed"),
            entry(LogLevel::Success, "saved"),
        ];

        let all = visible_entries(&entries, false);
        assert_eq!(all[0].message, "saved");
        assert_eq!(all.len(), 3);

        let errors = visible_entries(&entries, true);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "save failed");
    }
}
