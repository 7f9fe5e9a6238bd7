use dioxus::prelude::*;
use store::{AppState, RecordManager};

use crate::backend::{load_records_config, make_backend, Backend};
use crate::{log_activity, use_activity_log, LogLevel};

/// The record manager as used by the UI.
pub type Manager = RecordManager<Backend, Backend>;

/// Consume the record manager from context.
pub fn use_record_manager() -> Manager {
    use_context::<Manager>()
}

/// Consume the mirrored `Signal<AppState>` from context.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Provider component that owns the record manager.
///
/// Builds the manager once, mirrors every state change into a signal so
/// components re-render, and loads the full list on mount.
#[component]
pub fn RecordsProvider(children: Element) -> Element {
    let state = use_signal(AppState::default);
    let mut activity_log = use_activity_log();

    let (manager, source) = use_hook(move || {
        let config = load_records_config();
        let backend = make_backend(&config);
        let source = if backend.is_remote() { "Supabase" } else { "memory" };
        let manager = RecordManager::new(backend.clone(), backend, config).with_observer(
            move |snapshot: &AppState| {
                let mut state = state;
                state.set(snapshot.clone());
            },
        );
        (manager, source)
    });

    use_context_provider(|| manager.clone());
    use_context_provider(|| state);

    let _loader = use_resource({
        let manager = manager.clone();
        move || {
            let manager = manager.clone();
            async move {
                log_activity(&mut activity_log, LogLevel::Info, &format!("Using {source} backend"));
                if manager.load_all().await {
                    let count = manager.snapshot().records.len();
                    log_activity(&mut activity_log, LogLevel::Success, &format!("Loaded {count} records"));
                } else {
                    log_activity(&mut activity_log, LogLevel::Error, "Failed to load records");
                }
            }
        }
    });

    rsx! {
        {children}
    }
}
