use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    dioxus::launch(App);
}

/// `RUST_LOG` wins; otherwise `info` for everything.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
    {
        tracing::info!("logging initialized");
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        ui::RecordsProvider {
            ui::views::RecordsView { title: "Users (desktop)".to_string() }
        }
    }
}
