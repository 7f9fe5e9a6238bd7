use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    use_effect(|| tracing::info!("records page mounted"));

    rsx! {
        ui::RecordsProvider {
            ui::views::RecordsView {}
        }
    }
}
