//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{load_records_config, make_backend, Backend};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::Navbar;

mod records;
pub use records::{use_app_state, use_record_manager, Manager, RecordsProvider};

mod logo;
pub use logo::LogoImage;

mod record_form;
pub use record_form::{submit_label, RecordForm};

mod record_list;
pub use record_list::RecordList;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
