//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod dialog;
pub use dialog::{alert, confirm};

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, Theme, ThemeSignal, ThemeToggle};

mod search_box;
pub use search_box::SearchBox;

mod chord_sheet;
pub use chord_sheet::ChordSheet;

mod auto_scroll;
pub use auto_scroll::AutoScrollControls;

mod video_embed;
pub use video_embed::VideoEmbed;

mod cifra_form;
pub use cifra_form::CifraForm;

mod cifra_list;
pub use cifra_list::CifraList;
