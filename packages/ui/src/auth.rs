//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// Display name of the logged-in user, compared against a cifra's author.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.display_name())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => auth_state.set(AuthState {
                user,
                loading: false,
            }),
            Err(e) => {
                tracing::warn!("Failed to load session: {e}");
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState::signed_out());
                on_logged_out.call(());
            }
            Err(e) => tracing::error!("Logout failed: {e}"),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_follows_session() {
        assert_eq!(AuthState::default().display_name(), None);
        assert!(AuthState::default().loading);

        let state = AuthState::signed_in(UserInfo {
            id: "1".to_string(),
            email: "joao@example.com".to_string(),
            name: "joao".to_string(),
        });
        assert_eq!(state.display_name(), Some("joao"));
        assert!(!state.loading);
        assert_eq!(AuthState::signed_out().display_name(), None);
    }
}
