use dioxus::prelude::*;

use crate::{use_auth, AuthState};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Email and password login.
#[component]
pub fn LoginView(on_logged_in: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Leave as soon as there is a session, including the one this form creates
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            on_logged_in.call(());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if let Err(err) = store::validate::validate_login(&e, &p) {
                error.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            match api::login(e, p).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                }
                Err(err) => {
                    tracing::warn!("Login failed: {err}");
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "view view-narrow",
            h1 { class: "view-title", "Entrar" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Senha",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Entrando..." } else { "Entrar" }
                }
            }

            p {
                class: "view-muted",
                "Ainda não tem conta? "
                button {
                    class: "link-button",
                    onclick: move |_| on_register.call(()),
                    "Cadastre-se"
                }
            }
        }
    }
}
