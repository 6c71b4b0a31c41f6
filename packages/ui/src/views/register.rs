use dioxus::prelude::*;

use store::validate::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

use crate::{use_auth, AuthState};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Account creation. A successful registration logs the new user in.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Leave as soon as there is a session, including the one this form creates
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            on_registered.call(());
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if let Err(err) = store::validate::validate_registration(&n, &e, &p) {
                error.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            match api::register(e, p, n).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                }
                Err(err) => {
                    tracing::warn!("Registration failed: {err}");
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
            h1 { class: "view-title", "Criar conta" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Nome de usuário (mín. {MIN_USERNAME_LEN} caracteres)",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Senha (mín. {MIN_PASSWORD_LEN} caracteres)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Criando conta..." } else { "Cadastrar" }
                }
            }

            p {
                class: "view-muted",
                "Já tem conta? "
                button {
                    class: "link-button",
                    onclick: move |_| on_login.call(()),
                    "Entrar"
                }
            }
        }
    }
}
