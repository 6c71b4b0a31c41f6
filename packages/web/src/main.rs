use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, ThemeSignal};
use views::{CifraDetail, Enviar, Home, Login, Registro, Resultados};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/enviar")]
        Enviar {},
        #[route("/cifras/:id")]
        CifraDetail { id: String },
        #[route("/resultados?:search")]
        Resultados { search: String },
        #[route("/login")]
        Login {},
        #[route("/registro")]
        Registro {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start the tokio runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {e}");
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::{time::Duration, SameSite};
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;
    use tracing_subscriber::{fmt, EnvFilter};

    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = api::settings::Settings::load();

    // Initialize database pool
    let pool = api::db::get_pool().await?;

    // Run migrations
    sqlx::migrate!("../api/migrations").run(pool).await?;

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    let expiry = i64::try_from(settings.session_expiry_secs())?;
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(expiry)));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    let mut theme: ThemeSignal = use_context_provider(|| Signal::new(ui::Theme::default()));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Header above every page.
#[component]
fn AppLayout() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    rsx! {
        Navbar {
            user: auth().user,
            on_home: move |_| {
                nav.push(Route::Home {});
            },
            on_submit: move |_| {
                nav.push(Route::Enviar {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
            on_register: move |_| {
                nav.push(Route::Registro {});
            },
            on_search: move |search: String| {
                nav.push(Route::Resultados { search });
            },
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
