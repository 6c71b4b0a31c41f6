//! Page bodies shared by the frontends. Routing stays with the platform crate,
//! which passes navigation callbacks in.

mod home;
pub use home::HomeView;

mod submit;
pub use submit::SubmitView;

mod cifra_detail;
pub use cifra_detail::CifraDetailView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod results;
pub use results::ResultsView;
