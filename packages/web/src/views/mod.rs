mod home;
pub use home::Home;

mod enviar;
pub use enviar::Enviar;

mod cifra_detail;
pub use cifra_detail::CifraDetail;

mod resultados;
pub use resultados::Resultados;

mod login;
pub use login::Login;

mod registro;
pub use registro::Registro;
