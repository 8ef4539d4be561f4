//! blogwerk-api – REST-Schnittstelle
//!
//! Axum-basierte HTTP-Grenzschicht: Routen, Handler, Identitaets-Extraktoren
//! und die Abbildung der Fachfehler auf HTTP-Statuscodes. Die Handler
//! validieren Eingaben und delegieren an die Services aus `blogwerk-auth`
//! und `blogwerk-content`.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::api_router;
pub use server::{RestServer, RestServerKonfig};
pub use state::AppState;
