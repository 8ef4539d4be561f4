//! blogwerk-auth – Authentifizierung und Identitaetsaufloesung
//!
//! Dieses Crate buendelt die drei Bausteine der Zugangskontrolle:
//!
//! - [`password`]: Argon2id-Hashing und -Verifikation von Passwoertern
//! - [`token`]: Ausstellen und Pruefen signierter, ablaufender Bearer-Tokens
//! - [`identity`]: Aufloesen eines optionalen Tokens zum Benutzer
//!
//! [`AuthService`] orchestriert Registrierung, Login und den
//! OAuth-Demo-Fluss gegen das UserRepository.

pub mod error;
pub mod identity;
pub mod password;
pub mod service;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use identity::IdentityResolver;
pub use service::{Anmeldung, AuthService};
pub use token::{TokenKonfig, TokenService};
