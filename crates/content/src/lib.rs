//! blogwerk-content – Beitrags-Logik
//!
//! Dieses Crate buendelt die inhaltsnahe Geschaeftslogik:
//!
//! - [`slug`]: deterministische Text-zu-URL-Segment-Transformation
//! - [`text`]: Lesezeit-Schaetzung und Auszugs-Erzeugung
//! - [`service`]: Beitrags-CRUD mit Besitzpruefung und Tag-Abgleich
//!   ueber das PostRepository

pub mod error;
pub mod service;
pub mod slug;
pub mod text;

pub use error::{ContentError, ContentResult};
pub use service::{besitz_pruefen, BeitragAenderung, BeitragService, NeuerBeitragDaten};
pub use slug::slug_erzeugen;
pub use text::{auszug_erzeugen, lesezeit_berechnen};
