//! Deterministische Text-zu-URL-Segment-Transformation
//!
//! Rein und seiteneffektfrei: gleiche Eingabe ergibt immer denselben Slug,
//! keine Zufaelligkeit, kein I/O. Die Kollisionsbehandlung (Suffix mit der
//! Autor-ID) liegt im [`BeitragService`](crate::service::BeitragService),
//! nicht hier.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Feste Faltungstabelle fuer tuerkische Sonderbuchstaben
///
/// Diese Zeichen muessen VOR der Unicode-Zerlegung behandelt werden:
/// das punktlose ı etwa zerfaellt unter NFKD nicht zu einem ASCII-i und
/// wuerde sonst ersatzlos verschwinden.
const TUERKISCHE_FALTUNG: [(char, char); 12] = [
    ('ı', 'i'),
    ('İ', 'i'),
    ('ğ', 'g'),
    ('Ğ', 'g'),
    ('ü', 'u'),
    ('Ü', 'u'),
    ('ş', 's'),
    ('Ş', 's'),
    ('ö', 'o'),
    ('Ö', 'o'),
    ('ç', 'c'),
    ('Ç', 'c'),
];

static NICHT_WORTZEICHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("gueltiger Wortzeichen-Regex"));
static TRENNLAEUFE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("gueltiger Trenner-Regex"));

/// Erzeugt einen URL-sicheren Slug aus beliebigem Text
///
/// Schritte in fester Reihenfolge: tuerkische Buchstaben falten,
/// NFKD-zerlegen und Nicht-ASCII verwerfen, kleinschreiben, alles ausser
/// Wortzeichen/Leerraum/Bindestrich entfernen, Laeufe von
/// Leerraum/Bindestrichen zu einem Bindestrich zusammenziehen,
/// Randbindestriche abschneiden.
///
/// Leere Eingaben und Eingaben ohne Wortzeichen ergeben den leeren String.
pub fn slug_erzeugen(text: &str) -> String {
    let gefaltet: String = text
        .chars()
        .map(|c| {
            TUERKISCHE_FALTUNG
                .iter()
                .find(|(von, _)| *von == c)
                .map_or(c, |(_, nach)| *nach)
        })
        .collect();

    let ascii: String = gefaltet.nfkd().filter(char::is_ascii).collect();
    let klein = ascii.to_lowercase();

    let bereinigt = NICHT_WORTZEICHEN.replace_all(&klein, "");
    let verbunden = TRENNLAEUFE.replace_all(&bereinigt, "-");

    verbunden.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuerkischer_titel() {
        assert_eq!(
            slug_erzeugen("Tasarımda Minimalizm: Az Çoktur"),
            "tasarimda-minimalizm-az-coktur"
        );
    }

    #[test]
    fn alle_tuerkischen_buchstaben() {
        assert_eq!(slug_erzeugen("ığüşöç İĞÜŞÖÇ"), "igusoc-igusoc");
    }

    #[test]
    fn akzente_werden_zerlegt() {
        assert_eq!(slug_erzeugen("Café résumé"), "cafe-resume");
    }

    #[test]
    fn leere_eingabe() {
        assert_eq!(slug_erzeugen(""), "");
    }

    #[test]
    fn nur_symbole() {
        assert_eq!(slug_erzeugen("!!!"), "");
        assert_eq!(slug_erzeugen("?!.,;:"), "");
    }

    #[test]
    fn leerraum_und_bindestriche_kollabieren() {
        assert_eq!(slug_erzeugen("viel   Leerraum"), "viel-leerraum");
        assert_eq!(slug_erzeugen("schon--getrennt - hier"), "schon-getrennt-hier");
    }

    #[test]
    fn randbindestriche_werden_entfernt() {
        assert_eq!(slug_erzeugen("- am Rand -"), "am-rand");
    }

    #[test]
    fn deterministisch() {
        let eingabe = "Derselbe Titel ergibt denselben Slug";
        assert_eq!(slug_erzeugen(eingabe), slug_erzeugen(eingabe));
    }

    #[test]
    fn nicht_ascii_ohne_zerlegung_verschwindet() {
        // Zeichen ohne ASCII-Zerlegung (z.B. CJK) fallen ersatzlos weg
        assert_eq!(slug_erzeugen("日本語 Titel"), "titel");
    }
}
