//! Textwerkzeuge: Lesezeit-Schaetzung und Auszugs-Erzeugung

use once_cell::sync::Lazy;
use regex::Regex;

/// Standard-Maximallaenge fuer erzeugte Auszuege (in Zeichen)
pub const STANDARD_AUSZUG_LAENGE: usize = 160;

/// Angenommene Lesegeschwindigkeit in Woertern pro Minute
const WOERTER_PRO_MINUTE: f64 = 200.0;

static UEBERSCHRIFTEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#+ ").expect("gueltiger Ueberschriften-Regex"));
static FETT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*|__").expect("gueltiger Fett-Regex"));
static KURSIV: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*|_").expect("gueltiger Kursiv-Regex"));
static LINKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("gueltiger Link-Regex"));
static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("gueltiger Codeblock-Regex"));
static CODE_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]+`").expect("gueltiger Inline-Code-Regex"));

/// Schaetzt die Lesezeit eines Beitrags als Label, z.B. "3 dk"
///
/// Wortanzahl geteilt durch 200 Woerter/Minute, kaufmaennisch gerundet und
/// bei 1 nach unten gedeckelt. Das tuerkische Minuten-Label "dk" ist Teil
/// des Produktformats und bleibt byte-genau erhalten.
pub fn lesezeit_berechnen(inhalt: &str) -> String {
    let woerter = inhalt.split_whitespace().count();
    let minuten = (woerter as f64 / WOERTER_PRO_MINUTE).round().max(1.0) as u64;
    format!("{minuten} dk")
}

/// Erzeugt einen Klartext-Auszug aus leichtgewichtigem Markup
///
/// Entfernt Ueberschriften-Markierungen, Fett-/Kursiv-Markierungen,
/// Link-Syntax (der Linktext bleibt), eingezaeunte und Inline-Codespannen,
/// zieht Leerraum zusammen und kuerzt bei Ueberlaenge an der letzten
/// Wortgrenze vor der Maximallaenge (gezaehlt in Zeichen, nicht Bytes).
/// Es wird nie mitten im Wort geschnitten.
pub fn auszug_erzeugen(inhalt: &str, max_laenge: usize) -> String {
    let text = UEBERSCHRIFTEN.replace_all(inhalt, "");
    let text = FETT.replace_all(&text, "");
    let text = KURSIV.replace_all(&text, "");
    let text = LINKS.replace_all(&text, "$1");
    let text = CODE_BLOCK.replace_all(&text, "");
    let text = CODE_INLINE.replace_all(&text, "");

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let zeichen: Vec<char> = text.chars().collect();
    if zeichen.len() <= max_laenge {
        return text;
    }

    let kopf: String = zeichen[..max_laenge].iter().collect();
    let geschnitten = match kopf.rfind(' ') {
        Some(i) => &kopf[..i],
        None => kopf.as_str(),
    };
    format!("{geschnitten}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn woerter(anzahl: usize) -> String {
        vec!["wort"; anzahl].join(" ")
    }

    #[test]
    fn lesezeit_kurzer_text() {
        assert_eq!(lesezeit_berechnen(&woerter(150)), "1 dk");
    }

    #[test]
    fn lesezeit_laengerer_text() {
        assert_eq!(lesezeit_berechnen(&woerter(410)), "2 dk");
    }

    #[test]
    fn lesezeit_mindestens_eine_minute() {
        assert_eq!(lesezeit_berechnen(""), "1 dk");
        assert_eq!(lesezeit_berechnen("drei kleine Woerter"), "1 dk");
    }

    #[test]
    fn lesezeit_rundet_kaufmaennisch() {
        // 500 / 200 = 2,5 -> 3
        assert_eq!(lesezeit_berechnen(&woerter(500)), "3 dk");
        // 480 / 200 = 2,4 -> 2
        assert_eq!(lesezeit_berechnen(&woerter(480)), "2 dk");
    }

    #[test]
    fn auszug_entfernt_markup() {
        let inhalt = "## Title\n\nSome **bold** text and a [link](http://x)";
        assert_eq!(
            auszug_erzeugen(inhalt, 160),
            "Title Some bold text and a link"
        );
    }

    #[test]
    fn auszug_entfernt_codespannen() {
        let inhalt = "Vorher ```rust\nfn main() {}\n``` nachher mit `inline` Code";
        assert_eq!(auszug_erzeugen(inhalt, 160), "Vorher nachher mit Code");
    }

    #[test]
    fn auszug_kurzer_text_bleibt_unveraendert() {
        assert_eq!(auszug_erzeugen("Kurzer Text", 160), "Kurzer Text");
    }

    #[test]
    fn auszug_schneidet_an_wortgrenze() {
        let inhalt = "aaaa ".repeat(60); // 300 Zeichen, Woerter je 4 Zeichen
        let auszug = auszug_erzeugen(&inhalt, 22);

        // Grenze faellt mitten in ein Wort -> Schnitt an der letzten Wortgrenze davor
        assert_eq!(auszug, "aaaa aaaa aaaa aaaa...");
        assert!(auszug.len() <= 22 + 3);
    }

    #[test]
    fn auszug_ohne_wortgrenze_schneidet_hart() {
        let inhalt = "a".repeat(200);
        let auszug = auszug_erzeugen(&inhalt, 160);
        assert_eq!(auszug.chars().count(), 163);
        assert!(auszug.ends_with("..."));
    }

    #[test]
    fn auszug_zaehlt_zeichen_nicht_bytes() {
        // Tuerkische Mehrbyte-Zeichen: Schnitt darf kein Zeichen zerreissen
        let inhalt = "şeftali ".repeat(40);
        let auszug = auszug_erzeugen(&inhalt, 20);
        assert_eq!(auszug, "şeftali şeftali...");
    }
}
