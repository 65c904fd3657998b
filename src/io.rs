use crate::model::{Contact, IconKind};
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_ROLE: &str = "Staff";

/// Parse un tableau TSV `name, email, role, shift_start, shift_end, icon`.
///
/// Aucune erreur ne remonte : un texte vide ou illisible donne une liste vide.
/// Valeurs par défaut appliquées champ par champ :
///
/// | champ         | vide / absent | remarque                               |
/// |---------------|---------------|----------------------------------------|
/// | `name`        | `"Unknown"`   |                                        |
/// | `email`       | `""`          |                                        |
/// | `role`        | `"Staff"`     |                                        |
/// | `shift_start` | `0`           | préfixe numérique accepté (`"6abc"`)   |
/// | `shift_end`   | `0`           | idem, pas de contrôle de plage         |
/// | `icon`        | `"user"`      | tag inconnu conservé                   |
pub fn parse_contacts(text: &str) -> Vec<Contact> {
    let text = trim_blank_edges(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let parsed: Result<Vec<Contact>, csv::Error> = rdr
        .records()
        .map(|rec| rec.map(|rec| contact_from_record(&rec)))
        .collect();

    match parsed {
        Ok(contacts) => contacts,
        Err(_err) => {
            #[cfg(feature = "logging")]
            tracing::debug!(error = %_err, "unreadable contact table, falling back to empty list");
            Vec::new()
        }
    }
}

fn contact_from_record(rec: &StringRecord) -> Contact {
    let field = |idx: usize| rec.get(idx).filter(|s| !s.is_empty());
    Contact {
        name: field(0).unwrap_or(DEFAULT_NAME).to_string(),
        email: field(1).unwrap_or_default().to_string(),
        role: field(2).unwrap_or(DEFAULT_ROLE).to_string(),
        shift_start: field(3).map_or(0, parse_leading_int),
        shift_end: field(4).map_or(0, parse_leading_int),
        icon: field(5).map_or(IconKind::User, IconKind::from_tag),
    }
}

/// Lit l'entier en tête de `raw` (signe et préfixe `0x` admis).
/// Sans chiffre exploitable, renvoie 0.
fn parse_leading_int(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }

    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(d))
        });
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Retire les lignes blanches en tête et les blancs en fin de texte.
///
/// La première ligne non blanche garde ses tabulations initiales (champ
/// `name` vide). Un texte fait uniquement de blancs devient vide.
pub fn trim_blank_edges(text: &str) -> &str {
    let Some(first) = text.find(|c: char| !c.is_whitespace()) else {
        return "";
    };
    let line_start = text[..first].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..].trim_end()
}

/// Sérialise les contacts en TSV, une ligne par contact, sans saut de ligne final.
pub fn contacts_to_tsv(contacts: &[Contact]) -> anyhow::Result<String> {
    let mut w = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(Vec::new());
    for c in contacts {
        let mut start = itoa::Buffer::new();
        let mut end = itoa::Buffer::new();
        w.write_record([
            c.name.as_str(),
            c.email.as_str(),
            c.role.as_str(),
            start.format(c.shift_start),
            end.format(c.shift_end),
            c.icon.as_tag(),
        ])?;
    }
    let bytes = w
        .into_inner()
        .map_err(|err| err.into_error())
        .context("flushing TSV buffer")?;
    let mut out = String::from_utf8(bytes).context("TSV output is not UTF-8")?;
    while out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Lit un fichier TSV et renvoie son contenu brut.
pub fn import_contacts_tsv<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Écrit le texte TSV de manière atomique (fichier temporaire puis renommage).
pub fn export_contacts_tsv<P: AsRef<Path>>(path: P, raw: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(raw.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_accepts_numeric_prefix() {
        assert_eq!(parse_leading_int("6abc"), 6);
        assert_eq!(parse_leading_int("  22"), 22);
        assert_eq!(parse_leading_int("-3"), -3);
        assert_eq!(parse_leading_int("+7h"), 7);
        assert_eq!(parse_leading_int("0x1A"), 26);
        assert_eq!(parse_leading_int("25"), 25);
    }

    #[test]
    fn leading_int_without_digits_is_zero() {
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int("-"), 0);
        assert_eq!(parse_leading_int("0x"), 0);
    }

    #[test]
    fn leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999"), i32::MAX);
        assert_eq!(parse_leading_int("-99999999999999999999"), i32::MIN);
    }

    #[test]
    fn blank_edges_keep_leading_tab_of_first_row() {
        assert_eq!(trim_blank_edges(" \n\t\n\tz@x.com\n \t\n"), "\tz@x.com");
        assert_eq!(trim_blank_edges("\r\n\t \r\n"), "");
        assert_eq!(trim_blank_edges("A\ta@x.com"), "A\ta@x.com");
    }

    #[test]
    fn missing_trailing_fields_get_defaults() {
        let contacts = parse_contacts("Carol\tc@x.com");
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].role, DEFAULT_ROLE);
        assert_eq!(contacts[0].shift_start, 0);
        assert_eq!(contacts[0].icon, IconKind::User);
    }
}
