#![forbid(unsafe_code)]
use permanence::{contacts_to_tsv, io, parse_contacts, Contact, IconKind};
use tempfile::tempdir;

#[test]
fn full_row_keeps_every_field() {
    let contacts = parse_contacts("Alice\ta@x.com\tLead\t6\t14\tsun");
    assert_eq!(
        contacts,
        vec![Contact::new("Alice", "a@x.com", "Lead", 6, 14).with_icon(IconKind::Sun)]
    );
}

#[test]
fn empty_fields_fall_back_to_defaults() {
    let contacts = parse_contacts("Bob\t\t\t\t\t");
    assert_eq!(contacts, vec![Contact::new("Bob", "", "Staff", 0, 0)]);
    assert_eq!(contacts[0].icon, IconKind::User);

    let nameless = parse_contacts("\tz@x.com");
    assert_eq!(nameless[0].name, "Unknown");
    assert_eq!(nameless[0].email, "z@x.com");
}

#[test]
fn empty_text_gives_empty_list() {
    assert!(parse_contacts("").is_empty());
    assert!(parse_contacts("\n\r\n").is_empty());
}

#[test]
fn whitespace_only_text_gives_empty_list() {
    assert!(parse_contacts("   ").is_empty());
    assert!(parse_contacts("\t\t").is_empty());
    assert!(parse_contacts(" \t\n\t \r\n").is_empty());
}

#[test]
fn trailing_blank_line_is_not_a_contact() {
    let contacts = parse_contacts("Alice\ta@x.com\tLead\t6\t14\tsun\n  \n");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].icon, IconKind::Sun);

    let short = parse_contacts("A\ta@x.com\n \t \n");
    assert_eq!(short.len(), 1);
    assert_eq!(short[0].email, "a@x.com");
}

#[test]
fn leading_blank_lines_keep_first_row_positional() {
    let contacts = parse_contacts("  \n\tz@x.com\tOps");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Unknown");
    assert_eq!(contacts[0].email, "z@x.com");
    assert_eq!(contacts[0].role, "Ops");
}

#[test]
fn blank_lines_are_skipped() {
    let text = "A\ta@x.com\tLead\t6\t14\tsun\n\n\r\nB\tb@x.com\tLead\t14\t22\tsunset\n";
    let contacts = parse_contacts(text);
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[1].email, "b@x.com");
}

#[test]
fn hours_are_permissive_and_unbounded() {
    let contacts = parse_contacts("N\tn@x.com\tNight\t22h\tsix\tmoon\nL\tl@x.com\tLate\t25\t3\towl");
    assert_eq!(contacts[0].shift_start, 22);
    assert_eq!(contacts[0].shift_end, 0);
    assert_eq!(contacts[1].shift_start, 25);
    assert_eq!(contacts[1].icon, IconKind::Other("owl".into()));
    assert_eq!(contacts[1].icon.resolved(), IconKind::User);
}

#[test]
fn tsv_output_reparses_to_same_contacts() {
    let contacts = permanence::demo_contacts();
    let tsv = contacts_to_tsv(&contacts).unwrap();
    assert!(!tsv.ends_with('\n'));
    assert_eq!(parse_contacts(&tsv), contacts);
}

#[test]
fn export_then_import_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shifts.tsv");
    io::export_contacts_tsv(&path, "Alice\ta@x.com\tLead\t6\t14\tsun").unwrap();
    let raw = io::import_contacts_tsv(&path).unwrap();
    assert_eq!(parse_contacts(&raw).len(), 1);
}

#[test]
fn import_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(io::import_contacts_tsv(dir.path().join("absent.tsv")).is_err());
}
