use jotter::store::{NoteRow, TagColumn};
use jotter::validation::FieldMap;
use time::macros::datetime;
use uuid::Uuid;

/// Rows exercising every tag shape the table has historically held:
/// native arrays, bare strings, and strings holding JSON-encoded arrays.
pub fn heterogeneous_rows() -> Vec<NoteRow> {
    vec![
        NoteRow {
            id: Uuid::from_u128(0xA1),
            created_at: datetime!(2023-10-01 10:00 UTC),
            title: "Meeting with a client".to_owned(),
            subject: TagColumn::Tags(vec![" Project Alpha ".to_owned(), String::new()]),
            person: TagColumn::Text("John Doe".to_owned()),
            description: "Discuss the new requirements.".to_owned(),
        },
        NoteRow {
            id: Uuid::from_u128(0xB2),
            created_at: datetime!(2023-10-02 14:30 UTC),
            title: "Brainstorming Session".to_owned(),
            subject: TagColumn::Text(r#"["New Marketing Campaign", "Q4"]"#.to_owned()),
            person: TagColumn::Tags(vec!["Jane Smith".to_owned()]),
            description: "Generate ideas for the campaign.".to_owned(),
        },
        NoteRow {
            id: Uuid::from_u128(0xC3),
            created_at: datetime!(2023-10-05 09:00 UTC),
            title: "Dentist Appointment".to_owned(),
            subject: TagColumn::Text("Regular Check-up".to_owned()),
            person: TagColumn::Text(r#"["Dr. Adams", ""]"#.to_owned()),
            description: "Annual dental check-up.".to_owned(),
        },
    ]
}

pub fn note_fields(
    title: &str,
    subjects: &[&str],
    people: &[&str],
    description: &str,
) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.push("title", title);
    for subject in subjects {
        fields.push("subject", *subject);
    }
    for person in people {
        fields.push("person", *person);
    }
    fields.push("description", description);
    fields
}

/// A URL-encoded form body for the same payload. Values must be
/// form-safe; the tests only submit plain ASCII.
pub fn note_form_body(
    title: &str,
    subjects: &[&str],
    people: &[&str],
    description: &str,
) -> String {
    let mut pairs = vec![format!("title={title}")];
    pairs.extend(subjects.iter().map(|subject| format!("subject={subject}")));
    pairs.extend(people.iter().map(|person| format!("person={person}")));
    pairs.push(format!("description={description}"));
    pairs.join("&")
}
