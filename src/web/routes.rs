use rocket::form::Form;
use rocket::http::{Cookie, CookieJar};
use rocket::response::Redirect;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{Build, FromForm, Rocket, State, get, post, routes, uri};
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::actions::{self, ActionResult};
use crate::auth::Authenticator;
use crate::combobox::TagPicker;
use crate::data::Note;
use crate::listing::{EmptyState, ListingCache, NoteListing};
use crate::session::{SESSION_COOKIE_NAME, Session, session_cookie};
use crate::store::NoteStore;
use crate::validation::FieldMap;
use crate::web::guards::{NoSessionCookie, SessionCookie};

pub trait WebRocketBuildExt {
    fn install_jotter_web(self) -> Self;
}

impl WebRocketBuildExt for Rocket<Build> {
    fn install_jotter_web(self) -> Self {
        self.mount(
            "/",
            routes![
                index,
                index_anonymous,
                login_page,
                login_authenticated,
                login_submit,
                login_submit_authenticated,
                logout,
                create_note,
                update_note,
                delete_note,
            ],
        )
    }
}

#[get("/?<subject>&<person>")]
async fn index(
    session: SessionCookie,
    store: &State<NoteStore>,
    cache: &State<ListingCache>,
    subject: Option<String>,
    person: Option<String>,
) -> RawHtml<String> {
    let listing = cache.get(store.inner()).await;
    let subject_filter = subject.as_deref().filter(|value| !value.is_empty());
    let person_filter = person.as_deref().filter(|value| !value.is_empty());
    let visible = listing.filtered(subject_filter, person_filter);
    RawHtml(render_board(
        &listing,
        &visible,
        subject_filter,
        person_filter,
        session.0.as_ref(),
    ))
}

#[get("/", rank = 2)]
fn index_anonymous() -> Redirect {
    Redirect::to(uri!("/login"))
}

#[get("/login")]
fn login_page(_guest: NoSessionCookie) -> RawHtml<String> {
    RawHtml(render_login(None))
}

#[get("/login", rank = 2)]
fn login_authenticated() -> Redirect {
    Redirect::to(uri!("/"))
}

#[derive(FromForm)]
struct LoginSubmission {
    username: Option<String>,
    password: Option<String>,
}

#[post("/login", data = "<form>")]
fn login_submit(
    _guest: NoSessionCookie,
    jar: &CookieJar<'_>,
    authenticator: &State<Authenticator>,
    form: Form<LoginSubmission>,
) -> Result<Redirect, RawHtml<String>> {
    let submission = form.into_inner();
    let username = submission.username.unwrap_or_default();
    let password = submission.password.unwrap_or_default();
    match authenticator.login(&username, &password) {
        Ok(session) => {
            jar.add_private(session_cookie(&session));
            Ok(Redirect::to(uri!("/")))
        }
        Err(e) => Err(RawHtml(render_login(Some(&e.to_string())))),
    }
}

#[post("/login", rank = 2)]
fn login_submit_authenticated() -> Redirect {
    Redirect::to(uri!("/"))
}

#[post("/logout")]
fn logout(jar: &CookieJar<'_>) -> Redirect {
    jar.remove_private(Cookie::from(SESSION_COOKIE_NAME));
    Redirect::to(uri!("/login"))
}

#[derive(FromForm)]
struct NoteSubmission {
    title: Option<String>,
    subject: Vec<String>,
    person: Vec<String>,
    description: Option<String>,
}

impl NoteSubmission {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        if let Some(title) = self.title {
            fields.push("title", title);
        }
        for value in self.subject {
            fields.push("subject", value);
        }
        for value in self.person {
            fields.push("person", value);
        }
        if let Some(description) = self.description {
            fields.push("description", description);
        }
        fields
    }
}

#[post("/notes", data = "<form>")]
async fn create_note(
    store: &State<NoteStore>,
    cache: &State<ListingCache>,
    form: Form<NoteSubmission>,
) -> Json<ActionResult> {
    let fields = form.into_inner().into_field_map();
    Json(actions::create_note(store.inner(), cache.inner(), &fields).await)
}

#[post("/notes/<id>", data = "<form>")]
async fn update_note(
    id: Uuid,
    store: &State<NoteStore>,
    cache: &State<ListingCache>,
    form: Form<NoteSubmission>,
) -> Json<ActionResult> {
    let fields = form.into_inner().into_field_map();
    Json(actions::update_note(store.inner(), cache.inner(), id, &fields).await)
}

#[post("/notes/<id>/delete")]
async fn delete_note(
    id: Uuid,
    store: &State<NoteStore>,
    cache: &State<ListingCache>,
) -> Json<ActionResult> {
    Json(actions::delete_note(store.inner(), cache.inner(), id).await)
}

fn esc(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_login(message: Option<&str>) -> String {
    let notice = message
        .map(|message| format!("<p class=\"error\">{}</p>", esc(message)))
        .unwrap_or_default();
    format!(
        "<html><head><title>jotter</title></head><body>\
         <h1>jotter</h1><p>Welcome back! Please sign in.</p>{notice}\
         <form method=\"post\" action=\"/login\">\
         <label>Username <input name=\"username\" value=\"admin\"></label>\
         <label>Password <input name=\"password\" type=\"password\" value=\"admin123\"></label>\
         <button type=\"submit\">Sign in</button>\
         </form></body></html>"
    )
}

fn render_board(
    listing: &NoteListing,
    visible: &[&Note],
    subject_filter: Option<&str>,
    person_filter: Option<&str>,
    session: Option<&Session>,
) -> String {
    let user = session
        .map(|session| format!("<span>Signed in as {}</span>", esc(&session.username)))
        .unwrap_or_default();
    let filters = format!(
        "<form method=\"get\" action=\"/\">{}{}\
         <button type=\"submit\">Filter</button> <a href=\"/\">Clear filters</a></form>",
        render_select("subject", &listing.subjects(), subject_filter),
        render_select("person", &listing.people(), person_filter),
    );
    let cards = match listing.empty_state(visible.len()) {
        Some(EmptyState::NoNotes) => {
            "<p>No notes yet. Create your first note to get started.</p>".to_owned()
        }
        Some(EmptyState::NoMatches) => "<p>No notes match the current filters.</p>".to_owned(),
        None => visible.iter().map(|note| render_card(note)).collect(),
    };
    format!(
        "<html><head><title>jotter</title></head><body>\
         <header><h1>Your Notes</h1>{user}\
         <form method=\"post\" action=\"/logout\"><button type=\"submit\">Sign out</button></form>\
         </header>{filters}<main>{cards}</main>{}</body></html>",
        render_note_form(listing),
    )
}

fn render_select(name: &str, values: &[String], selected: Option<&str>) -> String {
    let mut options = String::from("<option value=\"\">All</option>");
    for value in values {
        let marker = if selected == Some(value.as_str()) { " selected" } else { "" };
        let escaped = esc(value);
        options.push_str(&format!("<option value=\"{escaped}\"{marker}>{escaped}</option>"));
    }
    format!("<select name=\"{name}\">{options}</select>")
}

fn render_card(note: &Note) -> String {
    let timestamp = note.created_at.format(&Rfc3339).unwrap_or_default();
    format!(
        "<article data-id=\"{id}\"><h2>{title}</h2>\
         <p>Subjects: {subjects}</p><p>People: {people}</p>\
         <p>{description}</p><time>{timestamp}</time>\
         <form method=\"post\" action=\"/notes/{id}/delete\">\
         <button type=\"submit\">Delete</button></form></article>",
        id = note.id,
        title = esc(&note.title),
        subjects = join_escaped(&note.subject),
        people = join_escaped(&note.person),
        description = esc(&note.description),
    )
}

fn join_escaped(values: &[String]) -> String {
    values.iter().map(|value| esc(value)).collect::<Vec<_>>().join(", ")
}

fn render_note_form(listing: &NoteListing) -> String {
    let subject_picker = TagPicker::new(listing.subjects(), []);
    let person_picker = TagPicker::new(listing.people(), []);
    format!(
        "<form method=\"post\" action=\"/notes\">\
         <input name=\"title\" placeholder=\"Title\">\
         <input name=\"subject\" list=\"subjects\">{}\
         <input name=\"person\" list=\"people\">{}\
         <textarea name=\"description\"></textarea>\
         <button type=\"submit\">Create Note</button></form>",
        render_datalist("subjects", &subject_picker),
        render_datalist("people", &person_picker),
    )
}

fn render_datalist(id: &str, picker: &TagPicker) -> String {
    let options: String = picker
        .suggestions()
        .iter()
        .map(|value| format!("<option value=\"{}\">", esc(value)))
        .collect();
    format!("<datalist id=\"{id}\">{options}</datalist>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_escaped() {
        assert_eq!(esc("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn login_page_carries_the_demo_defaults() {
        let page = render_login(None);
        assert!(page.contains("value=\"admin\""));
        assert!(page.contains("value=\"admin123\""));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn login_page_shows_the_failure_message() {
        let page = render_login(Some("Invalid username or password."));
        assert!(page.contains("Invalid username or password."));
    }
}
