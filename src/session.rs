use rocket::http::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

pub const SESSION_COOKIE_NAME: &str = "session";
pub const SESSION_MAX_AGE: Duration = Duration::days(7);

/// The whole session state: the cookie payload is a JSON-serialized
/// `Session`, carried in a private (signed and encrypted) cookie. There is
/// no server-side session table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Session {
    pub username: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Session {
        Session { username: username.into() }
    }

    pub fn to_cookie_value(&self) -> String {
        serde_json::to_string(self).expect("session serialization failed")
    }

    /// A payload that does not parse reads as "no session".
    pub fn from_cookie_value(value: &str) -> Option<Session> {
        serde_json::from_str(value).ok()
    }
}

pub fn session_cookie(session: &Session) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, session.to_cookie_value()))
        .http_only(true)
        .secure(!cfg!(debug_assertions))
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(SESSION_MAX_AGE)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_round_trips() {
        let session = Session::new("admin");
        let value = session.to_cookie_value();
        assert_eq!(Session::from_cookie_value(&value), Some(session));
    }

    #[test]
    fn malformed_payload_reads_as_no_session() {
        assert_eq!(Session::from_cookie_value("not json"), None);
        assert_eq!(Session::from_cookie_value(r#"{"user":"x"}"#), None);
        assert_eq!(Session::from_cookie_value(""), None);
    }

    #[test]
    fn cookie_attributes() {
        let cookie = session_cookie(&Session::new("admin"));
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(SESSION_MAX_AGE));
    }
}
