use async_trait::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};

use crate::session::{SESSION_COOKIE_NAME, Session};

/// Passes when a `session` cookie exists. The gate decision is a presence
/// check only; the payload is parsed separately and a tampered or
/// malformed payload simply reads as no user.
#[derive(Debug)]
pub struct SessionCookie(pub Option<Session>);

/// Passes when no `session` cookie exists.
#[derive(Debug)]
pub struct NoSessionCookie;

#[async_trait]
impl<'r> FromRequest<'r> for SessionCookie {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jar = request.cookies();
        if jar.get(SESSION_COOKIE_NAME).is_none() {
            return Outcome::Forward(Status::Unauthorized);
        }
        let session = jar
            .get_private(SESSION_COOKIE_NAME)
            .and_then(|cookie| Session::from_cookie_value(cookie.value()));
        Outcome::Success(SessionCookie(session))
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for NoSessionCookie {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        if request.cookies().get(SESSION_COOKIE_NAME).is_some() {
            Outcome::Forward(Status::SeeOther)
        } else {
            Outcome::Success(NoSessionCookie)
        }
    }
}
