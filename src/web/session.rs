// src/web/session.rs
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use tracing::debug;

use super::PortalState;
use crate::core::TokenStore;

pub const TOKEN_COOKIE: &str = "jwt_token";

/// Bearer token of the current browser session: the `jwt_token` cookie,
/// or the configured fallback token when the cookie is absent
pub struct SessionToken(Option<String>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionToken {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        if let Some(cookie) = req.cookies().get(TOKEN_COOKIE) {
            return Outcome::Success(SessionToken(Some(cookie.value().to_string())));
        }

        debug!("No {} cookie on {}", TOKEN_COOKIE, req.uri());
        let fallback = req
            .rocket()
            .state::<PortalState>()
            .and_then(|state| state.fallback_token.clone());
        Outcome::Success(SessionToken(fallback))
    }
}

impl TokenStore for SessionToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}
