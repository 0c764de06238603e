//! # Viewer Identity
//!
//! Authentication happens upstream of this service. The authenticating
//! proxy forwards the signed-in user as two headers, which the [`Viewer`]
//! extractor turns into a [`User`]:
//!
//! - `X-User-Id`: numeric user id
//! - `X-Username`: display name, UTF-8
//!
//! Requests without a usable identity are rejected with 401.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use rollcall_core::{errors::RollcallError, models::user::User};

use super::error_handling::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USERNAME_HEADER: &str = "x-username";

/// The user making the request.
#[derive(Debug, Clone)]
pub struct Viewer(pub User);

impl Viewer {
    /// Fails with [`RollcallError::Authorization`] unless `user_id` is the viewer's own id.
    pub fn ensure_is(&self, user_id: i64) -> Result<(), RollcallError> {
        if self.0.user_id == user_id {
            Ok(())
        } else {
            Err(RollcallError::Authorization(format!(
                "User {} cannot act on behalf of user {}",
                self.0.user_id, user_id
            )))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Viewer(viewer_from_headers(&parts.headers)?))
    }
}

/// Reads the viewer identity from the forwarded headers.
pub fn viewer_from_headers(headers: &HeaderMap) -> Result<User, RollcallError> {
    let user_id = header_str(headers, USER_ID_HEADER)?
        .trim()
        .parse::<i64>()
        .map_err(|_| {
            RollcallError::Authentication(format!("{} must be an integer", USER_ID_HEADER))
        })?;

    let username = header_str(headers, USERNAME_HEADER)?.trim();
    if username.is_empty() {
        return Err(RollcallError::Authentication(format!(
            "{} must not be empty",
            USERNAME_HEADER
        )));
    }

    Ok(User::new(user_id, username))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, RollcallError> {
    let value = headers
        .get(name)
        .ok_or_else(|| RollcallError::Authentication(format!("Missing {} header", name)))?;

    std::str::from_utf8(value.as_bytes())
        .map_err(|_| RollcallError::Authentication(format!("{} is not valid UTF-8", name)))
}
