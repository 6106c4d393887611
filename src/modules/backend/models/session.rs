// Session state for backend calls.
//
// Every fetch takes the session explicitly. There is no ambient token store:
// the shell owns the login lifecycle and hands the data layer exactly one
// credential per call.

/// Caller-provided session for authenticated backend requests.
///
/// No `Debug` impl: the access token must not reach logs.
#[derive(Clone)]
pub struct SessionContext {
    access_token: String,
}

impl SessionContext {
    pub fn new(access_token: impl Into<String>) -> Self {
        SessionContext {
            access_token: access_token.into(),
        }
    }

    /// Bearer token for the `Authorization` header
    pub fn token(&self) -> &str {
        &self.access_token
    }
}
