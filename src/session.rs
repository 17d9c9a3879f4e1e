use std::fmt;

/// Credential context handed to a command for the duration of one invocation.
#[derive(Clone, Default)]
pub struct Session {
    access_token: Option<String>,
}

impl Session {
    pub fn new(access_token: Option<String>) -> Self {
        let access_token = access_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());
        Self { access_token }
    }

    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self::new(Some(access_token.into()))
    }

    pub fn is_connected(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("connected", &self.is_connected())
            .finish()
    }
}
