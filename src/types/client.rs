/// Identity of the OAuth client requesting the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    /// Human-friendly label, if the client registered one.
    pub client_name: Option<String>,
    /// Stable identifier, always present.
    pub client_id: String,
}

impl ClientInfo {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_name: None,
            client_id: client_id.into(),
        }
    }

    pub fn with_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// The registered name, falling back to the client ID when the name is
    /// absent or empty.
    pub fn display_name(&self) -> &str {
        self.client_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.client_id)
    }
}
