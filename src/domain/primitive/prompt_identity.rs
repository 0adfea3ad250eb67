use std::fmt;

/// The fixed decoration shown in front of every echoed command,
/// e.g. `rohit@portfolio:~$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptIdentity {
    pub user: String,
    pub host: String,
    pub symbol: String,
}

impl PromptIdentity {
    pub fn new(user: impl Into<String>, host: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for PromptIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.user, self.host, self.symbol)
    }
}
