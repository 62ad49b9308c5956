//! Provider credentials

use super::model::ProviderKind;

/// An API secret for one provider.
///
/// `Debug` is redacted so the value never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` when the secret is empty or whitespace
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            None
        } else {
            Some(Self(secret.trim().to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// One credential per provider kind, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub openai: Credential,
    pub gemini: Credential,
    pub claude: Credential,
}

impl Credentials {
    pub fn for_provider(&self, kind: ProviderKind) -> &Credential {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::Claude => &self.claude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("sk-secret").unwrap();
        assert_eq!(format!("{:?}", cred), "Credential(***)");
        assert_eq!(cred.expose(), "sk-secret");
    }

    #[test]
    fn test_blank_secret_rejected() {
        assert!(Credential::new("   ").is_none());
    }

    #[test]
    fn test_lookup_by_provider() {
        let creds = Credentials {
            openai: Credential::new("o").unwrap(),
            gemini: Credential::new("g").unwrap(),
            claude: Credential::new("c").unwrap(),
        };
        assert_eq!(creds.for_provider(ProviderKind::Gemini).expose(), "g");
        assert_eq!(creds.for_provider(ProviderKind::Claude).expose(), "c");
    }
}
