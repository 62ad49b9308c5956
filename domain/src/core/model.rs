//! Model value objects: which model to ask and which provider serves it

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Provider family backing a model (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    /// OpenAI chat completions (GPT and o-series models)
    #[default]
    OpenAi,
    /// Google Gemini `generateContent`
    Gemini,
    /// Anthropic Claude messages
    Claude,
}

impl ProviderKind {
    /// All provider kinds, in a stable order
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
        ProviderKind::Claude,
    ];

    /// Get the configuration name for this provider
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Claude => "anthropic",
        }
    }

    /// Parse a provider name as used in configuration files.
    ///
    /// Returns `None` for unknown names so callers can report them.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "openai" | "gpt" => Some(ProviderKind::OpenAi),
            "gemini" | "google" => Some(ProviderKind::Gemini),
            "anthropic" | "claude" => Some(ProviderKind::Claude),
            _ => None,
        }
    }

    /// Infer the provider family from a model identifier.
    ///
    /// Identifiers that match no known family fall back to
    /// [`ProviderKind::OpenAi`].
    pub fn infer(model_id: &str) -> Self {
        let id = model_id.trim().to_ascii_lowercase();
        if id.starts_with("gemini") {
            ProviderKind::Gemini
        } else if id.starts_with("claude") {
            ProviderKind::Claude
        } else {
            ProviderKind::OpenAi
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ProviderKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProviderKind::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown provider: {}", s)))
    }
}

/// A model to query, together with the provider that serves it (Value Object)
///
/// The ordered list of `ModelSpec`s for a run fixes the slot order of the
/// results table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelSpec {
    id: String,
    provider: ProviderKind,
}

impl ModelSpec {
    /// Create a spec whose provider is inferred from the identifier
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let provider = ProviderKind::infer(&id);
        Self { id, provider }
    }

    /// Create a spec with an explicit provider
    pub fn with_provider(id: impl Into<String>, provider: ProviderKind) -> Self {
        Self {
            id: id.into(),
            provider,
        }
    }

    /// The model identifier sent to the provider
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// The default fan-out set
    pub fn default_models() -> Vec<ModelSpec> {
        [
            "gpt-4o-2024-08-06",
            "o3-mini",
            "o1-mini",
            "gemini-2.0-flash",
            "claude-3-7-sonnet-20250219",
        ]
        .into_iter()
        .map(ModelSpec::new)
        .collect()
    }

    /// The default model used for the final summary
    pub fn default_synthesizer() -> ModelSpec {
        ModelSpec::new("o1-mini")
    }
}

impl std::fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl std::str::FromStr for ModelSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelSpec::new(s.trim()))
    }
}
