use crate::providers::{huggingface, openai};
use crate::{Error, HuggingFaceProvider, OpenAIProvider, SummaryProvider};
use std::env;

/// Supported summarization providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    OpenAI,
    HuggingFace,
}

impl ProviderType {
    /// Name of the environment variable holding this provider's credential.
    pub fn credential_var(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => "OPENAI_API_KEY",
            ProviderType::HuggingFace => "HUGGING_FACE_API_TOKEN",
        }
    }

    /// Parse a `PROVIDER_TYPE` value.
    pub fn parse(value: &str) -> Result<Self, Error> {
        match value.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderType::OpenAI),
            "huggingface" | "hugging_face" | "hf" => Ok(ProviderType::HuggingFace),
            _ => Err(Error::config(format!(
                "Invalid PROVIDER_TYPE '{value}'. Valid values are: openai, huggingface"
            ))),
        }
    }
}

/// Configuration for creating providers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub provider_type: ProviderType,
    /// The bearer credential. `None` is a valid configuration; every request then fails.
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// Only used by the Hugging Face provider.
    pub model_id: Option<String>,
}

impl ProviderConfig {
    /// Create configuration for the OpenAI provider.
    pub fn openai(api_key: Option<String>) -> Self {
        Self {
            provider_type: ProviderType::OpenAI,
            api_key,
            base_url: None,
            model_id: None,
        }
    }

    /// Create configuration for the Hugging Face provider.
    pub fn huggingface(api_token: Option<String>) -> Self {
        Self {
            provider_type: ProviderType::HuggingFace,
            api_key: api_token,
            base_url: None,
            model_id: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// The configured credential. Empty values count as absent.
    pub fn credential(&self) -> Result<&str, Error> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingCredential(self.provider_type.credential_var()))
    }

    /// Create configuration from environment variables.
    ///
    /// Only an unknown `PROVIDER_TYPE` is an error here. A missing credential is
    /// reported per request instead.
    pub fn from_env() -> Result<Self, Error> {
        let provider_type = match env::var("PROVIDER_TYPE") {
            Ok(value) => ProviderType::parse(&value)?,
            Err(_) => ProviderType::OpenAI,
        };

        let api_key = env::var(provider_type.credential_var()).ok();
        let config = match provider_type {
            ProviderType::OpenAI => {
                let config = Self::openai(api_key);
                match env::var("OPENAI_BASE_URL") {
                    Ok(base_url) => config.with_base_url(base_url),
                    Err(_) => config,
                }
            }
            ProviderType::HuggingFace => {
                let mut config = Self::huggingface(api_key);
                if let Ok(base_url) = env::var("HUGGING_FACE_BASE_URL") {
                    config = config.with_base_url(base_url);
                }
                if let Ok(model_id) = env::var("HUGGING_FACE_MODEL_ID") {
                    config = config.with_model_id(model_id);
                }
                config
            }
        };

        Ok(config)
    }
}

/// Builds a provider for one request.
pub trait MakeProvider: Send + Sync + 'static {
    fn make(
        &self,
        config: &ProviderConfig,
        credential: &str,
    ) -> Result<Box<dyn SummaryProvider>, Error>;
}

/// Factory for creating the real HTTP-backed providers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn SummaryProvider>, Error> {
        let credential = config.credential()?;
        ProviderFactory.make(config, credential)
    }

    /// Create a provider from environment variables.
    pub fn from_env() -> Result<Box<dyn SummaryProvider>, Error> {
        let config = ProviderConfig::from_env()?;
        Self::create(&config)
    }
}

impl MakeProvider for ProviderFactory {
    fn make(
        &self,
        config: &ProviderConfig,
        credential: &str,
    ) -> Result<Box<dyn SummaryProvider>, Error> {
        match config.provider_type {
            ProviderType::OpenAI => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| openai::client::DEFAULT_BASE_URL.to_string());
                let provider = OpenAIProvider::new_with_base_url(credential.to_string(), base_url)?;
                Ok(Box::new(provider))
            }
            ProviderType::HuggingFace => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| huggingface::client::DEFAULT_BASE_URL.to_string());
                let model_id = config
                    .model_id
                    .clone()
                    .unwrap_or_else(|| huggingface::client::DEFAULT_MODEL_ID.to_string());
                let provider = HuggingFaceProvider::new_with_base_url(
                    credential.to_string(),
                    base_url,
                    model_id,
                )?;
                Ok(Box::new(provider))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_type() {
        assert_eq!(ProviderType::parse("openai").unwrap(), ProviderType::OpenAI);
        assert_eq!(ProviderType::parse("OpenAI").unwrap(), ProviderType::OpenAI);
        assert_eq!(
            ProviderType::parse("huggingface").unwrap(),
            ProviderType::HuggingFace
        );
        assert_eq!(ProviderType::parse("hf").unwrap(), ProviderType::HuggingFace);

        let err = ProviderType::parse("anthropic").unwrap_err();
        assert!(err.to_string().contains("Invalid PROVIDER_TYPE"));
    }

    #[test]
    fn test_credential() {
        let config = ProviderConfig::openai(Some("sk-test".to_string()));
        assert_eq!(config.credential().unwrap(), "sk-test");

        let config = ProviderConfig::openai(None);
        assert!(matches!(
            config.credential(),
            Err(Error::MissingCredential("OPENAI_API_KEY"))
        ));

        let config = ProviderConfig::huggingface(Some("   ".to_string()));
        assert!(matches!(
            config.credential(),
            Err(Error::MissingCredential("HUGGING_FACE_API_TOKEN"))
        ));
    }

    #[test]
    fn test_create_requires_credential() {
        assert!(ProviderFactory::create(&ProviderConfig::huggingface(None)).is_err());

        let provider = ProviderFactory::create(&ProviderConfig::openai(Some("k".into()))).unwrap();
        assert_eq!(provider.name(), "OpenAI");

        let provider =
            ProviderFactory::create(&ProviderConfig::huggingface(Some("hf".into()))).unwrap();
        assert_eq!(provider.name(), "HuggingFace");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProviderConfig::huggingface(Some("hf".into()))
            .with_base_url("http://localhost:8080")
            .with_model_id("sshleifer/distilbart-cnn-12-6");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(
            config.model_id.as_deref(),
            Some("sshleifer/distilbart-cnn-12-6")
        );
    }
}
