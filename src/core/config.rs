use std::env;
use std::fs;

/// Default instruction text shipped with the binary. Used when no
/// `PALANTE_SYSTEM_PROMPT_PATH` is set.
const BUNDLED_SYSTEM_PROMPT: &str = include_str!("../../prompts/system.md");

/// Process-wide configuration, read once at startup and immutable for
/// the process lifetime.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub anthropic_api_hostname: String,
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    /// The instruction text sent as the system prompt on every
    /// completion call. Opaque to the pipeline; its content is a
    /// business artifact, not code.
    pub system_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let anthropic_api_hostname = env::var("PALANTE_ANTHROPIC_API_HOSTNAME")
            .unwrap_or_else(|_| "https://api.anthropic.com".to_string());
        let anthropic_api_key =
            env::var("ANTHROPIC_API_KEY").unwrap_or_else(|_| "thiswontworkforanthropic".to_string());
        let anthropic_model = env::var("PALANTE_MODEL")
            .unwrap_or_else(|_| crate::anthropic::DEFAULT_MODEL.to_string());
        let system_prompt = match env::var("PALANTE_SYSTEM_PROMPT_PATH") {
            Ok(path) => fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read system prompt from {}", path)),
            Err(_) => BUNDLED_SYSTEM_PROMPT.to_string(),
        };

        Self {
            anthropic_api_hostname,
            anthropic_api_key,
            anthropic_model,
            system_prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        unsafe {
            env::remove_var("PALANTE_ANTHROPIC_API_HOSTNAME");
            env::remove_var("PALANTE_MODEL");
            env::remove_var("PALANTE_SYSTEM_PROMPT_PATH");
        }

        let config = AppConfig::default();
        assert_eq!(config.anthropic_api_hostname, "https://api.anthropic.com");
        assert_eq!(config.anthropic_model, crate::anthropic::DEFAULT_MODEL);
        assert!(!config.system_prompt.is_empty());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            env::set_var("PALANTE_ANTHROPIC_API_HOSTNAME", "http://localhost:9999");
            env::set_var("PALANTE_MODEL", "claude-test-model");
        }

        let config = AppConfig::default();
        assert_eq!(config.anthropic_api_hostname, "http://localhost:9999");
        assert_eq!(config.anthropic_model, "claude-test-model");

        unsafe {
            env::remove_var("PALANTE_ANTHROPIC_API_HOSTNAME");
            env::remove_var("PALANTE_MODEL");
        }
    }

    #[test]
    #[serial]
    fn test_system_prompt_from_file() {
        let dir = env::temp_dir();
        let path = dir.join("palante_test_prompt.md");
        fs::write(&path, "You are a test persona.").unwrap();

        unsafe {
            env::set_var("PALANTE_SYSTEM_PROMPT_PATH", &path);
        }
        let config = AppConfig::default();
        assert_eq!(config.system_prompt, "You are a test persona.");

        unsafe {
            env::remove_var("PALANTE_SYSTEM_PROMPT_PATH");
        }
        fs::remove_file(&path).unwrap();
    }
}
