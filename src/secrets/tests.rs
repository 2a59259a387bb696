// Secrets provider tests.

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn secrets_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{}", content).expect("Failed to write secrets");
    file.flush().expect("Failed to flush secrets");
    file
}

struct Fixed(Option<&'static str>);

impl SecretsProvider for Fixed {
    fn name(&self) -> String {
        "fixed".to_string()
    }

    fn api_key(&self) -> Result<Option<String>, ConfigurationError> {
        Ok(self.0.map(str::to_string))
    }
}

#[test]
fn test_static_secret_ignores_blank() {
    assert_eq!(StaticSecret::new(None).api_key().unwrap(), None);
    assert_eq!(StaticSecret::new(Some("   ".into())).api_key().unwrap(), None);
    assert_eq!(
        StaticSecret::new(Some(" abc ".into())).api_key().unwrap(),
        Some("abc".to_string())
    );
}

#[test]
fn test_env_secret_reads_variable() {
    let var = "WHOISJSON_EXPLORER_TEST_KEY_PRESENT";
    std::env::set_var(var, "from-env");
    assert_eq!(
        EnvSecrets::new(var).api_key().unwrap(),
        Some("from-env".to_string())
    );
    std::env::remove_var(var);
}

#[test]
fn test_env_secret_default_variable() {
    assert_eq!(
        EnvSecrets::default().name(),
        "environment variable WHOISJSON_API_KEY"
    );
}

#[test]
fn test_env_secret_missing_variable() {
    let provider = EnvSecrets::new("WHOISJSON_EXPLORER_TEST_KEY_ABSENT");
    assert_eq!(provider.api_key().unwrap(), None);
}

#[test]
fn test_toml_file_reads_api_key() {
    let file = secrets_file("[whoisjson]\napi_key = \"from-file\"\n");
    let provider = TomlSecretsFile::new(file.path());
    assert_eq!(provider.api_key().unwrap(), Some("from-file".to_string()));
}

#[test]
fn test_toml_file_missing_is_not_an_error() {
    let provider = TomlSecretsFile::new("/nonexistent/dir/secrets.toml");
    assert_eq!(provider.api_key().unwrap(), None);
}

#[test]
fn test_toml_file_without_table_has_no_key() {
    let file = secrets_file("[other]\napi_key = \"nope\"\n");
    assert_eq!(TomlSecretsFile::new(file.path()).api_key().unwrap(), None);
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let file = secrets_file("[whoisjson\napi_key = ");
    let err = TomlSecretsFile::new(file.path())
        .api_key()
        .expect_err("malformed file should fail");
    assert!(matches!(err, ConfigurationError::SecretsFile { .. }));
}

#[test]
fn test_chain_first_non_empty_wins() {
    let chain = ChainedSecrets::new(
        vec![
            Box::new(Fixed(None)),
            Box::new(Fixed(Some("second"))),
            Box::new(Fixed(Some("third"))),
        ],
        "secrets.toml",
    );
    assert_eq!(chain.require_api_key().unwrap(), "second");
}

#[test]
fn test_chain_missing_key_everywhere() {
    let chain = ChainedSecrets::new(vec![Box::new(Fixed(None))], "secrets.toml");
    let err = chain.require_api_key().expect_err("no key anywhere");
    assert!(matches!(err, ConfigurationError::MissingApiKey { .. }));
}

#[test]
fn test_chain_prefers_explicit_key_over_file() {
    let file = secrets_file("[whoisjson]\napi_key = \"from-file\"\n");
    let config = Config {
        api_key: Some("from-flag".to_string()),
        secrets_file: file.path().to_path_buf(),
        ..Default::default()
    };
    assert_eq!(
        ChainedSecrets::from_config(&config).require_api_key().unwrap(),
        "from-flag"
    );
}

#[test]
fn test_chain_env_beats_secrets_file() {
    let var = "WHOISJSON_EXPLORER_TEST_KEY_ENV_OVER_FILE";
    let file = secrets_file("[whoisjson]\napi_key = \"from-file\"\n");
    let config = Config {
        secrets_file: file.path().to_path_buf(),
        ..Default::default()
    };
    std::env::set_var(var, "from-env");
    let key = ChainedSecrets::from_config_with_env(&config, var).require_api_key();
    std::env::remove_var(var);
    assert_eq!(key.unwrap(), "from-env");
}

#[test]
fn test_chain_flag_beats_env() {
    let var = "WHOISJSON_EXPLORER_TEST_KEY_FLAG_OVER_ENV";
    let config = Config {
        api_key: Some("from-flag".to_string()),
        secrets_file: "/nonexistent/dir/secrets.toml".into(),
        ..Default::default()
    };
    std::env::set_var(var, "from-env");
    let key = ChainedSecrets::from_config_with_env(&config, var).require_api_key();
    std::env::remove_var(var);
    assert_eq!(key.unwrap(), "from-flag");
}

#[test]
fn test_chain_falls_back_to_secrets_file() {
    let file = secrets_file("[whoisjson]\napi_key = \"from-file\"\n");
    let config = Config {
        api_key: None,
        secrets_file: file.path().to_path_buf(),
        ..Default::default()
    };
    let chain =
        ChainedSecrets::from_config_with_env(&config, "WHOISJSON_EXPLORER_TEST_KEY_UNSET");
    assert_eq!(chain.require_api_key().unwrap(), "from-file");
}

#[test]
fn test_chain_blank_env_falls_through_to_file() {
    let var = "WHOISJSON_EXPLORER_TEST_KEY_BLANK_ENV";
    let file = secrets_file("[whoisjson]\napi_key = \"from-file\"\n");
    let config = Config {
        secrets_file: file.path().to_path_buf(),
        ..Default::default()
    };
    std::env::set_var(var, "   ");
    let key = ChainedSecrets::from_config_with_env(&config, var).require_api_key();
    std::env::remove_var(var);
    assert_eq!(key.unwrap(), "from-file");
}

#[test]
fn test_chain_missing_everywhere_names_secrets_file() {
    let config = Config {
        secrets_file: "/nonexistent/dir/secrets.toml".into(),
        ..Default::default()
    };
    let err = ChainedSecrets::from_config_with_env(&config, "WHOISJSON_EXPLORER_TEST_KEY_NONE")
        .require_api_key()
        .expect_err("no key anywhere");
    match err {
        ConfigurationError::MissingApiKey { secrets_file } => {
            assert_eq!(secrets_file, "/nonexistent/dir/secrets.toml")
        }
        other => panic!("Expected MissingApiKey, got {:?}", other),
    }
}
