use itertools::Itertools;
use serde::Serialize;
use sha3::Digest;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

/// Time allowed for a single test command, in milliseconds.
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 30_000;

/// Time allowed for an HTTP request made during a test, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 300_000;

/// The output-reporting plugin the external framework should load.
pub const REPORTER: &str = "cypress-mochawesome-reporter";

/// Glob selecting the spec files the external framework will execute.
pub const SPEC_PATTERN: &str = "cypress/e2e/**/**/*.{js,jsx,ts,tsx}";

/// Configuration for one test-execution session
///
/// This is the object handed to the external test framework. The serialised
/// field names are the framework's, not ours, so renames are applied
/// throughout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunConfig {
    /// Time allowed for a single test command, in milliseconds
    ///
    /// Fixed at [DEFAULT_COMMAND_TIMEOUT_MS] regardless of environment.
    #[serde(rename = "defaultCommandTimeout")]
    pub default_command_timeout_ms: u64,
    /// Time allowed for an HTTP request made during a test, in milliseconds
    ///
    /// Fixed at [REQUEST_TIMEOUT_MS] regardless of environment.
    #[serde(rename = "requestTimeout")]
    pub request_timeout_ms: u64,
    /// The output-reporting plugin identifier
    ///
    /// Opaque to us. The external framework resolves it by name.
    pub reporter: String,
    /// Settings scoped to the framework's e2e testing mode
    pub e2e: E2eSettings,
    /// Environment variables passed through to the tests
    ///
    /// This won't capture all environment variables. Just the ones in
    /// [crate::env::PASS_THROUGH_ENV]. Variables unset in the process
    /// environment are absent from the map, which serialises the same way
    /// the framework treats an undefined value.
    pub env: HashMap<String, String>,
}

/// Settings scoped to the external framework's e2e testing mode.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct E2eSettings {
    /// Glob selecting which spec files to execute
    ///
    /// Fixed at [SPEC_PATTERN]. Evaluated by the external framework, never
    /// by us.
    #[serde(rename = "specPattern")]
    pub spec_pattern: String,
}

impl RunConfig {
    /// Create a run configuration carrying the given environment mapping
    ///
    /// Everything except `env` comes from the fixed constants.
    pub fn new(env: HashMap<String, String>) -> Self {
        Self {
            default_command_timeout_ms: DEFAULT_COMMAND_TIMEOUT_MS,
            request_timeout_ms: REQUEST_TIMEOUT_MS,
            reporter: REPORTER.to_string(),
            e2e: E2eSettings {
                spec_pattern: SPEC_PATTERN.to_string(),
            },
            env,
        }
    }

    /// Compute a fingerprint for this configuration
    ///
    /// The fingerprint is intended to uniquely identify the configuration
    /// used to drive a test session. It uses the
    ///     - Command and request timeouts
    ///     - Reporter identifier
    ///     - Spec pattern
    ///     - Pass-through environment entries
    ///
    /// The fingerprint is computed using [sha3::Sha3_256]. It is safe to
    /// log: the digest does not reveal the credential values that went into
    /// it.
    pub fn fingerprint(&self) -> String {
        let mut hasher = sha3::Sha3_256::new();
        Digest::update(&mut hasher, self.default_command_timeout_ms.to_le_bytes());
        Digest::update(&mut hasher, self.request_timeout_ms.to_le_bytes());
        Digest::update(&mut hasher, self.reporter.as_bytes());
        Digest::update(&mut hasher, self.e2e.spec_pattern.as_bytes());
        self.env
            .iter()
            .sorted_by_key(|(k, _)| k.to_owned())
            .for_each(|(k, v)| {
                Digest::update(&mut hasher, k.as_bytes());
                Digest::update(&mut hasher, v.as_bytes());
            });

        format!("{:x}", hasher.finalize())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(HashMap::with_capacity(0))
    }
}

/// Serialize the run configuration to a writer
pub fn store_run_config<W: Write>(run_config: &RunConfig, writer: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer(writer, run_config)?;
    Ok(())
}

/// Serialize the run configuration to a writer, pretty-printed
pub fn store_run_config_pretty<W: Write>(
    run_config: &RunConfig,
    writer: &mut W,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, run_config)?;
    Ok(())
}

/// Write the run configuration to a file
///
/// The file is truncated if it already exists. This is the file the
/// external framework reads at startup, so the serialised shape is the
/// framework's expected entry-point contract. A trailing newline is added
/// to keep the file friendly to line-based tooling.
pub fn write_run_config(run_config: &RunConfig, path: PathBuf) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)?;
    store_run_config_pretty(run_config, &mut file)?;
    let _ = file.write("\n".as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_env() -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("APP_URL".to_string(), "https://app.test".to_string());
        env.insert("AUTH0_CLIENT_ID".to_string(), "client-id".to_string());
        env
    }

    #[test]
    fn fixed_fields_come_from_constants() {
        let config = RunConfig::new(sample_env());

        assert_eq!(config.default_command_timeout_ms, 30_000);
        assert_eq!(config.request_timeout_ms, 300_000);
        assert_eq!(config.reporter, "cypress-mochawesome-reporter");
        assert_eq!(config.e2e.spec_pattern, "cypress/e2e/**/**/*.{js,jsx,ts,tsx}");
    }

    #[test]
    fn serialises_with_the_framework_field_names() {
        let config = RunConfig::new(sample_env());

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "defaultCommandTimeout": 30_000,
                "requestTimeout": 300_000,
                "reporter": "cypress-mochawesome-reporter",
                "e2e": {
                    "specPattern": "cypress/e2e/**/**/*.{js,jsx,ts,tsx}",
                },
                "env": {
                    "APP_URL": "https://app.test",
                    "AUTH0_CLIENT_ID": "client-id",
                },
            })
        );
    }

    #[test]
    fn unset_variables_are_absent_from_the_env_object() {
        let config = RunConfig::default();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["env"], serde_json::json!({}));
    }

    #[test]
    fn fingerprint_is_stable_for_equal_configurations() {
        let a = RunConfig::new(sample_env());
        let b = RunConfig::new(sample_env());

        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_changes_when_an_env_entry_changes() {
        let a = RunConfig::new(sample_env());

        let mut env = sample_env();
        env.insert("APP_URL".to_string(), "https://other.test".to_string());
        let b = RunConfig::new(env);

        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn writes_the_configuration_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.config.json");

        write_run_config(&RunConfig::new(sample_env()), path.clone()).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["reporter"], "cypress-mochawesome-reporter");
        assert_eq!(value["env"]["APP_URL"], "https://app.test");
    }
}
