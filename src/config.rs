// config.rs

use std::path::PathBuf;

pub const DEFAULT_HISTORY_FILE: &str = "calculation_history.csv";
pub const DEFAULT_ENVIRONMENT: &str = "TESTING";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Settings snapshot taken once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub history_file: PathBuf,
    pub environment: String,
    /// Directory holding `application.log`.
    pub log_dir: PathBuf,
    /// `RUST_LOG` directives; replaces the default levels of both log sinks.
    pub log_filter: Option<String>,
    /// Set by `TEST_MODE=true`; logging stays off.
    pub test_mode: bool,
}

impl Settings {
    /// Loads `.env` (if any) into the process environment, then snapshots it.
    /// Variables already set in the environment win over the file.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            history_file: get("HISTORY_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE)),
            environment: get("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            log_dir: get("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            log_filter: get("RUST_LOG"),
            test_mode: get("TEST_MODE").is_some_and(|v| v.eq_ignore_ascii_case("true")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]);
        assert_eq!(s.history_file, PathBuf::from("calculation_history.csv"));
        assert_eq!(s.environment, "TESTING");
        assert_eq!(s.log_dir, PathBuf::from("logs"));
        assert_eq!(s.log_filter, None);
        assert!(!s.test_mode);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("HISTORY_FILE_PATH", "/tmp/h.csv"),
            ("ENVIRONMENT", "PRODUCTION"),
            ("TEST_MODE", "TRUE"),
            ("LOG_DIR", "/var/log/calc"),
            ("RUST_LOG", "calc_repl=trace"),
        ]);
        assert_eq!(s.history_file, PathBuf::from("/tmp/h.csv"));
        assert_eq!(s.environment, "PRODUCTION");
        assert_eq!(s.log_dir, PathBuf::from("/var/log/calc"));
        assert_eq!(s.log_filter.as_deref(), Some("calc_repl=trace"));
        assert!(s.test_mode);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let s = settings(&[("HISTORY_FILE_PATH", "  "), ("TEST_MODE", "no")]);
        assert_eq!(s.history_file, PathBuf::from(DEFAULT_HISTORY_FILE));
        assert!(!s.test_mode);
    }

    #[test]
    fn reads_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# calculator settings\nHISTORY_FILE_PATH=data/history.csv\nENVIRONMENT=\"DEVELOPMENT\"\n",
        )
        .unwrap();
        let map: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        let s = Settings::from_lookup(|key| map.get(key).cloned());
        assert_eq!(s.history_file, PathBuf::from("data/history.csv"));
        assert_eq!(s.environment, "DEVELOPMENT");
        assert!(!s.test_mode);
    }
}
