#[cfg(test)]
mod tests {
    use crate::config::{
        ConfigBuilder, ConfigError, ConfigLoader, LogFormat, LogLevel, ScrollbackConfig,
        validation,
    };
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = ScrollbackConfig::default();
        assert_eq!(config.scoring.exact_match_score, 10);
        assert_eq!(config.scoring.supporting_term_score, 3);
        assert_eq!(config.scoring.word_match_score, 2);
        assert_eq!(config.scan.max_projects_search, 30);
        assert_eq!(config.scan.max_files_per_project_search, 15);
        assert!(!config.scan.expand_worktrees);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.paths.claude_root.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_claude_root("/tmp/claude")
            .with_search_limits(3, 4)
            .with_concurrency(2)
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Json)
            .build()
            .unwrap();

        assert_eq!(config.paths.claude_root, Some(PathBuf::from("/tmp/claude")));
        assert_eq!(config.scan.max_projects_search, 3);
        assert_eq!(config.scan.max_files_per_project_search, 4);
        assert_eq!(config.scan.concurrency, 2);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_resolve_claude_root() {
        let config = ConfigBuilder::new().with_claude_root("/srv/claude").build().unwrap();
        assert_eq!(
            config.paths.resolve_claude_root(),
            PathBuf::from("/srv/claude")
        );

        let default = ScrollbackConfig::default();
        assert!(default.paths.resolve_claude_root().ends_with(".claude"));
    }

    #[test]
    fn test_validation() {
        let config = ScrollbackConfig::default();
        assert!(validation::validate_config(&config).is_ok());

        let zero_cap = ConfigBuilder::new().with_search_limits(0, 15).build();
        assert!(matches!(zero_cap, Err(ConfigError::ValidationError(_))));

        let zero_concurrency = ConfigBuilder::new().with_concurrency(0).build();
        assert!(zero_concurrency.is_err());

        let bad_pattern = ConfigBuilder::new().with_core_term_pattern("(unclosed").build();
        assert!(matches!(bad_pattern, Err(ConfigError::InvalidPattern(_))));

        let empty_root = ConfigBuilder::new().with_claude_root("").build();
        assert!(empty_root.is_err());
    }

    #[test]
    fn test_testing_preset() {
        let config = ConfigBuilder::testing().build().unwrap();
        assert_eq!(config.logging.level, LogLevel::Error);
        assert_eq!(config.scan.max_projects_search, 5);
        assert_eq!(config.scan.concurrency, 2);
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrollback.toml");
        std::fs::write(
            &path,
            r#"
[scoring]
exact_match_score = 12
generic_terms = ["widget"]

[scan]
max_projects_search = 7

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.scoring.exact_match_score, 12);
        assert_eq!(config.scoring.generic_terms, vec!["widget".to_string()]);
        // untouched keys keep their defaults
        assert_eq!(config.scoring.word_match_score, 2);
        assert_eq!(config.scan.max_projects_search, 7);
        assert_eq!(config.scan.max_files_per_project_search, 15);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_load_missing_and_unsupported_files() {
        let mut loader = ConfigLoader::new();
        assert!(matches!(
            loader.load_file("/definitely/not/here.toml"),
            Err(ConfigError::FileLoadError(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "x=1").unwrap();
        assert!(loader.load_file(&path).is_err());

        // loader still usable after a failed load
        assert!(loader.extract().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected_on_extract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrollback.json");
        std::fs::write(&path, r#"{ "scoring": { "majority_ratio": 1.5 } }"#).unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        assert!(matches!(
            loader.extract(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_claude_root("/tmp/claude")
            .with_generic_terms(["gadget"])
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScrollbackConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.paths, deserialized.paths);
        assert_eq!(config.scan, deserialized.scan);
        assert!(deserialized.scoring.generic_terms.contains(&"gadget".to_string()));
    }
}
