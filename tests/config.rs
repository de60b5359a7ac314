#[cfg(test)]
mod tests {
    use log_time_to_tempo::commands::config::{get_value, unset_all, unset_value};
    use log_time_to_tempo::libs::config::{Config, ConfigOption, DotenvFile, Scope, CONFIG_FILE_NAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        system: PathBuf,
        project: PathBuf,
        nested: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let app_dir = temp_dir.path().join("app");
            let project = temp_dir.path().join("project");
            let nested = project.join("src").join("deeper");
            fs::create_dir_all(&app_dir).unwrap();
            fs::create_dir_all(&nested).unwrap();

            ConfigTestContext {
                system: app_dir.join(CONFIG_FILE_NAME),
                project,
                nested,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_set_and_get_value(ctx: &mut ConfigTestContext) {
        let file = DotenvFile::new(&ctx.system);
        assert!(!file.exists());
        assert_eq!(file.get("LT_LOG_ISSUE").unwrap(), None);

        file.set("LT_LOG_ISSUE", "ABC-1").unwrap();
        assert_eq!(fs::read_to_string(&ctx.system).unwrap(), "LT_LOG_ISSUE='ABC-1'\n");
        assert_eq!(file.get("LT_LOG_ISSUE").unwrap().as_deref(), Some("ABC-1"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_set_replaces_existing_key(ctx: &mut ConfigTestContext) {
        let file = DotenvFile::new(&ctx.system);
        file.set("LT_LOG_START", "9").unwrap();
        file.set("LT_LOG_START", "8:30").unwrap();

        let content = fs::read_to_string(&ctx.system).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert_eq!(file.get("LT_LOG_START").unwrap().as_deref(), Some("8:30"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_value_with_single_quote(ctx: &mut ConfigTestContext) {
        let file = DotenvFile::new(&ctx.system);
        file.set("LT_LOG_MESSAGE", "it's done").unwrap();
        assert_eq!(file.get("LT_LOG_MESSAGE").unwrap().as_deref(), Some("it's done"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_set_preserves_other_lines(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.system, "# written by hand\nexport JIRA_USER='jdoe'\n").unwrap();
        let file = DotenvFile::new(&ctx.system);

        file.set("LT_LOG_START", "8").unwrap();
        file.set("JIRA_USER", "jane").unwrap();

        let content = fs::read_to_string(&ctx.system).unwrap();
        assert!(content.starts_with("# written by hand\n"));
        assert_eq!(content.matches("JIRA_USER").count(), 1);
        assert_eq!(file.get("JIRA_USER").unwrap().as_deref(), Some("jane"));
        assert_eq!(file.get("LT_LOG_START").unwrap().as_deref(), Some("8"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset(ctx: &mut ConfigTestContext) {
        let file = DotenvFile::new(&ctx.system);
        file.set("JIRA_USER", "jdoe").unwrap();
        file.set("LT_LOG_ISSUE", "ABC-1").unwrap();

        assert!(file.unset("JIRA_USER").unwrap());
        assert!(!file.unset("JIRA_USER").unwrap());
        assert_eq!(file.get("JIRA_USER").unwrap(), None);
        assert_eq!(file.get("LT_LOG_ISSUE").unwrap().as_deref(), Some("ABC-1"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete(ctx: &mut ConfigTestContext) {
        let file = DotenvFile::new(&ctx.system);
        file.delete().unwrap();
        file.set("JIRA_USER", "jdoe").unwrap();
        file.delete().unwrap();
        assert!(!ctx.system.exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_local_file_found_in_ancestor(ctx: &mut ConfigTestContext) {
        let local = ctx.project.join(CONFIG_FILE_NAME);
        fs::write(&local, "LT_LOG_ISSUE='ABC-1'\n").unwrap();

        let config = Config::with_paths(&ctx.system, &ctx.nested);
        assert_eq!(config.local_path(), Some(local.as_path()));
        assert_eq!(config.files(Scope::Both), vec![local.clone(), ctx.system.clone()]);
        assert_eq!(config.files(Scope::Local), vec![local]);
        assert_eq!(config.files(Scope::System), vec![ctx.system.clone()]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_without_local_file(ctx: &mut ConfigTestContext) {
        let config = Config::with_paths(&ctx.system, &ctx.nested);
        assert_eq!(config.local_path(), None);
        assert_eq!(config.files(Scope::Both), vec![ctx.system.clone()]);
        assert_eq!(config.files(Scope::Local), vec![ctx.nested.join(CONFIG_FILE_NAME)]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_merged_prefers_local(ctx: &mut ConfigTestContext) {
        let local = ctx.project.join(CONFIG_FILE_NAME);
        DotenvFile::new(&local).set("JIRA_USER", "local").unwrap();
        DotenvFile::new(&ctx.system).set("JIRA_USER", "system").unwrap();
        DotenvFile::new(&ctx.system).set("LT_LOG_START", "8").unwrap();

        let config = Config::with_paths(&ctx.system, &ctx.project);
        let merged = Config::merged(&config.files(Scope::Both)).unwrap();
        assert_eq!(merged["JIRA_USER"], "local");
        assert_eq!(merged["LT_LOG_START"], "8");

        let system_only = Config::merged(&config.files(Scope::System)).unwrap();
        assert_eq!(system_only["JIRA_USER"], "system");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_set_targets_scope(ctx: &mut ConfigTestContext) {
        let local = ctx.project.join(CONFIG_FILE_NAME);
        fs::write(&local, "").unwrap();
        let config = Config::with_paths(&ctx.system, &ctx.project);

        let written = config.set(Scope::System, ConfigOption::LtLogIssue, "ABC-2").unwrap();
        assert_eq!(written, ctx.system);

        let written = config.set(Scope::Both, ConfigOption::JiraUser, "jdoe").unwrap();
        assert_eq!(written, local);
        assert_eq!(DotenvFile::new(&local).get("JIRA_USER").unwrap().as_deref(), Some("jdoe"));
        assert_eq!(DotenvFile::new(&ctx.system).get("JIRA_USER").unwrap(), None);
    }

    #[test]
    fn test_config_option_parsing() {
        assert_eq!("jira_user".parse::<ConfigOption>().unwrap(), ConfigOption::JiraUser);
        assert_eq!("LT_LOG_DURATION".parse::<ConfigOption>().unwrap(), ConfigOption::LtLogDuration);
        assert_eq!(ConfigOption::LtLogIssue.to_string(), "LT_LOG_ISSUE");

        let error = "JIRA_PASSWORD".parse::<ConfigOption>().unwrap_err();
        assert!(error.contains("'JIRA_PASSWORD' is not a valid configuration option"));
        assert!(error.contains("'JIRA_INSTANCE'"));
        assert!(error.contains("'LT_LOG_MESSAGE'"));
    }

    /// Local file with an issue and a start, system file with an issue.
    fn layered_files(ctx: &ConfigTestContext) -> Vec<PathBuf> {
        let local = ctx.project.join(CONFIG_FILE_NAME);
        DotenvFile::new(&local).set("LT_LOG_ISSUE", "LOCAL-1").unwrap();
        DotenvFile::new(&local).set("LT_LOG_START", "8").unwrap();
        DotenvFile::new(&ctx.system).set("LT_LOG_ISSUE", "SYSTEM-1").unwrap();
        vec![local, ctx.system.clone()]
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_get_value_from_first_file_that_has_it(ctx: &mut ConfigTestContext) {
        let files = layered_files(ctx);

        let (path, value) = get_value(&files, ConfigOption::LtLogIssue).unwrap().unwrap();
        assert_eq!(path, files[0]);
        assert_eq!(value, "LOCAL-1");

        DotenvFile::new(&files[0]).unset("LT_LOG_ISSUE").unwrap();
        let (path, value) = get_value(&files, ConfigOption::LtLogIssue).unwrap().unwrap();
        assert_eq!(path, ctx.system);
        assert_eq!(value, "SYSTEM-1");

        assert_eq!(get_value(&files, ConfigOption::JiraUser).unwrap(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_value_leaves_system_file_intact(ctx: &mut ConfigTestContext) {
        let files = layered_files(ctx);

        let removed_from = unset_value(&files, ConfigOption::LtLogIssue).unwrap();
        assert_eq!(removed_from, Some(files[0].clone()));
        assert_eq!(DotenvFile::new(&files[0]).get("LT_LOG_ISSUE").unwrap(), None);
        assert_eq!(DotenvFile::new(&files[0]).get("LT_LOG_START").unwrap().as_deref(), Some("8"));
        assert_eq!(DotenvFile::new(&ctx.system).get("LT_LOG_ISSUE").unwrap().as_deref(), Some("SYSTEM-1"));

        assert_eq!(unset_value(&files, ConfigOption::JiraUser).unwrap(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_all_forced_deletes_existing_files(ctx: &mut ConfigTestContext) {
        let files = layered_files(ctx);
        let missing = ctx.nested.join(CONFIG_FILE_NAME);
        let selected = vec![files[0].clone(), missing.clone(), files[1].clone()];

        unset_all(&selected, true).unwrap();
        assert!(!files[0].exists());
        assert!(!files[1].exists());
        assert!(!missing.exists());
    }
}
