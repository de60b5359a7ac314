#[cfg(test)]
mod tests {
    use log_time_to_tempo::api::jira::Project;
    use log_time_to_tempo::db::cache::{self, Cache, CachedIssue, ISSUES, PROJECTS};
    use log_time_to_tempo::libs::catalog::Catalog;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CacheTestContext {
        _temp_dir: TempDir,
        dir: PathBuf,
    }

    impl TestContext for CacheTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            CacheTestContext {
                dir: temp_dir.path().join("cache"),
                _temp_dir: temp_dir,
            }
        }
    }

    fn project(key: &str, name: &str) -> Project {
        Project {
            key: key.to_string(),
            name: name.to_string(),
        }
    }

    fn issue(key: &str, id: &str, summary: &str) -> CachedIssue {
        CachedIssue {
            key: key.to_string(),
            id: id.to_string(),
            summary: summary.to_string(),
        }
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_new_cache_is_cold(ctx: &mut CacheTestContext) {
        let cache = Cache::open(&ctx.dir).unwrap();
        assert!(!cache.is_warm().unwrap());
        assert!(cache.projects().unwrap().is_empty());
        assert_eq!(cache.updated_at(PROJECTS).unwrap(), None);
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_replace_projects_and_issues(ctx: &mut CacheTestContext) {
        let mut cache = Cache::open(&ctx.dir).unwrap();
        cache.replace_projects(&[project("TSI", "Internal"), project("ABC", "Customer")]).unwrap();
        assert!(!cache.is_warm().unwrap());

        cache.replace_issues(&[issue("TSI-7", "10007", "Admin"), issue("ABC-1", "10001", "Setup")]).unwrap();
        assert!(cache.is_warm().unwrap());
        assert!(cache.updated_at(ISSUES).unwrap().is_some());

        let keys: Vec<String> = cache.projects().unwrap().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["ABC", "TSI"]);
        assert_eq!(cache.issues().unwrap()[0], issue("ABC-1", "10001", "Setup"));
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_replace_drops_old_rows(ctx: &mut CacheTestContext) {
        let mut cache = Cache::open(&ctx.dir).unwrap();
        cache.replace_issues(&[issue("ABC-1", "1", "Old"), issue("ABC-2", "2", "Gone")]).unwrap();
        cache.replace_issues(&[issue("ABC-1", "1", "New")]).unwrap();

        assert_eq!(cache.issues().unwrap(), vec![issue("ABC-1", "1", "New")]);
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_cache_survives_reopen(ctx: &mut CacheTestContext) {
        {
            let mut cache = Cache::open(&ctx.dir).unwrap();
            cache.replace_projects(&[project("TSI", "Internal")]).unwrap();
            cache.replace_issues(&[issue("TSI-7", "10007", "Admin")]).unwrap();
        }
        let catalog = Catalog::new(&ctx.dir, true);
        assert!(catalog.is_warm());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_catalog_does_not_create_cache(ctx: &mut CacheTestContext) {
        let catalog = Catalog::new(&ctx.dir, true);
        assert!(!catalog.is_warm());
        assert!(!ctx.dir.exists());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_clear(ctx: &mut CacheTestContext) {
        Cache::open(&ctx.dir).unwrap();
        assert!(cache::clear(&ctx.dir).unwrap());
        assert!(!ctx.dir.exists());
        assert!(!cache::clear(&ctx.dir).unwrap());
    }
}
