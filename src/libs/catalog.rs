//! Projects and issues, served from the local cache when possible.

use crate::api::jira::{Jira, Project};
use crate::db::cache::{self, Cache, CachedIssue};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct Catalog {
    cache_dir: PathBuf,
    use_cache: bool,
}

impl Catalog {
    pub fn new(cache_dir: impl Into<PathBuf>, use_cache: bool) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            use_cache,
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn uses_cache(&self) -> bool {
        self.use_cache
    }

    fn cache(&self) -> Result<Cache> {
        Cache::open(&self.cache_dir)
    }

    /// Whether both projects and issues are cached. Never creates the cache.
    pub fn is_warm(&self) -> bool {
        self.cache_dir.exists() && self.cache().and_then(|c| c.is_warm()).unwrap_or(false)
    }

    pub async fn update_projects(&self, jira: &Jira) -> Result<Vec<Project>> {
        let projects = jira.projects().await?;
        self.cache()?.replace_projects(&projects)?;
        Ok(projects)
    }

    pub async fn update_issues(&self, jira: &Jira) -> Result<Vec<CachedIssue>> {
        let issues: Vec<CachedIssue> = jira.all_issues().await?.iter().map(CachedIssue::from).collect();
        self.cache()?.replace_issues(&issues)?;
        Ok(issues)
    }

    pub async fn projects(&self, jira: &Jira) -> Result<Vec<Project>> {
        if !self.use_cache {
            return Ok(jira.projects().await?);
        }
        let cache = self.cache()?;
        if cache.updated_at(cache::PROJECTS)?.is_some() {
            return cache.projects();
        }
        self.update_projects(jira).await
    }

    pub async fn all_issues(&self, jira: &Jira) -> Result<Vec<CachedIssue>> {
        if !self.use_cache {
            return Ok(jira.all_issues().await?.iter().map(CachedIssue::from).collect());
        }
        let cache = self.cache()?;
        if cache.updated_at(cache::ISSUES)?.is_some() {
            return cache.issues();
        }
        self.update_issues(jira).await
    }
}
