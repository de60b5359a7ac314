use crate::api::jira::{JiraIssue, Project};
use crate::db::db::Db;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::Path;

const SCHEMA_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    key TEXT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL
);";
const SCHEMA_ISSUES: &str = "CREATE TABLE IF NOT EXISTS issues (
    key TEXT NOT NULL PRIMARY KEY,
    id TEXT NOT NULL,
    summary TEXT NOT NULL
);";
const SCHEMA_CACHE_META: &str = "CREATE TABLE IF NOT EXISTS cache_meta (
    name TEXT NOT NULL PRIMARY KEY,
    updated_at TIMESTAMP NOT NULL
);";
const DELETE_PROJECTS: &str = "DELETE FROM projects";
const INSERT_PROJECT: &str = "INSERT OR REPLACE INTO projects (key, name) VALUES (?1, ?2)";
const SELECT_PROJECTS: &str = "SELECT key, name FROM projects ORDER BY key";
const DELETE_ISSUES: &str = "DELETE FROM issues";
const INSERT_ISSUE: &str = "INSERT OR REPLACE INTO issues (key, id, summary) VALUES (?1, ?2, ?3)";
const SELECT_ISSUES: &str = "SELECT key, id, summary FROM issues ORDER BY key";
const UPSERT_META: &str = "INSERT OR REPLACE INTO cache_meta (name, updated_at) VALUES (?1, ?2)";
const SELECT_META: &str = "SELECT updated_at FROM cache_meta WHERE name = ?1";

pub const PROJECTS: &str = "projects";
pub const ISSUES: &str = "issues";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedIssue {
    pub key: String,
    pub id: String,
    pub summary: String,
}

impl From<&JiraIssue> for CachedIssue {
    fn from(issue: &JiraIssue) -> Self {
        Self {
            key: issue.key.clone(),
            id: issue.id.clone(),
            summary: issue.fields.summary.clone(),
        }
    }
}

/// Local copy of the Jira projects and issues.
pub struct Cache {
    conn: Connection,
}

impl Cache {
    pub fn open(dir: &Path) -> Result<Self> {
        Self::from_db(Db::open(dir)?)
    }

    fn from_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_PROJECTS, [])?;
        db.conn.execute(SCHEMA_ISSUES, [])?;
        db.conn.execute(SCHEMA_CACHE_META, [])?;
        Ok(Cache { conn: db.conn })
    }

    /// Replaces all cached projects.
    pub fn replace_projects(&mut self, projects: &[Project]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_PROJECTS, [])?;
        for project in projects {
            tx.execute(INSERT_PROJECT, params![project.key, project.name])?;
        }
        tx.execute(UPSERT_META, params![PROJECTS, Local::now().naive_local()])?;
        tx.commit()?;
        Ok(())
    }

    pub fn projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(SELECT_PROJECTS)?;
        let project_iter = stmt.query_map([], |row| {
            Ok(Project {
                key: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }
        Ok(projects)
    }

    /// Replaces all cached issues.
    pub fn replace_issues(&mut self, issues: &[CachedIssue]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ISSUES, [])?;
        for issue in issues {
            tx.execute(INSERT_ISSUE, params![issue.key, issue.id, issue.summary])?;
        }
        tx.execute(UPSERT_META, params![ISSUES, Local::now().naive_local()])?;
        tx.commit()?;
        Ok(())
    }

    pub fn issues(&self) -> Result<Vec<CachedIssue>> {
        let mut stmt = self.conn.prepare(SELECT_ISSUES)?;
        let issue_iter = stmt.query_map([], |row| {
            Ok(CachedIssue {
                key: row.get(0)?,
                id: row.get(1)?,
                summary: row.get(2)?,
            })
        })?;
        let mut issues = Vec::new();
        for issue in issue_iter {
            issues.push(issue?);
        }
        Ok(issues)
    }

    /// When `table` (`projects` or `issues`) was last refreshed.
    pub fn updated_at(&self, table: &str) -> Result<Option<NaiveDateTime>> {
        Ok(self.conn.query_row(SELECT_META, [table], |row| row.get(0)).optional()?)
    }

    /// Both projects and issues have been fetched at least once.
    pub fn is_warm(&self) -> Result<bool> {
        Ok(self.updated_at(PROJECTS)?.is_some() && self.updated_at(ISSUES)?.is_some())
    }
}

/// Deletes the cache directory. Returns `false` if there was none.
pub fn clear(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(dir)?;
    Ok(true)
}
