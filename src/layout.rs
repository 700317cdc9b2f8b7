use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Root of the generated admin panel, relative to the scaffold base.
pub const APP_ROOT: &str = "panel/app";

const APP_FILES: &[&str] = &[
    "layout.tsx",
    "page.tsx",
    "loading.tsx",
    "error.tsx",
    "not-found.tsx",
    "globals.css",
];

const API_ROUTES: &[&str] = &["auth", "upload"];

const AUTH_PAGES: &[&str] = &["login", "forgot-password", "reset-password"];

// `dashboard` itself only gets a page; every other section also gets a loading state.
const DASHBOARD_SECTIONS: &[&str] = &[
    "users",
    "posts",
    "comments",
    "stories",
    "groups",
    "messages",
    "reports",
    "media",
    "analytics",
    "moderation",
    "notifications",
    "settings",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A single directory or file to be materialized, relative to the scaffold base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Ordered table of directories and the empty files each one holds.
///
/// Directories are kept in insertion order, so a table built ancestors-first is walked
/// ancestors-first. Each directory's files keep their insertion order and are unique.
#[derive(Debug, Clone, Default)]
pub struct PathSpec {
    directories: IndexMap<PathBuf, Vec<String>>,
}
impl PathSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `directory` with the given files. Adding a directory that is already present
    /// merges the file lists instead of moving it.
    pub fn directory<P: AsRef<Path>>(mut self, directory: P, files: &[&str]) -> Self {
        let entry = self
            .directories
            .entry(directory.as_ref().to_path_buf())
            .or_default();

        for file in files {
            if !entry.iter().any(|existing| existing == file) {
                entry.push((*file).to_string());
            }
        }

        self
    }

    /// Flattens the table: each directory followed by the files inside it.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::new();

        for (directory, files) in &self.directories {
            entries.push(Entry {
                path: directory.clone(),
                kind: EntryKind::Directory,
            });

            entries.extend(files.iter().map(|file| Entry {
                path: directory.join(file),
                kind: EntryKind::File,
            }));
        }

        entries
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// The Next.js app-router skeleton of the admin panel.
    pub fn admin_panel() -> Self {
        let app = Path::new(APP_ROOT);
        let api = app.join("api");
        let auth = app.join("(auth)");
        let dashboard = app.join("(dashboard)");

        let mut spec = PathSpec::new().directory(app, APP_FILES);

        for route in API_ROUTES {
            spec = spec.directory(api.join(route), &["route.ts"]);
        }

        spec = spec.directory(&auth, &["layout.tsx"]);
        for page in AUTH_PAGES {
            spec = spec.directory(auth.join(page), &["page.tsx"]);
        }

        spec = spec
            .directory(&dashboard, &["layout.tsx"])
            .directory(dashboard.join("dashboard"), &["page.tsx"]);
        for section in DASHBOARD_SECTIONS {
            spec = spec.directory(dashboard.join(section), &["page.tsx", "loading.tsx"]);
        }

        spec
    }
}
