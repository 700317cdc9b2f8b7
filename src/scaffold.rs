use crate::{
    errors::{FileOperation, FilesystemError},
    layout::{EntryKind, PathSpec},
};
use colored::Colorize;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// What a single filesystem step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Existed,
}

/// Tally of a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub directories_created: usize,
    pub directories_existing: usize,
    pub files_created: usize,
    pub files_existing: usize,
}
impl ScaffoldSummary {
    fn record(&mut self, kind: EntryKind, outcome: Outcome) {
        let counter = match (kind, outcome) {
            (EntryKind::Directory, Outcome::Created) => &mut self.directories_created,
            (EntryKind::Directory, Outcome::Existed) => &mut self.directories_existing,
            (EntryKind::File, Outcome::Created) => &mut self.files_created,
            (EntryKind::File, Outcome::Existed) => &mut self.files_existing,
        };

        *counter += 1;
    }
}
impl fmt::Display for ScaffoldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories and {} files created, {} already present",
            self.directories_created,
            self.files_created,
            self.directories_existing + self.files_existing
        )
    }
}

/// Materializes a [`PathSpec`] below a base directory.
///
/// Runs are not transactional: the first failing step aborts the run and everything
/// created before it stays on disk. Re-running is safe since existing directories and
/// files are left as they are.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    base: PathBuf,
}
impl Scaffolder {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Creates `path` and any missing ancestors.
    ///
    /// # Errors
    ///
    /// Returns a [`FilesystemError`] if a component of `path` exists as a non-directory or
    /// the directory cannot be created.
    pub fn ensure_directory(&self, path: &Path) -> Result<Outcome, FilesystemError> {
        if path.is_dir() {
            report(Outcome::Existed, path);

            return Ok(Outcome::Existed);
        }

        fs::create_dir_all(path)
            .map_err(|error| FilesystemError::new(FileOperation::Mkdir, path.into(), error))?;

        report(Outcome::Created, path);

        Ok(Outcome::Created)
    }

    /// Creates a zero-byte file at `path`. The parent directory must already exist.
    ///
    /// An existing regular file is left untouched, content included.
    ///
    /// # Errors
    ///
    /// Returns a [`FilesystemError`] if the parent is missing, something other than a regular
    /// file already occupies `path`, or the file cannot be created.
    pub fn create_empty_file(&self, path: &Path) -> Result<Outcome, FilesystemError> {
        let created = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path);

        match created {
            Ok(_) => {
                report(Outcome::Created, path);

                Ok(Outcome::Created)
            }
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                let is_file = fs::metadata(path)
                    .map_err(|error| {
                        FilesystemError::new(FileOperation::Create, path.into(), error)
                    })?
                    .is_file();

                if !is_file {
                    return Err(FilesystemError::new(
                        FileOperation::Create,
                        path.into(),
                        io::Error::new(
                            io::ErrorKind::AlreadyExists,
                            "path is occupied by something other than a regular file",
                        ),
                    ));
                }

                report(Outcome::Existed, path);

                Ok(Outcome::Existed)
            }
            Err(error) => Err(FilesystemError::new(
                FileOperation::Create,
                path.into(),
                error,
            )),
        }
    }

    /// Walks `spec` in order, creating each directory before the files it holds.
    ///
    /// # Errors
    ///
    /// Returns the first [`FilesystemError`] encountered; nothing after it is attempted.
    pub fn run(&self, spec: &PathSpec) -> Result<ScaffoldSummary, FilesystemError> {
        let mut summary = ScaffoldSummary::default();

        log::debug!("scaffolding below: {}", self.base.display());

        for entry in spec.entries() {
            let path = self.base.join(&entry.path);

            let outcome = match entry.kind {
                EntryKind::Directory => self.ensure_directory(&path)?,
                EntryKind::File => self.create_empty_file(&path)?,
            };

            summary.record(entry.kind, outcome);
        }

        log::debug!("{summary}");

        Ok(summary)
    }
}

fn report(outcome: Outcome, path: &Path) {
    let action = match outcome {
        Outcome::Created => "create".green(),
        Outcome::Existed => "exists".yellow(),
    };

    log::debug!("{:?}: {}", outcome, path.display());

    println!("{} {}", action, path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_directory_creates_missing_ancestors() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        let nested = tmp.path().join("a/b/c");

        assert_eq!(scaffolder.ensure_directory(&nested).unwrap(), Outcome::Created);
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_directory_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        let dir = tmp.path().join("app");

        scaffolder.ensure_directory(&dir).unwrap();

        assert_eq!(scaffolder.ensure_directory(&dir).unwrap(), Outcome::Existed);
    }

    #[test]
    fn ensure_directory_fails_over_a_plain_file() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        let blocker = tmp.path().join("app");
        fs::write(&blocker, "").unwrap();

        let error = scaffolder.ensure_directory(&blocker.join("api")).unwrap_err();

        assert_eq!(error.operation, FileOperation::Mkdir);
        assert_eq!(error.path, blocker.join("api"));
    }

    #[test]
    fn create_empty_file_requires_parent() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        let orphan = tmp.path().join("missing/page.tsx");

        let error = scaffolder.create_empty_file(&orphan).unwrap_err();

        assert_eq!(error.operation, FileOperation::Create);
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
        assert!(!tmp.path().join("missing").exists());
    }

    #[test]
    fn create_empty_file_preserves_existing_content() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        let page = tmp.path().join("page.tsx");
        fs::write(&page, "export default function Page() {}").unwrap();

        assert_eq!(scaffolder.create_empty_file(&page).unwrap(), Outcome::Existed);
        assert_eq!(
            fs::read_to_string(&page).unwrap(),
            "export default function Page() {}"
        );
    }

    #[test]
    fn create_empty_file_rejects_directory() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        let occupied = tmp.path().join("page.tsx");
        fs::create_dir(&occupied).unwrap();

        let error = scaffolder.create_empty_file(&occupied).unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn run_materializes_admin_panel() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());

        let summary = scaffolder.run(&PathSpec::admin_panel()).unwrap();

        assert_eq!(summary.directories_created, 21);
        assert_eq!(summary.files_created, 38);

        let users = tmp.path().join("panel/app/(dashboard)/users");
        for file in ["page.tsx", "loading.tsx"] {
            let metadata = fs::metadata(users.join(file)).unwrap();
            assert!(metadata.is_file());
            assert_eq!(metadata.len(), 0);
        }
        assert!(!tmp
            .path()
            .join("panel/app/(dashboard)/dashboard/loading.tsx")
            .exists());
    }

    #[test]
    fn second_run_only_finds_existing_entries() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        let spec = PathSpec::admin_panel();

        let first = scaffolder.run(&spec).unwrap();
        let second = scaffolder.run(&spec).unwrap();

        assert_eq!(
            second,
            ScaffoldSummary {
                directories_created: 0,
                directories_existing: first.directories_created,
                files_created: 0,
                files_existing: first.files_created,
            }
        );
    }

    #[test]
    fn run_stops_at_first_failure() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(tmp.path());
        fs::create_dir(tmp.path().join("panel")).unwrap();
        fs::write(tmp.path().join("panel/app"), "").unwrap();

        let error = scaffolder.run(&PathSpec::admin_panel()).unwrap_err();

        assert_eq!(error.operation, FileOperation::Mkdir);
        assert_eq!(error.path, tmp.path().join("panel/app"));
        assert_eq!(fs::read_dir(tmp.path().join("panel")).unwrap().count(), 1);
    }

    #[test]
    fn summary_display() {
        let summary = ScaffoldSummary {
            directories_created: 2,
            directories_existing: 1,
            files_created: 3,
            files_existing: 4,
        };

        assert_eq!(
            summary.to_string(),
            "2 directories and 3 files created, 5 already present"
        );
    }
}
