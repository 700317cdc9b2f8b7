use crate::{
    errors::FilesystemError,
    layout::PathSpec,
    scaffold::{ScaffoldSummary, Scaffolder},
};
use std::path::Path;

/// Creates the admin panel skeleton (`panel/app/...`) below `base`.
///
/// Directories that already exist are kept, and so are files, along with any content they
/// hold. Nothing is rolled back on failure; fix the cause and run again.
///
/// # Errors
///
/// Returns a [`FilesystemError`] if:
///
/// - A directory cannot be created, e.g. because a plain file is in the way.
/// - A placeholder file cannot be created, or a directory occupies its path.
/// - Permissions or disk space prevent a write.
pub fn create_app_directory_structure<P: AsRef<Path>>(
    base: P,
) -> Result<ScaffoldSummary, FilesystemError> {
    let scaffolder = Scaffolder::new(base);

    log::debug!(
        "Attempting to scaffold admin panel in: {}",
        scaffolder.base().display()
    );

    scaffolder.run(&PathSpec::admin_panel())
}
