use crate::error::SearchError;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
pub const EXCLUDED_DIRS: [&str; 4] = [".git", "node_modules", "__pycache__", "nlpEnv"];

/// Prefix of the lock files word processors leave next to open documents.
pub const TRANSIENT_FILE_PREFIX: &str = "~$";

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.iter().any(|excluded| *excluded == name))
}

/// Whether a file name qualifies for a search over `extension`.
pub fn is_candidate_name(file_name: &str, extension: &str) -> bool {
    file_name.ends_with(extension) && !file_name.starts_with(TRANSIENT_FILE_PREFIX)
}

/// Files under `root` whose names end with `extension`, in filesystem order.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, SearchError> {
    if !root.is_dir() {
        return Err(SearchError::InvalidArgument(format!(
            "not a directory: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable directory entry");
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if is_candidate_name(&file_name, extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        let mut names = files
            .iter()
            .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
            .map(str::to_string)
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    #[test]
    fn discovery_is_recursive_and_filters_by_suffix() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let nested = dir.path().join("nested").join("deeper");
        fs::create_dir_all(&nested)?;
        fs::write(dir.path().join("a.txt"), "a")?;
        fs::write(nested.join("b.txt"), "b")?;
        fs::write(nested.join("c.md"), "c")?;
        fs::write(dir.path().join("d.TXT"), "d")?;

        let files = discover_files(dir.path(), ".txt")?;
        assert_eq!(names(&files), vec!["a.txt", "b.txt"]);
        Ok(())
    }

    #[test]
    fn excluded_directories_are_never_entered() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        for excluded in EXCLUDED_DIRS {
            let path = dir.path().join("project").join(excluded);
            fs::create_dir_all(&path)?;
            fs::write(path.join("hidden.txt"), "fox")?;
        }
        fs::write(dir.path().join("project").join("visible.txt"), "fox")?;

        let files = discover_files(dir.path(), ".txt")?;
        assert_eq!(names(&files), vec!["visible.txt"]);
        Ok(())
    }

    #[test]
    fn excluded_name_as_root_is_still_searched() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let root = dir.path().join("node_modules");
        fs::create_dir(&root)?;
        fs::write(root.join("readme.txt"), "fox")?;

        assert_eq!(discover_files(&root, ".txt")?.len(), 1);
        Ok(())
    }

    #[test]
    fn transient_files_are_excluded() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("~$report.docx"), "lock")?;
        fs::write(dir.path().join("report.docx"), "doc")?;

        let files = discover_files(dir.path(), ".docx")?;
        assert_eq!(names(&files), vec!["report.docx"]);
        assert!(!is_candidate_name("~$notes.txt", ".txt"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_searched() -> Result<(), Box<dyn std::error::Error>> {
        let outside = tempdir()?;
        let target = outside.path().join("real.txt");
        fs::write(&target, "fox")?;

        let dir = tempdir()?;
        std::os::unix::fs::symlink(&target, dir.path().join("link.txt"))?;
        std::os::unix::fs::symlink(outside.path().join("gone.txt"), dir.path().join("dangling.txt"))?;

        let files = discover_files(dir.path(), ".txt")?;
        assert_eq!(names(&files), vec!["link.txt"]);
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_file_names_are_still_matched() -> Result<(), Box<dyn std::error::Error>> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir()?;
        let name = OsStr::from_bytes(b"caf\xe9 notes.txt");
        fs::write(dir.path().join(name), "fox")?;

        let files = discover_files(dir.path(), ".txt")?;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), Some(name));
        Ok(())
    }

    #[test]
    fn missing_root_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let result = discover_files(&dir.path().join("absent"), ".txt");
        assert!(matches!(result, Err(SearchError::InvalidArgument(_))));
        Ok(())
    }
}
