// SPDX-License-Identifier: MPL-2.0
//! Local script library.
//!
//! The library is a plain directory of text files. Scanning lists the
//! prompter scripts it contains, importing copies a file chosen elsewhere on
//! disk into the directory, and deleting removes one. This is the app's only
//! storage layer; the player itself never touches the file system.

use crate::app::config::SortOrder;
use crate::domain::transcript;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extensions recognized as prompter scripts.
const SCRIPT_EXTENSIONS: &[&str] = &["txt", "md", "text"];

/// One script file in the library listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub path: PathBuf,
    pub title: String,
    pub modified: Option<SystemTime>,
}

/// Returns whether a path looks like a script file.
fn is_script_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SCRIPT_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Lists the script files in `dir`, sorted per `sort_order`.
///
/// A missing directory is treated as an empty library, not an error; the
/// directory is created lazily on first import.
pub fn scan(dir: &Path, sort_order: SortOrder) -> Result<Vec<ScriptEntry>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_script_file(&path) {
            continue;
        }
        let modified = entry.metadata().ok().and_then(|meta| meta.modified().ok());
        entries.push(ScriptEntry {
            title: transcript::title_for(&path),
            path,
            modified,
        });
    }

    sort_entries(&mut entries, sort_order);
    Ok(entries)
}

fn sort_entries(entries: &mut [ScriptEntry], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            entries.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortOrder::ModifiedDate => {
            // Newest first; unknown timestamps sink to the bottom.
            entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        }
    }
}

/// Copies `source` into the library directory, creating it if needed.
///
/// Returns the path of the imported script. A name collision gets a numeric
/// suffix rather than overwriting the existing script.
pub fn import(source: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| Error::Io(format!("not a file: {}", source.display())))?;

    fs::create_dir_all(dir)?;

    let mut destination = dir.join(file_name);
    let mut counter = 1;
    while destination.exists() {
        let stem = transcript::title_for(source);
        let extension = source
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("txt");
        destination = dir.join(format!("{} ({}).{}", stem, counter, extension));
        counter += 1;
    }

    fs::copy(source, &destination)?;
    Ok(destination)
}

/// Removes a script file from the library.
pub fn delete(path: &Path) -> Result<()> {
    fs::remove_file(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::File::create(&path)
            .expect("create script")
            .write_all(content.as_bytes())
            .expect("write script");
        path
    }

    #[test]
    fn scan_lists_only_script_files() {
        let dir = tempdir().expect("temp dir");
        write_script(dir.path(), "b.txt", "two");
        write_script(dir.path(), "a.md", "one");
        write_script(dir.path(), "photo.png", "binary");
        fs::create_dir(dir.path().join("nested.txt")).expect("decoy dir");

        let entries = scan(dir.path(), SortOrder::Alphabetical).expect("scan");
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn scan_missing_directory_is_empty() {
        let dir = tempdir().expect("temp dir");
        let entries = scan(&dir.path().join("nowhere"), SortOrder::Alphabetical).expect("scan");
        assert!(entries.is_empty());
    }

    #[test]
    fn scan_sorts_alphabetically_case_insensitive() {
        let dir = tempdir().expect("temp dir");
        write_script(dir.path(), "Zebra.txt", "");
        write_script(dir.path(), "apple.txt", "");
        write_script(dir.path(), "Mango.txt", "");

        let entries = scan(dir.path(), SortOrder::Alphabetical).expect("scan");
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn scan_sorts_by_modified_date_newest_first() {
        let dir = tempdir().expect("temp dir");
        let old = write_script(dir.path(), "old.txt", "");
        let new = write_script(dir.path(), "new.txt", "");

        // Ensure distinct timestamps regardless of filesystem resolution.
        let past = SystemTime::now() - std::time::Duration::from_secs(3600);
        let file = fs::File::open(&old).expect("open");
        file.set_modified(past).expect("set mtime");

        let entries = scan(dir.path(), SortOrder::ModifiedDate).expect("scan");
        assert_eq!(entries[0].path, new);
        assert_eq!(entries[1].path, old);
    }

    #[test]
    fn import_copies_into_library() {
        let source_dir = tempdir().expect("temp dir");
        let library_dir = tempdir().expect("temp dir");
        let source = write_script(source_dir.path(), "speech.txt", "hello");

        let imported = import(&source, library_dir.path()).expect("import");
        assert!(imported.exists());
        assert_eq!(fs::read_to_string(&imported).expect("read"), "hello");
        // Source is untouched.
        assert!(source.exists());
    }

    #[test]
    fn import_creates_missing_library_dir() {
        let source_dir = tempdir().expect("temp dir");
        let root = tempdir().expect("temp dir");
        let library = root.path().join("scripts");
        let source = write_script(source_dir.path(), "talk.txt", "x");

        let imported = import(&source, &library).expect("import");
        assert!(imported.starts_with(&library));
    }

    #[test]
    fn import_does_not_overwrite_existing() {
        let source_dir = tempdir().expect("temp dir");
        let library_dir = tempdir().expect("temp dir");
        let source = write_script(source_dir.path(), "speech.txt", "new");
        write_script(library_dir.path(), "speech.txt", "old");

        let imported = import(&source, library_dir.path()).expect("import");
        assert_eq!(imported.file_name().unwrap(), "speech (1).txt");
        assert_eq!(
            fs::read_to_string(library_dir.path().join("speech.txt")).expect("read"),
            "old"
        );
    }

    #[test]
    fn delete_removes_the_file() {
        let dir = tempdir().expect("temp dir");
        let path = write_script(dir.path(), "gone.txt", "");

        delete(&path).expect("delete");
        assert!(!path.exists());
    }

    #[test]
    fn delete_missing_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        assert!(delete(&dir.path().join("absent.txt")).is_err());
    }
}
