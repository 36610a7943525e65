#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates every `relative` file (and its parent directories) under a fresh
/// temporary directory.
pub fn build_tree(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for relative in files {
        let path = temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"# fixture").unwrap();
    }
    temp_dir
}

pub fn expected_paths(root: &Path, files: &[&str]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = files.iter().map(|f| root.join(f)).collect();
    paths.sort();
    paths
}

pub fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths
}
