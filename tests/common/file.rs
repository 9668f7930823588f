use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct DirectorySpec {
    pub path: PathBuf,
    pub files: Vec<FileSpec>,
    pub subdirs: Vec<DirectorySpec>,
}

impl DirectorySpec {
    /// Number of files and directories below this one.
    pub fn nested_entries(&self) -> usize {
        self.files.len()
            + self
                .subdirs
                .iter()
                .map(|subdir| 1 + subdir.nested_entries())
                .sum::<usize>()
    }
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_generated_directory(
    dir: &Path,
    files_count: usize,
    subdirs_count: usize,
    depth: usize,
) -> DirectorySpec {
    use fake::{Fake, faker::lorem::en::Word};

    let dir_path = dir.join(format!("dir_{}", Word().fake::<String>()));
    populate_directory(dir_path, files_count, subdirs_count, depth)
}

fn populate_directory(
    dir_path: PathBuf,
    files_count: usize,
    subdirs_count: usize,
    depth: usize,
) -> DirectorySpec {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    std::fs::create_dir_all(&dir_path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", dir_path, e));

    // index suffixes keep fake names from colliding
    let files = (0..files_count)
        .map(|i| {
            let file_name = format!("{}_{i}.txt", Word().fake::<String>());
            let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
            let file_spec = FileSpec::new(dir_path.join(file_name), file_content);
            write_file(file_spec.clone());
            file_spec
        })
        .collect::<Vec<_>>();

    let subdirs = if depth > 0 {
        (0..subdirs_count)
            .map(|i| {
                let subdir_path = dir_path.join(format!("{}_{i}", Word().fake::<String>()));
                populate_directory(subdir_path, files_count, subdirs_count, depth - 1)
            })
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    DirectorySpec::new(dir_path, files, subdirs)
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}

/// Every path below `root`, sorted, relative to it.
pub fn list_tree(root: &Path) -> Vec<PathBuf> {
    let mut paths = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(PathBuf::from))
        .collect::<Vec<_>>();
    paths.sort();
    paths
}
