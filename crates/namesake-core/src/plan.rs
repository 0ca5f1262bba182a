//! Target path planning for a file rename

use std::path::{Path, PathBuf};

use crate::sanitize::sanitize_file_name;

/// A fully computed rename: where the file is and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Target file name including the preserved extension.
    pub file_name: String,
}

/// Compute the target path for renaming `current` after `symbol`.
///
/// The target keeps the source file's directory and extension; only the stem
/// comes from the (sanitized) symbol. A dot inside the symbol produces a
/// compound extension, which is accepted as-is.
pub fn plan_rename(current: &Path, symbol: &str) -> RenamePlan {
    let sanitized = sanitize_file_name(symbol);
    let extension = current
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let file_name = format!("{sanitized}{extension}");
    let target = match current.parent() {
        Some(dir) => dir.join(&file_name),
        None => PathBuf::from(&file_name),
    };

    RenamePlan {
        source: current.to_path_buf(),
        target,
        file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/a/b/old.ts", "Foo Bar", "/a/b/Foo Bar.ts", "Foo Bar.ts")]
    #[case("/x/y/old.py", "a:b", "/x/y/a_b.py", "a_b.py")]
    #[case("/srv/data/report", "summary", "/srv/data/summary", "summary")]
    fn computes_directory_plus_symbol_plus_extension(
        #[case] current: &str,
        #[case] symbol: &str,
        #[case] target: &str,
        #[case] file_name: &str,
    ) {
        let plan = plan_rename(Path::new(current), symbol);
        assert_eq!(plan.target, PathBuf::from(target));
        assert_eq!(plan.file_name, file_name);
        assert_eq!(plan.source, PathBuf::from(current));
    }

    #[test]
    fn dotted_symbol_yields_a_compound_extension() {
        let plan = plan_rename(Path::new("/a/old.ts"), "config.prod");
        assert_eq!(plan.target, PathBuf::from("/a/config.prod.ts"));
    }

    #[test]
    fn renaming_to_the_current_stem_targets_the_same_path() {
        let plan = plan_rename(Path::new("/a/b/same.rs"), "same");
        assert_eq!(plan.source, plan.target);
    }
}
