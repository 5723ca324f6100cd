//! Path helpers shared by layout resolution and filesystem adapters.

use std::path::{Component, Path, PathBuf};

/// Placeholder the wrapper expands to its own directory at runtime.
pub const BASE_TOKEN: &str = "%BASE%";

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) => {
                ret.push(component.as_os_str());
            }
            Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}

/// Resolve `path` against `base` when relative, then normalize.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { normalize_path(path) } else { normalize_path(&base.join(path)) }
}

/// Interpret a Windows-style path string on the host OS.
///
/// Descriptor values use `\`; on non-Windows hosts those are turned into `/`
/// so the directory created on disk mirrors what the wrapper will see.
pub fn host_path(raw: &str) -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(raw)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from(raw.replace('\\', "/"))
    }
}

/// Whether `raw` contains the `%BASE%` token (ASCII case-insensitive).
pub fn contains_base_token(raw: &str) -> bool {
    raw.to_ascii_lowercase().contains(&BASE_TOKEN.to_ascii_lowercase())
}

/// Replace every `%BASE%` token (ASCII case-insensitive) with `replacement`.
pub fn substitute_base_token(raw: &str, replacement: &str) -> String {
    let needle = BASE_TOKEN.to_ascii_lowercase();
    let haystack = raw.to_ascii_lowercase();
    let mut out = String::with_capacity(raw.len() + replacement.len());
    let mut cursor = 0;
    while let Some(offset) = haystack[cursor..].find(&needle) {
        let start = cursor + offset;
        out.push_str(&raw[cursor..start]);
        out.push_str(replacement);
        cursor = start + needle.len();
    }
    out.push_str(&raw[cursor..]);
    out
}
