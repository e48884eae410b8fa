/// Converts a filesystem path to forward-slash form
///
/// Every backslash becomes a forward slash. Nothing else is touched: drive letters,
/// case and redundant separators are preserved.
///
/// # Examples
///
/// ```
/// use site_mirror::url::get_unix_path;
///
/// assert_eq!(get_unix_path("D:\\Projects\\mirror"), "D:/Projects/mirror");
/// assert_eq!(get_unix_path("/home/user/mirror"), "/home/user/mirror");
/// ```
pub fn get_unix_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Computes the relative path from the directory containing `from_path` to `to_path`
///
/// Both paths are interpreted with POSIX semantics on every platform and the result
/// always uses forward slashes. Leading directories shared by both paths are elided and
/// every remaining directory of `from_path` contributes one `../`.
///
/// When exactly one of the two paths is absolute there is no common root to walk
/// from, so `to_path` is returned in forward-slash form.
///
/// # Examples
///
/// ```
/// use site_mirror::url::get_relative_path;
///
/// assert_eq!(get_relative_path("css/1.css", "css/2.css"), "2.css");
/// assert_eq!(get_relative_path("css/1.css", "img/1.png"), "../img/1.png");
/// assert_eq!(get_relative_path("index.html", "img/1.png"), "img/1.png");
/// ```
pub fn get_relative_path(from_path: &str, to_path: &str) -> String {
    let from = get_unix_path(from_path);
    let to = get_unix_path(to_path);

    let (from_absolute, from_parts) = components(parent_dir(&from));
    let (to_absolute, to_parts) = components(&to);

    if from_absolute != to_absolute {
        return to;
    }

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = vec![".."; from_parts.len() - common];
    segments.extend_from_slice(&to_parts[common..]);
    segments.join("/")
}

/// Returns the directory portion of a forward-slash path (`""` when there is none)
fn parent_dir(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(index) => &trimmed[..index],
        None if path.starts_with('/') => "/",
        None => "",
    }
}

/// Splits a path into normalized segments, resolving `.` and `..` lexically
fn components(path: &str) -> (bool, Vec<&str>) {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => match parts.last().copied() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                // Cannot climb above the root
                _ if absolute => {}
                _ => parts.push(".."),
            },
            _ => parts.push(segment),
        }
    }

    (absolute, parts)
}
