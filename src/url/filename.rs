/// Extracts the filename (last path segment) from a URL
///
/// The segment after the last `/` is taken and cut at the first `?` or `#`,
/// whichever comes first. The result is empty when the URL ends with `/` or the
/// last segment holds only a query or fragment.
///
/// # Examples
///
/// ```
/// use site_mirror::url::get_filename_from_url;
///
/// assert_eq!(get_filename_from_url("http://example.com/p/index.html?12#t"), "index.html");
/// assert_eq!(get_filename_from_url("http://example.com/"), "");
/// assert_eq!(get_filename_from_url("index.html"), "index.html");
/// ```
pub fn get_filename_from_url(url: &str) -> &str {
    let segment = match url.rfind('/') {
        Some(index) => &url[index + 1..],
        None => url,
    };

    match segment.find(|c: char| c == '?' || c == '#') {
        Some(index) => &segment[..index],
        None => segment,
    }
}

/// Returns the fragment of a URL including its leading `#`, or an empty string
///
/// # Examples
///
/// ```
/// use site_mirror::url::get_hash_from_url;
///
/// assert_eq!(get_hash_from_url("page.html#hash"), "#hash");
/// assert_eq!(get_hash_from_url("page.html?a=b"), "");
/// ```
pub fn get_hash_from_url(url: &str) -> &str {
    match url.find('#') {
        Some(index) => &url[index..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_last_segment() {
        assert_eq!(
            get_filename_from_url("http://example.com/index.html"),
            "index.html"
        );
        assert_eq!(
            get_filename_from_url("http://example.com/p/a/t/h/index.html"),
            "index.html"
        );
    }

    #[test]
    fn test_filename_strips_query_and_fragment() {
        assert_eq!(
            get_filename_from_url("http://example.com/index.html?12"),
            "index.html"
        );
        assert_eq!(
            get_filename_from_url("http://example.com/index.html#t?12"),
            "index.html"
        );
        assert_eq!(
            get_filename_from_url("http://example.com/index.html?12#t"),
            "index.html"
        );
    }

    #[test]
    fn test_filename_empty_cases() {
        assert_eq!(get_filename_from_url("http://example.com/?12_jdlsk"), "");
        assert_eq!(get_filename_from_url("http://example.com/#index.html"), "");
        assert_eq!(get_filename_from_url("http://example.com/"), "");
        assert_eq!(get_filename_from_url(""), "");
    }

    #[test]
    fn test_filename_without_slash() {
        assert_eq!(get_filename_from_url("index.html"), "index.html");
        assert_eq!(get_filename_from_url("index.html?v=2"), "index.html");
    }

    #[test]
    fn test_hash_present() {
        assert_eq!(get_hash_from_url("#"), "#");
        assert_eq!(get_hash_from_url("#hash"), "#hash");
        assert_eq!(get_hash_from_url("page.html#hash"), "#hash");
        assert_eq!(
            get_hash_from_url("http://example.com/page.html#hash"),
            "#hash"
        );
    }

    #[test]
    fn test_hash_keeps_everything_after_first_marker() {
        assert_eq!(get_hash_from_url("page.html#a#b"), "#a#b");
        assert_eq!(get_hash_from_url("page.html?x=1#top"), "#top");
    }

    #[test]
    fn test_hash_absent() {
        assert_eq!(get_hash_from_url(""), "");
        assert_eq!(get_hash_from_url("page.html?a=b"), "");
        assert_eq!(get_hash_from_url("http://example.com/page.html?a=b"), "");
    }
}
