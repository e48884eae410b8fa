use crate::url::{is_protocol_relative, is_url};
use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves a reference found on a page into an absolute URL
///
/// # Resolution Rules
///
/// 1. Protocol-relative references (`//host/...`) take the scheme of `base` and are
///    then normalized, so `//host` becomes `scheme://host/`
/// 2. Absolute references (`http://`, `https://`) are normalized and `base` is ignored
/// 3. Anything else is site-relative: it is appended to the origin of `base`, dropping
///    the path, query and fragment of `base`
///
/// # Arguments
///
/// * `base` - URL of the page the reference was found on
/// * `reference` - The raw reference as written in the page
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(UrlError::InvalidBaseUrl)` - `base` has no recognizable scheme and host
///
/// # Examples
///
/// ```
/// use site_mirror::url::get_url;
///
/// let url = get_url("http://google.com/qwe/qwe/qwe", "/path").unwrap();
/// assert_eq!(url, "http://google.com/path");
///
/// let url = get_url("https://my.site.com", "//cdn.com/library.js").unwrap();
/// assert_eq!(url, "https://cdn.com/library.js");
/// ```
pub fn get_url(base: &str, reference: &str) -> UrlResult<String> {
    let base_url = parse_base(base)?;

    if is_protocol_relative(reference) {
        let absolute = format!("{}:{}", base_url.scheme(), reference);
        return Ok(normalize(&absolute));
    }

    if is_url(reference) {
        return Ok(normalize(reference));
    }

    let origin = origin_of(&base_url);
    if reference.starts_with('/') {
        Ok(format!("{}{}", origin, reference))
    } else {
        Ok(format!("{}/{}", origin, reference))
    }
}

/// Returns the origin (scheme and host, plus any non-default port) of a URL
///
/// # Examples
///
/// ```
/// use site_mirror::url::get_origin;
///
/// let origin = get_origin("http://google.com:8080/a/b?c=d#e").unwrap();
/// assert_eq!(origin, "http://google.com:8080");
/// ```
pub fn get_origin(url: &str) -> UrlResult<String> {
    parse_base(url).map(|parsed| origin_of(&parsed))
}

/// Parses a base URL, rejecting anything without a host
fn parse_base(base: &str) -> UrlResult<Url> {
    let url = Url::parse(base).map_err(|e| UrlError::InvalidBaseUrl(format!("{}: {}", base, e)))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::InvalidBaseUrl(format!("{}: missing host", base))),
    }
}

fn origin_of(url: &Url) -> String {
    // parse_base guarantees a host
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    }
}

/// Applies standard URL normalization, keeping the reference as-is when it cannot be parsed
fn normalize(reference: &str) -> String {
    match Url::parse(reference) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::debug!("Keeping unparseable reference {} as-is: {}", reference, e);
            reference.to_string()
        }
    }
}
