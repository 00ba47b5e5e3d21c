//! Resolve media URLs returned by the CMS.

/// Turn a media `url` into something a browser can load.
///
/// Absolute URLs (cloud storage providers) pass through. Relative upload
/// paths are served from the CMS origin, which is the API base URL without
/// its `/api` segment.
///
/// ```
/// use pazarin_core::image::resolve_image_url;
///
/// assert_eq!(
///     resolve_image_url("http://cms.local:1337/api", "/uploads/soap.png"),
///     "http://cms.local:1337/uploads/soap.png"
/// );
/// ```
pub fn resolve_image_url(cms_base_url: &str, url: &str) -> String {
    if url.contains("http") {
        return url.to_string();
    }
    format!("{}{url}", cms_origin(cms_base_url))
}

/// CMS base URL with the first `/api` segment removed and no trailing slash.
pub fn cms_origin(cms_base_url: &str) -> String {
    cms_base_url
        .trim_end_matches('/')
        .replacen("/api", "", 1)
}
