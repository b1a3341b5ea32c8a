//! Playback URL derivation for stored video paths.
//!
//! Video records store a filesystem-relative path that may contain the
//! directory layout of whichever machine rendered the asset. The gallery
//! serves files by filename only, so the playable URL is always the final
//! path segment appended to the static content prefix. This assumes
//! filenames are unique across content roots and deliberately discards any
//! directory structure recorded in the path.

/// URL prefix under which video content is served.
pub const CONTENT_URL_PREFIX: &str = "/videos-content";

/// Derive the servable URL for a stored video path.
///
/// Takes the final segment of `stored_path` (split on both `/` and `\`)
/// and appends it to `prefix`.
///
/// # Examples
///
/// ```
/// use mathmotion_core::video_paths::{playback_url, CONTENT_URL_PREFIX};
///
/// assert_eq!(
///     playback_url("backend/manim/content/videos_dir/recursion.mp4", CONTENT_URL_PREFIX),
///     "/videos-content/recursion.mp4"
/// );
/// assert_eq!(playback_url("plain.mp4", CONTENT_URL_PREFIX), "/videos-content/plain.mp4");
/// ```
pub fn playback_url(stored_path: &str, prefix: &str) -> String {
    let file_name = stored_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(stored_path);
    format!("{prefix}/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_final_segment() {
        assert_eq!(
            playback_url("a/b/c/video.mp4", CONTENT_URL_PREFIX),
            "/videos-content/video.mp4"
        );
    }

    #[test]
    fn handles_backslash_paths() {
        assert_eq!(
            playback_url("content\\videos_dir\\clip.mp4", CONTENT_URL_PREFIX),
            "/videos-content/clip.mp4"
        );
    }

    #[test]
    fn bare_filename_passes_through() {
        assert_eq!(
            playback_url("clip.mp4", CONTENT_URL_PREFIX),
            "/videos-content/clip.mp4"
        );
    }
}
