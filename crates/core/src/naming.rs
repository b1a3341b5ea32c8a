//! Filename conventions for generated animation assets.
//!
//! The rendering script writes its output under the content directory using
//! a sanitized form of the submitted topic, so both sides must agree on the
//! sanitization rules.

/// Convert a submitted math topic into a filesystem-safe base name.
///
/// Lowercases the topic and replaces spaces, path separators, and colons
/// with underscores. The result never contains a path separator, so it is
/// safe to join onto a content root.
///
/// # Examples
///
/// ```
/// use mathmotion_core::naming::safe_topic_name;
///
/// assert_eq!(safe_topic_name("Pythagorean Theorem"), "pythagorean_theorem");
/// assert_eq!(safe_topic_name("L2/L1 norms"), "l2_l1_norms");
/// assert_eq!(safe_topic_name("limits: intro"), "limits__intro");
/// ```
pub fn safe_topic_name(topic: &str) -> String {
    topic
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' => '_',
            other => other,
        })
        .collect()
}

/// Expected output filename for a topic's rendered video.
///
/// ```
/// use mathmotion_core::naming::video_filename;
///
/// assert_eq!(video_filename("Vector Addition"), "vector_addition_animation.mp4");
/// ```
pub fn video_filename(topic: &str) -> String {
    format!("{}_animation.mp4", safe_topic_name(topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_separators() {
        assert_eq!(safe_topic_name("a/b\\c:d e"), "a_b_c_d_e");
    }

    #[test]
    fn already_safe_topic_is_unchanged() {
        assert_eq!(safe_topic_name("eigenvalues"), "eigenvalues");
    }

    #[test]
    fn video_filename_appends_suffix() {
        assert_eq!(video_filename("recursion"), "recursion_animation.mp4");
    }
}
