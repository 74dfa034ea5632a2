//! Classification of bot reply text.

use once_cell::sync::Lazy;
use regex::Regex;

// Full-match image URL: http(s) scheme, an image file extension, optional
// query string. Anchored at both ends so prose containing a URL stays text.
static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://\S+\.(?:png|jpe?g|gif|webp|svg)(?:\?\S*)?$")
        .expect("image url pattern")
});

/// If the trimmed reply is an image-file URL, return that exact URL.
pub fn image_url(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    IMAGE_URL.is_match(trimmed).then_some(trimmed)
}
