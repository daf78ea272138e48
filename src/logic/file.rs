//! File type detection and utilities
//!
//! Pure functions for identifying the image files offered for upload.

/// Check if a file path represents an image file based on extension
///
/// Supported formats: PNG, JPG/JPEG, GIF, BMP, WEBP, TIFF/TIF
///
/// # Examples
/// ```
/// use photogrid::logic::file::is_image_file;
///
/// assert!(is_image_file("photo.jpg"));
/// assert!(is_image_file("image.PNG"));  // Case insensitive
/// assert!(is_image_file("/path/to/pic.webp"));
/// assert!(!is_image_file("document.pdf"));
/// ```
pub fn is_image_file(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.ends_with(".png")
        || path_lower.ends_with(".jpg")
        || path_lower.ends_with(".jpeg")
        || path_lower.ends_with(".gif")
        || path_lower.ends_with(".bmp")
        || path_lower.ends_with(".webp")
        || path_lower.ends_with(".tiff")
        || path_lower.ends_with(".tif")
}

/// MIME type sent with the multipart `file` part
///
/// Unknown extensions fall back to `application/octet-stream`, the same
/// thing a browser sends for a file it can't identify.
///
/// # Examples
/// ```
/// use photogrid::logic::file::mime_type_for;
///
/// assert_eq!(mime_type_for("cat.JPG"), "image/jpeg");
/// assert_eq!(mime_type_for("notes.txt"), "application/octet-stream");
/// ```
pub fn mime_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    let extension = lower.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Expand a leading `~/` in a path typed into the upload form
pub fn expand_home(path: &str) -> String {
    let trimmed = path.trim();
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    trimmed.to_string()
}
