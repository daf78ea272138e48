//! Card image fallback
//!
//! A card's image is first loaded from the API. If that fails, the
//! configured placeholder file is tried exactly once. A failing placeholder
//! is terminal.

/// Where a card's image is being loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// `{base}/{id}/image`
    Remote,
    /// Local placeholder file from the config
    Placeholder,
}

/// Source to try after `failed` could not be loaded, if any
///
/// # Examples
/// ```
/// use photogrid::logic::image::{next_source, ImageSource};
///
/// assert_eq!(next_source(ImageSource::Remote, true), Some(ImageSource::Placeholder));
/// assert_eq!(next_source(ImageSource::Remote, false), None);
/// // A failed placeholder never re-triggers the substitution
/// assert_eq!(next_source(ImageSource::Placeholder, true), None);
/// ```
pub fn next_source(failed: ImageSource, placeholder_configured: bool) -> Option<ImageSource> {
    match failed {
        ImageSource::Remote if placeholder_configured => Some(ImageSource::Placeholder),
        ImageSource::Remote => None,
        ImageSource::Placeholder => None,
    }
}

/// Images larger than this in either dimension are scaled down before
/// building the terminal protocol
pub fn downscale_target(font_size: (u16, u16)) -> (u32, u32) {
    // Cards are at most ~40 cells wide and ~20 cells tall; keep 1.25x headroom
    let max_width = 40 * font_size.0 as u32 * 5 / 4;
    let max_height = 20 * font_size.1 as u32 * 5 / 4;
    (max_width.max(1), max_height.max(1))
}
