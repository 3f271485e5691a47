/// Utility functions for image URL manipulation
use std::borrow::Cow;

/// Converts NASA library thumbnail URLs to the medium-size rendition
///
/// Search results link to `~thumb.jpg` previews. The same asset directory holds a
/// `~medium.jpg` rendition that is better suited for the detail view. URLs that do
/// not contain `~thumb.` are returned unchanged.
///
/// # Examples
///
/// ```
/// use avail_search_ui::utils::to_medium_image_url;
///
/// let thumb = "https://images-assets.nasa.gov/image/as11-40-5874/as11-40-5874~thumb.jpg";
/// assert_eq!(
///     to_medium_image_url(thumb),
///     "https://images-assets.nasa.gov/image/as11-40-5874/as11-40-5874~medium.jpg"
/// );
///
/// let other_url = "https://example.com/image.png";
/// assert_eq!(to_medium_image_url(other_url), other_url);
/// ```
pub fn to_medium_image_url(url: &str) -> Cow<'_, str> {
    if url.contains("~thumb.") {
        Cow::Owned(url.replace("~thumb.", "~medium."))
    } else {
        Cow::Borrowed(url)
    }
}

/// Public page for an asset on images.nasa.gov.
pub fn details_page_url(nasa_id: &str) -> String {
    format!("https://images.nasa.gov/details/{nasa_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_medium_image_url_with_thumb() {
        let input = "https://images-assets.nasa.gov/image/KSC-69PC-442/KSC-69PC-442~thumb.jpg";
        let expected = "https://images-assets.nasa.gov/image/KSC-69PC-442/KSC-69PC-442~medium.jpg";
        assert_eq!(to_medium_image_url(input), expected);
    }

    #[test]
    fn test_to_medium_image_url_png_thumb() {
        let input = "https://images-assets.nasa.gov/image/PIA00001/PIA00001~thumb.png";
        assert!(to_medium_image_url(input).ends_with("PIA00001~medium.png"));
    }

    #[test]
    fn test_to_medium_image_url_without_thumb() {
        let input = "https://images-assets.nasa.gov/image/x/x~orig.jpg";
        assert_eq!(to_medium_image_url(input), input);
    }

    #[test]
    fn test_to_medium_image_url_empty_string() {
        assert_eq!(to_medium_image_url(""), "");
    }

    #[test]
    fn test_details_page_url() {
        assert_eq!(
            details_page_url("as11-40-5874"),
            "https://images.nasa.gov/details/as11-40-5874"
        );
    }
}
