//! Image URL resolution against the catalog's CDN.

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const PLACEHOLDER: &str = "https://via.placeholder.com/500x750?text=No+Image";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    #[default]
    W500,
    Original,
}

impl ImageSize {
    fn token(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Resolves a relative image path returned by the catalog to a full CDN URL.
/// A missing path resolves to a fixed placeholder image.
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    match path {
        Some(p) if !p.is_empty() => format!("{IMAGE_BASE}/{}{p}", size.token()),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_cdn_base() {
        assert_eq!(
            image_url(Some("/poster.jpg"), ImageSize::W500),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
        assert_eq!(
            image_url(Some("/backdrop.jpg"), ImageSize::Original),
            "https://image.tmdb.org/t/p/original/backdrop.jpg"
        );
    }

    #[test]
    fn missing_path_falls_back_to_placeholder() {
        assert_eq!(image_url(None, ImageSize::W500), PLACEHOLDER);
        assert_eq!(image_url(Some(""), ImageSize::Original), PLACEHOLDER);
    }
}
