use std::{
    collections::HashSet,
    fmt,
};

pub const IMAGE_NOT_FOUND: &str = "Image Not Found";

/// Synthetic identity of one displayed image on a page, e.g. `photo-0` or
/// `fea-shaft`. Keys only need to be unique within a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageKey(String);

impl ImageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePresentation<'a> {
    Image { src: &'a str, alt: &'a str },
    Placeholder { alt: &'a str },
}

/// Which images on the page failed to load. A failure only ever affects its
/// own key.
#[derive(Debug, Clone, Default)]
pub struct ImageLoadState {
    broken: HashSet<ImageKey>,
}

impl ImageLoadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_broken(&mut self, key: ImageKey) {
        self.broken.insert(key);
    }

    pub fn is_broken(&self, key: &ImageKey) -> bool {
        self.broken.contains(key)
    }

    pub fn presentation<'a>(&self, key: &ImageKey, src: &'a str, alt: &'a str) -> ImagePresentation<'a> {
        if self.is_broken(key) {
            ImagePresentation::Placeholder { alt }
        } else {
            ImagePresentation::Image { src, alt }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_local_to_one_key() {
        let mut state = ImageLoadState::new();
        let first = ImageKey::indexed("photo", 0);
        let second = ImageKey::indexed("photo", 1);

        state.mark_broken(first.clone());

        assert_eq!(
            state.presentation(&first, "/a.png", "A"),
            ImagePresentation::Placeholder { alt: "A" }
        );
        assert_eq!(
            state.presentation(&second, "/b.png", "B"),
            ImagePresentation::Image { src: "/b.png", alt: "B" }
        );
    }

    #[test]
    fn indexed_keys_format_like_named_keys() {
        assert_eq!(ImageKey::indexed("cad", 2).as_str(), "cad-2");
        assert_eq!(ImageKey::new("fea-shaft").to_string(), "fea-shaft");
    }
}
