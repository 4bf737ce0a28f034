use tracing::info;

/// Uploaded image references (URLs or data URIs). Session-scoped, never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct ImagePool {
    images: Vec<String>,
}

impl ImagePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends images in order. Blank references are skipped.
    pub fn add(&mut self, images: impl IntoIterator<Item = String>) -> usize {
        let before = self.images.len();
        self.images
            .extend(images.into_iter().filter(|i| !i.trim().is_empty()));
        let added = self.images.len() - before;
        info!("Image pool: added {added}, now {}", self.images.len());
        added
    }

    /// Removes the first occurrence of `image`. Returns whether one was found.
    pub fn remove(&mut self, image: &str) -> bool {
        match self.images.iter().position(|i| i == image) {
            Some(idx) => {
                self.images.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn list(&self) -> Vec<String> {
        self.images.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut pool = ImagePool::new();
        let added = pool.add(vec!["a".into(), "b".into(), "a".into(), "  ".into()]);
        assert_eq!(added, 3);
        assert_eq!(pool.list(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut pool = ImagePool::new();
        pool.add(vec!["a".into(), "b".into(), "a".into()]);
        assert!(pool.remove("a"));
        assert_eq!(pool.list(), vec!["b", "a"]);
        assert!(!pool.remove("zzz"));
    }

    #[test]
    fn test_clear() {
        let mut pool = ImagePool::new();
        pool.add(vec!["a".into()]);
        pool.clear();
        assert!(pool.list().is_empty());
    }
}
