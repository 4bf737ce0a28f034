//! Image assignment from the uploaded pool.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::slide::SlideDescriptor;

/// Placeholder image for slide `index` when neither the pool nor a previous
/// slide supplies one. Stable per index.
pub fn placeholder_image(index: usize) -> String {
    format!("https://picsum.photos/seed/{}/1080/1350", 100 + index)
}

/// Returns one image reference per slide.
///
/// With a non-empty pool, independently shuffled full copies of the pool are
/// concatenated until there are enough entries, so every image appears once
/// per pass before any repeats. With an empty pool, each slide keeps the image
/// of the previous slide at the same index or falls back to a placeholder.
pub fn assign_images<R: Rng + ?Sized>(
    slide_count: usize,
    pool: &[String],
    existing: &[SlideDescriptor],
    rng: &mut R,
) -> Vec<String> {
    if pool.is_empty() {
        return (0..slide_count)
            .map(|i| {
                existing
                    .get(i)
                    .and_then(|s| s.image.clone())
                    .unwrap_or_else(|| placeholder_image(i))
            })
            .collect();
    }

    let mut sequence: Vec<String> = Vec::with_capacity(slide_count + pool.len());
    while sequence.len() < slide_count {
        let mut pass = pool.to_vec();
        pass.shuffle(rng);
        sequence.extend(pass);
    }
    sequence.truncate(slide_count);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pool_of_three_over_ten_slides_is_fair() {
        let pool = pool(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let images = assign_images(10, &pool, &[], &mut rng);
            assert_eq!(images.len(), 10);
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for img in &images {
                *counts.entry(img.as_str()).or_default() += 1;
            }
            assert_eq!(counts.len(), 3);
            for (img, n) in counts {
                assert!(n == 3 || n == 4, "{img} used {n} times");
            }
        }
    }

    #[test]
    fn test_each_pass_is_a_permutation() {
        let pool = pool(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(12);
        let images = assign_images(8, &pool, &[], &mut rng);
        for pass in images.chunks(4) {
            let mut sorted = pass.to_vec();
            sorted.sort();
            assert_eq!(sorted, pool);
        }
    }

    #[test]
    fn test_pool_larger_than_batch_has_no_repeats() {
        let pool = pool(&["a", "b", "c", "d", "e"]);
        let mut rng = StdRng::seed_from_u64(13);
        let mut images = assign_images(3, &pool, &[], &mut rng);
        images.sort();
        images.dedup();
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_empty_pool_keeps_previous_or_placeholder() {
        let mut previous = SlideDescriptor::blank("x".to_string());
        previous.image = Some("data:image/png;base64,AAAA".to_string());
        let mut rng = StdRng::seed_from_u64(14);
        let images = assign_images(3, &[], &[previous], &mut rng);
        assert_eq!(images[0], "data:image/png;base64,AAAA");
        assert_eq!(images[1], "https://picsum.photos/seed/101/1080/1350");
        assert_eq!(images[2], "https://picsum.photos/seed/102/1080/1350");
    }

    #[test]
    fn test_zero_slides_with_pool() {
        let mut rng = StdRng::seed_from_u64(15);
        assert!(assign_images(0, &pool(&["a"]), &[], &mut rng).is_empty());
    }
}
