use uuid::Uuid;

use crate::models::slide::SlideDescriptor;

/// Spreads `text` across the first `slide_count` slides, two lines per slide.
///
/// Lines are trimmed and blank lines dropped. Line `2i` becomes the headline of
/// slide `i` and line `2i + 1` its subheadline; missing lines clear the field.
/// Slides that do not exist yet are created blank. Slides past `slide_count`
/// are returned untouched.
pub fn distribute_text(
    text: &str,
    slide_count: usize,
    slides: &[SlideDescriptor],
) -> Vec<SlideDescriptor> {
    let normalized = text.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut out = slides.to_vec();
    for i in 0..slide_count {
        if i >= out.len() {
            out.push(SlideDescriptor::blank(Uuid::new_v4().to_string()));
        }
        let slide = &mut out[i];
        slide.headline = lines.get(i * 2).map(|l| l.to_string()).unwrap_or_default();
        slide.subheadline = lines
            .get(i * 2 + 1)
            .map(|l| l.to_string())
            .unwrap_or_default();
    }
    out
}

/// Renders slides back into the two-lines-per-slide text form.
pub fn slides_to_text(slides: &[SlideDescriptor]) -> String {
    slides
        .iter()
        .map(|s| format!("{}\n{}", s.headline, s.subheadline).trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
