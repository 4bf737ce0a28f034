//! Batch planner: turns the current configuration into a fresh slide list.
//!
//! Order of random draws is fixed (layouts, tiers, presets, images, ids), so a
//! seeded generator reproduces a batch exactly.

use rand::Rng;
use tracing::debug;
use uuid::Builder;

use crate::models::preset::Preset;
use crate::models::signature::SignaturePositions;
use crate::models::slide::{LayoutType, Position, SlideDescriptor};
use crate::planner::images::assign_images;
use crate::planner::tiers::assign_tiers;
use crate::planner::{PlanRequest, PlanTuning};

/// Placeholder headline for 1-based slide number `n`.
pub fn placeholder_headline(n: usize) -> String {
    format!("Slide {n} title")
}

/// Placeholder subheadline for 1-based slide number `n`.
pub fn placeholder_subheadline(n: usize) -> String {
    format!("Supporting text for slide {n}")
}

/// Plans `request.slide_count` slides.
///
/// The cover (index 0) is always `full-bg` on the primary tier. Every other
/// slide draws a layout from all five variants, may reuse a saved preset's
/// geometry, and keeps the id and texts of the previous slide at its index.
pub fn plan<R: Rng + ?Sized>(
    request: &PlanRequest<'_>,
    tuning: &PlanTuning,
    rng: &mut R,
) -> Vec<SlideDescriptor> {
    let count = request.slide_count;

    // 1. Layouts
    let mut layouts: Vec<LayoutType> = (0..count)
        .map(|i| {
            if i == 0 {
                LayoutType::FullBg
            } else {
                LayoutType::ALL[rng.random_range(0..LayoutType::ALL.len())]
            }
        })
        .collect();

    // 2. Tiers
    let tiers = assign_tiers(count, tuning.double_secondary_probability, rng);

    // 3. Presets (never on the cover)
    let presets: Vec<&Preset> = request.presets.iter().flatten().collect();
    let mut applied: Vec<Option<&Preset>> = vec![None; count];
    if !presets.is_empty() {
        for i in 1..count {
            if rng.random_bool(tuning.preset_apply_probability) {
                let preset = presets[rng.random_range(0..presets.len())];
                layouts[i] = preset.layout;
                applied[i] = Some(preset);
            }
        }
    }

    // 4. Images
    let images = assign_images(count, request.image_pool, request.existing_slides, rng);

    // 5. Ids and text carryover
    let slides: Vec<SlideDescriptor> = (0..count)
        .map(|i| {
            let previous = request.existing_slides.get(i);
            let id = previous
                .map(|s| s.id.clone())
                .unwrap_or_else(|| fresh_id(rng));
            let headline = previous
                .map(|s| s.headline.clone())
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| placeholder_headline(i + 1));
            let subheadline = previous
                .map(|s| s.subheadline.clone())
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| placeholder_subheadline(i + 1));

            let mut slide = SlideDescriptor {
                id,
                headline,
                subheadline,
                layout: layouts[i],
                image: Some(images[i].clone()),
                background_tier: tiers[i],
                headline_position: Position::ORIGIN,
                subheadline_position: Position::ORIGIN,
                image_position: Position::ORIGIN,
                signature_positions: SignaturePositions::default(),
            };
            if let Some(preset) = applied[i] {
                preset.apply_to(&mut slide);
            }
            slide
        })
        .collect();

    debug!(
        "Planned {} slides: non-primary at {:?}, presets applied to {:?}",
        count,
        tiers
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_primary())
            .map(|(i, t)| (i, request.background.color_for(*t)))
            .collect::<Vec<_>>(),
        applied
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|_| i))
            .collect::<Vec<_>>()
    );

    slides
}

/// Random v4 UUID drawn from the planner's generator.
fn fresh_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
