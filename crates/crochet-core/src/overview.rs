//! Pattern Overview helpers
//!
//! Text and gallery shaping for the overview page.

use crate::model::{Image, PatternRecord, YarnRequirement};

/// Plain-language list of the yarn a pattern needs.
///
/// Requirements with a blank name are skipped.
pub fn yarn_sentence(yarn: &[YarnRequirement]) -> String {
    let parts: Vec<String> = yarn
        .iter()
        .filter(|y| !y.name.trim().is_empty())
        .map(|y| {
            let unit = if y.skeins == 1 { "skein" } else { "skeins" };
            format!("{} {} of {}", y.skeins, unit, y.name)
        })
        .collect();

    let listed = match parts.as_slice() {
        [] => return "You will need: nothing extra.".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    };
    format!("You will need: {}.", listed)
}

/// (label, value) rows of the details table, document order
pub fn detail_rows(pattern: &PatternRecord) -> Vec<(String, String)> {
    pattern
        .details
        .iter()
        .map(|(label, value)| (label.clone(), value.to_string()))
        .collect()
}

/// Gallery thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

/// Hero image first, then the gallery images, numbered from 1
pub fn gallery_thumbnails(pattern: &PatternRecord) -> Vec<Thumbnail> {
    std::iter::once(&pattern.hero_image)
        .chain(pattern.images.iter())
        .enumerate()
        .map(|(i, Image { src, alt })| Thumbnail {
            src: src.clone(),
            alt: format!("Item {}: {}", i + 1, alt),
        })
        .collect()
}
