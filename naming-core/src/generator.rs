//! Ad-set and ad-level string generation.

use crate::join::join;
use crate::layout::{Layout, Slot};
use crate::normalize::{normalize, replace_comma_space};
use crate::record::{FieldRecord, GeneratedPair, Mode};

/// Delimiter between slots in both output strings.
pub const SLOT_DELIMITER: &str = "_";

/// Generate both naming strings for `record` under `mode`.
///
/// Pure: the same record and mode always produce the same pair.
pub fn generate(record: &FieldRecord, mode: Mode) -> GeneratedPair {
    let layout = Layout::for_mode(mode);
    let pair = GeneratedPair {
        ad_set: ad_set(layout, record),
        ad_level: ad_level(layout, record),
    };

    log::debug!(
        "Generated {} names from {} field(s): ad set {} chars, ad level {} chars",
        mode,
        record.len(),
        pair.ad_set.len(),
        pair.ad_level.len()
    );

    pair
}

/// Ad-set and ad-level names for a video asset.
pub fn generate_video_outputs(record: &FieldRecord) -> GeneratedPair {
    generate(record, Mode::Video)
}

/// Ad-set and ad-level names for a static image or carousel asset.
pub fn generate_static_outputs(record: &FieldRecord) -> GeneratedPair {
    generate(record, Mode::Static)
}

fn render(slots: &[Slot], record: &FieldRecord) -> Vec<String> {
    slots.iter().map(|slot| slot.render(record)).collect()
}

fn ad_set(layout: &Layout, record: &FieldRecord) -> String {
    join(
        SLOT_DELIMITER,
        render(layout.ad_set, record),
        layout.ad_set_normalizer,
    )
}

fn ad_level(layout: &Layout, record: &FieldRecord) -> String {
    let joined = join(SLOT_DELIMITER, render(layout.ad_level, record), normalize);
    // Applied to the joined string, not per field
    replace_comma_space(&joined)
}
