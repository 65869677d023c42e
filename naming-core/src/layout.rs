//! Per-mode field orderings.
//!
//! Each mode is two ordered slot tables plus the normalizer its ad-set string
//! uses. The generator walks these tables; nothing else encodes field order.

use crate::normalize::{Normalizer, normalize, normalize_static_ad_set, normalize_video_ad_set};
use crate::record::{Field, FieldRecord, Mode};
use crate::segment::{SegmentFields, Tag};
use Slot::{NconToken, Placeholder, ProjectCodeVariant};

/// Literal emitted when the ncon flag is set.
pub const NCON_TOKEN: &str = "NCON";

/// One position in an output string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A plain field value.
    Field(Field),
    /// `NCON` when the ncon flag is true, otherwise empty.
    NconToken,
    /// A structurally empty column kept for spreadsheet alignment.
    Placeholder,
    /// Project code with the variant letter appended directly.
    ProjectCodeVariant,
    /// A tagged segment.
    Segment(SegmentFields),
}

impl Slot {
    /// Raw contribution of this slot, before the join's normalizer runs.
    pub fn render(&self, record: &FieldRecord) -> String {
        match self {
            Self::Field(field) => record.text(*field).to_string(),
            Self::NconToken => {
                if record.flag(Field::Ncon) {
                    NCON_TOKEN.to_string()
                } else {
                    String::new()
                }
            }
            Self::Placeholder => String::new(),
            Self::ProjectCodeVariant => project_code_variant(record),
            Self::Segment(segment) => segment.compose(record),
        }
    }

    /// Record fields read by this slot.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::Field(field) => vec![*field],
            Self::NconToken => vec![Field::Ncon],
            Self::Placeholder => Vec::new(),
            Self::ProjectCodeVariant => vec![Field::ProjectCode, Field::Variant],
            Self::Segment(segment) => std::iter::once(segment.primary)
                .chain(segment.secondary)
                .collect(),
        }
    }
}

/// Normalized project code followed by the normalized variant, no delimiter.
pub fn project_code_variant(record: &FieldRecord) -> String {
    let code = normalize(record.text(Field::ProjectCode));
    let variant = normalize(record.text(Field::Variant));
    if variant.is_empty() {
        code
    } else {
        code + &variant
    }
}

/// Field tables for one asset mode.
#[derive(Debug)]
pub struct Layout {
    pub mode: Mode,
    pub ad_set: &'static [Slot],
    pub ad_level: &'static [Slot],
    pub ad_set_normalizer: Normalizer,
}

impl Layout {
    pub fn for_mode(mode: Mode) -> &'static Layout {
        match mode {
            Mode::Video => &VIDEO,
            Mode::Static => &STATIC,
        }
    }

    /// Every distinct field this mode reads, in ad-set then ad-level order.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        for slot in self.ad_set.iter().chain(self.ad_level) {
            for field in slot.fields() {
                if !fields.contains(&field) {
                    fields.push(field);
                }
            }
        }
        fields
    }
}

const fn f(field: Field) -> Slot {
    Slot::Field(field)
}

static VIDEO: Layout = Layout {
    mode: Mode::Video,
    ad_set: &[
        f(Field::Account),
        f(Field::ProductGeo),
        f(Field::Trial),
        f(Field::ConceptId),
        f(Field::AssetId),
        f(Field::Focus),
        f(Field::Theme),
        f(Field::ShortConceptDesc),
        f(Field::Seq),
        f(Field::Title),
        f(Field::Intro),
        f(Field::TestVariable),
        f(Field::TestDesc),
        NconToken,
        f(Field::Age),
        f(Field::Ethnicity),
        f(Field::Ratio),
        f(Field::Style),
        f(Field::Graphic),
        f(Field::ProductCode),
        f(Field::ProjectCode),
    ],
    ad_level: &[
        f(Field::Account),
        f(Field::ProductGeo),
        f(Field::Trial),
        f(Field::ConceptId),
        f(Field::AssetId),
        f(Field::Focus),
        f(Field::Theme),
        f(Field::ShortConceptDesc),
        f(Field::Seq),
        f(Field::Title),
        f(Field::Intro),
        Slot::Segment(SegmentFields::tagged(Tag::Sequence, Field::SeqDesc)),
        Slot::Segment(SegmentFields::paired(Tag::Theme, Field::HookTheme, Field::HookDesc)),
        Slot::Segment(SegmentFields::paired(Tag::Visual, Field::VisualTheme, Field::VisualObject)),
        Slot::Segment(SegmentFields::tagged(Tag::Tail, Field::Sound)),
        NconToken,
        f(Field::Age),
        f(Field::Ethnicity),
        f(Field::Ratio),
        f(Field::Style),
        f(Field::Graphic),
        f(Field::ProductCode),
        ProjectCodeVariant,
        f(Field::AdTextCode),
    ],
    ad_set_normalizer: normalize_video_ad_set,
};

// Ad-set slots follow spreadsheet columns A through Z.
static STATIC: Layout = Layout {
    mode: Mode::Static,
    ad_set: &[
        f(Field::Account),          // A
        f(Field::ProductGeo),       // B
        f(Field::Trial),            // C
        f(Field::ConceptId),        // D
        f(Field::AssetId),          // E
        f(Field::Focus),            // F
        f(Field::Theme),            // G
        f(Field::ShortConceptDesc), // H
        f(Field::CarouselCode),     // I
        f(Field::Title),            // J
        f(Field::Intro),            // K
        f(Field::TestVariable),     // L
        f(Field::TestDesc),         // M
        Placeholder,                // N
        Placeholder,                // O
        Placeholder,                // P
        Placeholder,                // Q
        NconToken,                  // R
        f(Field::Age),              // S
        f(Field::Ethnicity),        // T
        f(Field::Ratio),            // U
        f(Field::Style),            // V
        f(Field::Graphic),          // W
        f(Field::ProductCode),      // X
        f(Field::ProjectCode),      // Y
        f(Field::AssetFormat),      // Z
    ],
    ad_level: &[
        f(Field::Account),
        f(Field::ProductGeo),
        f(Field::Trial),
        f(Field::ConceptId),
        f(Field::AssetId),
        f(Field::Focus),
        f(Field::Theme),
        f(Field::ShortConceptDesc),
        f(Field::CarouselCode),
        f(Field::Title),
        f(Field::Intro),
        Slot::Segment(SegmentFields::tagged(Tag::Sequence, Field::CarouselDesc)),
        Slot::Segment(SegmentFields::paired(Tag::Theme, Field::HookTheme, Field::TitleDesc)),
        Slot::Segment(SegmentFields::paired(Tag::Visual, Field::VisualTheme, Field::VisualObject)),
        Slot::Segment(SegmentFields::tagged(Tag::Tail, Field::VisualIdentifier)),
        NconToken,
        f(Field::Age),
        f(Field::Ethnicity),
        f(Field::Ratio),
        f(Field::Style),
        f(Field::Graphic),
        f(Field::ProductCode),
        ProjectCodeVariant,
        f(Field::AdTextCode),
    ],
    ad_set_normalizer: normalize_static_ad_set,
};
