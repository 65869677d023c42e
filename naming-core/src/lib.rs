//! Naming string generation for advertising creative assets.
//!
//! Turns one creative's form fields into the two delimited identifiers used by
//! the media team:
//! - the ad-set string, a space-free slug shared by every variant of a concept
//! - the ad-level string, which adds per-execution segments (`S-`, `T-`, `V-`, `A-`)
//!
//! Output is character-for-character compatible with the legacy spreadsheet
//! formulas for both video and static assets.

pub mod error;
pub mod generator;
pub mod join;
pub mod layout;
pub mod normalize;
pub mod record;
pub mod segment;

pub use error::{NamingError, Result};
pub use generator::{generate, generate_static_outputs, generate_video_outputs};
pub use layout::{Layout, Slot};
pub use record::{Field, FieldRecord, GeneratedPair, Mode};
pub use segment::{SegmentFields, Tag};
