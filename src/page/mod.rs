//! The landing page: head metadata, structured data and visible sections.

mod clock;
mod faq;
mod locale;
mod meta;
mod render;
mod schema;
mod sections;
mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use faq::{FAQ_ITEMS, FaqItem};
pub use locale::DateLocale;
pub use meta::{MetadataEntry, build_meta};
pub use render::{RenderError, RenderedPage, render_page};
pub use schema::StructuredData;
pub use timestamp::PageTimestamp;
