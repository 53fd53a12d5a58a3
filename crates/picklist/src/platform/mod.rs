//! Platform services used by the controls.

mod collation;

pub use collation::{Collation, FALLBACK_LOCALE, system_locale};
