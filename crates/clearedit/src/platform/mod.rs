//! Platform queries.
//!
//! Host-environment lookups the widget layer needs: the active locale and
//! its text direction.

pub mod localization;

pub use localization::{LocaleInfo, SystemLocale, TextDirection};
