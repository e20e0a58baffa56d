//! Web page settings for the wkhtmltox rendering engine.
//!
//! [`WebSettings`] is a flat record of the options wkhtmltopdf and
//! wkhtmltoimage read for a single web page: background printing, image
//! loading, JavaScript, intelligent shrinking, minimum font size, print media
//! type, default encoding, a user style sheet and plugin support.
//!
//! The record can be built in three ways:
//!
//! - [`WebSettings::default()`] for the engine defaults.
//! - [`WebSettings::builder()`] with typed setters and optional keyword overrides.
//! - [`WebSettings::from_keywords`] / [`WebSettings::from_json`] for dynamically
//!   typed keyword arguments, as a host scripting environment supplies them.
//!
//! # Examples
//!
//! ```rust
//! use wkhtmltox::settings::WebSettings;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let web = WebSettings::builder()
//!     .load_images(true)
//!     .print_media_type(true)
//!     .keyword("minimumFontSize", 12)
//!     .build()?;
//!
//! assert_eq!(web.minimum_font_size, 12);
//! assert!(web.engine_options().contains(&("web.loadImages", "true".to_string())));
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Keyword entry points return [`ArgumentError`](crate::ArgumentError) when a
//! keyword is unknown, given twice, or carries a value of the wrong type. The
//! record is never partially updated.

mod builder;
mod field;
mod web;

pub use builder::WebSettingsBuilder;
pub use field::{FieldKind, WebField};
pub use web::WebSettings;
