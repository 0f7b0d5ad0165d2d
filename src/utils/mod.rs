//! Shared helpers: UTC dates, HTML escaping, MIME types.

pub mod date;
pub mod html;
pub mod mime;
