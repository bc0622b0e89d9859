//! Concrete provider implementations.
//!
//! Currently one wire format: Apple CMS V10 JSON (`videolist`), which
//! the vast majority of public video sources speak.

pub mod cms;

pub use cms::CmsProvider;
