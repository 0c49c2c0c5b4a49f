//! Backend 层：选项文档读写

mod options_service;

pub use options_service::{sample_document, OptionsStore};
