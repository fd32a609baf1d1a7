use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShowcaseError {
    #[error("segment `{label}` has invalid range [{start}, {end})")]
    InvalidRange {
        label: &'static str,
        start: f32,
        end: f32,
    },

    #[error("segment `{label}` writes section {section} but only {count} sections exist")]
    UnknownSection {
        label: &'static str,
        section: usize,
        count: usize,
    },

    #[error("unknown material tag `{0}`")]
    UnknownMaterialTag(String),

    #[error("failed to load {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("{path} is not a binary glTF: {reason}")]
    InvalidGlb { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
