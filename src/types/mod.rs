//! Core types for seoforge.

mod provider;
mod result;

pub use provider::{
    ProviderId, ProviderStatus, StatusReport, UnknownProvider, ALL_PROVIDERS, FALLBACK_PRIORITY,
};
pub use result::{
    ContentAnalysis, ContentOutline, KeywordSet, MetaDescriptionSet, MetaVariation, OutlineSection,
};
