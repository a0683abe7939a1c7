//! Wire format types for provider APIs

pub mod anthropic;
pub mod google;
