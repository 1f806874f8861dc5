//! Permanent, audit-logged redaction
//!
//! This module hosts the redaction pipeline: deterministic
//! content-addressed redaction IDs ([`id`]), validated branding styles
//! ([`style`]), the two-tier branded overlay renderer ([`branding`]), and
//! the orchestration that turns an XFDF exchange document into destructive
//! blackouts plus an audit trail ([`apply`]).

pub mod apply;
pub mod branding;
pub mod id;
pub mod style;

pub use apply::{apply_redactions, RedactionLogEntry, RedactionOutcome};
pub use branding::{draw_branding, BrandingTier};
pub use id::redaction_id;
pub use style::{BrandingStyle, RedactionStyleConfig};
