//! Tenant site records and template selection
//!
//! A `TenantSite` is the stored configuration for one breeder's public
//! kennel website: which of the four presentation templates it uses, its
//! color scheme, and an arbitrary nested content document the breeder edits
//! through the app. This crate only ever reads these records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The four presentation templates a kennel site can use.
///
/// The set is closed: template dispatch is an exhaustive match everywhere,
/// and unrecognized stored tags collapse to `ProfessionalBreeder` at parse
/// time via [`TemplateKind::from_tag`]. Because both the content mapper and
/// the renderer consume the already-parsed variant, they cannot disagree on
/// the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TemplateKind {
    ProfessionalBreeder,
    ShowKennel,
    FamilyBreeder,
    MultiServiceKennel,
}

impl TemplateKind {
    /// Parse a stored template tag.
    ///
    /// Unknown tags fall back to `ProfessionalBreeder` rather than failing:
    /// a degraded-but-present rendering beats an error page for a site whose
    /// stored configuration predates or postdates this binary.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "professional-breeder" => TemplateKind::ProfessionalBreeder,
            "show-kennel" => TemplateKind::ShowKennel,
            "family-breeder" => TemplateKind::FamilyBreeder,
            "multi-service-kennel" => TemplateKind::MultiServiceKennel,
            _ => TemplateKind::ProfessionalBreeder,
        }
    }

    /// The canonical stored tag for this template
    pub fn as_tag(&self) -> &'static str {
        match self {
            TemplateKind::ProfessionalBreeder => "professional-breeder",
            TemplateKind::ShowKennel => "show-kennel",
            TemplateKind::FamilyBreeder => "family-breeder",
            TemplateKind::MultiServiceKennel => "multi-service-kennel",
        }
    }
}

impl Default for TemplateKind {
    fn default() -> Self {
        TemplateKind::ProfessionalBreeder
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for TemplateKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for TemplateKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<TemplateKind> for String {
    fn from(kind: TemplateKind) -> Self {
        kind.as_tag().to_string()
    }
}

/// Stored configuration record for one tenant's public kennel site.
///
/// Read-only from the renderer's perspective; created and edited by the
/// owning breeder through the app. A record with `published == false` must
/// never be rendered publicly and is treated exactly like a missing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantSite {
    pub id: Uuid,

    /// Owning breeder; every domain read is scoped by this id
    pub breeder_id: Uuid,

    /// Unique site name, doubles as the subdomain slug
    pub site_name: String,

    /// Custom domain bound to this site, if any
    pub custom_domain: Option<String>,

    /// Which of the four presentation templates to render
    pub template: TemplateKind,

    /// Color scheme identifier, becomes a CSS class on the rendered page
    pub color_scheme: String,

    /// Arbitrary nested content document (about text, contact info, social
    /// links, featured-dog ids, per-template extension fields). All reads
    /// are optional-with-default.
    pub content: serde_json::Value,

    /// Publish flag; unpublished sites render as not-found
    pub published: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known_variants() {
        assert_eq!(
            TemplateKind::from_tag("professional-breeder"),
            TemplateKind::ProfessionalBreeder
        );
        assert_eq!(
            TemplateKind::from_tag("show-kennel"),
            TemplateKind::ShowKennel
        );
        assert_eq!(
            TemplateKind::from_tag("family-breeder"),
            TemplateKind::FamilyBreeder
        );
        assert_eq!(
            TemplateKind::from_tag("multi-service-kennel"),
            TemplateKind::MultiServiceKennel
        );
    }

    #[test]
    fn test_from_tag_unknown_falls_back() {
        assert_eq!(
            TemplateKind::from_tag("holographic-kennel"),
            TemplateKind::ProfessionalBreeder
        );
        assert_eq!(TemplateKind::from_tag(""), TemplateKind::ProfessionalBreeder);
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in [
            TemplateKind::ProfessionalBreeder,
            TemplateKind::ShowKennel,
            TemplateKind::FamilyBreeder,
            TemplateKind::MultiServiceKennel,
        ] {
            assert_eq!(TemplateKind::from_tag(kind.as_tag()), kind);
        }
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&TemplateKind::ShowKennel).unwrap();
        assert_eq!(json, "\"show-kennel\"");

        let parsed: TemplateKind = serde_json::from_str("\"family-breeder\"").unwrap();
        assert_eq!(parsed, TemplateKind::FamilyBreeder);

        // Unknown tags deserialize to the fallback, not an error
        let parsed: TemplateKind = serde_json::from_str("\"no-such-template\"").unwrap();
        assert_eq!(parsed, TemplateKind::ProfessionalBreeder);
    }
}
