//! Template prop shapes
//!
//! Derived view objects the content mapper produces and the templates
//! consume. Never persisted; rebuilt fresh per request. Every field that
//! can be absent in stored data maps to one of the named defaults below, so
//! templates never need null-guards.

use petpals_core::TemplateKind;
use serde::Serialize;
use uuid::Uuid;

/// Image shown for dogs without an uploaded photo
pub const DOG_PHOTO_PLACEHOLDER: &str = "/static/images/dog-placeholder.svg";

/// Parent name shown when the sire/dam relation is missing
pub const UNKNOWN_PARENT: &str = "Unknown";

/// Color scheme used when a site has none configured
pub const DEFAULT_COLOR_SCHEME: &str = "classic";

/// Text default for absent optional content fields
pub const EMPTY_TEXT: &str = "";

/// Puppy count shown when none is recorded
pub const DEFAULT_PUPPY_COUNT: u32 = 0;

/// Shared kennel header block, present in all four template shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KennelInfo {
    /// Site name; doubles as the page title
    pub name: String,
    /// No placeholder: templates simply omit the logo when absent
    pub logo_url: Option<String>,
    pub about: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_links: Vec<SocialLink>,
    pub breeds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// A dog normalized for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DogCard {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub photo_url: String,
    pub description: String,
    pub titles: Vec<String>,
}

/// A stud dog: a dog card plus stud-service fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudCard {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub photo_url: String,
    pub description: String,
    pub titles: Vec<String>,
    pub fee: String,
    pub health_tests: Vec<String>,
}

/// A litter normalized for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LitterCard {
    pub breed: String,
    pub sire_name: String,
    pub dam_name: String,
    /// Formatted expected date, falling back to the whelped date
    pub expected_date: String,
    pub puppy_count: u32,
    pub available: bool,
}

/// A service entry for the multi-service template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionalBreederProps {
    pub kennel: KennelInfo,
    pub color_scheme: String,
    /// Explicit opt-in: only dogs listed in the site's featured ids
    pub featured_dogs: Vec<DogCard>,
    pub stud_dogs: Vec<StudCard>,
    pub litters: Vec<LitterCard>,
    pub years_experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowKennelProps {
    pub kennel: KennelInfo,
    pub color_scheme: String,
    pub show_dogs: Vec<DogCard>,
    pub achievements: Vec<String>,
    pub litters: Vec<LitterCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyBreederProps {
    pub kennel: KennelInfo,
    pub color_scheme: String,
    pub family_story: String,
    pub dogs: Vec<DogCard>,
    pub litters: Vec<LitterCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiServiceKennelProps {
    pub kennel: KennelInfo,
    pub color_scheme: String,
    pub services: Vec<ServiceItem>,
    pub dogs: Vec<DogCard>,
    pub stud_dogs: Vec<StudCard>,
    pub litters: Vec<LitterCard>,
}

/// The mapped props for exactly one of the four templates.
///
/// Carrying the variant and its props together means the renderer's
/// dispatch cannot disagree with the mapper's: there is no second tag to
/// fall out of sync with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TemplateProps {
    ProfessionalBreeder(ProfessionalBreederProps),
    ShowKennel(ShowKennelProps),
    FamilyBreeder(FamilyBreederProps),
    MultiServiceKennel(MultiServiceKennelProps),
}

impl TemplateProps {
    /// Which template these props belong to
    pub fn kind(&self) -> TemplateKind {
        match self {
            TemplateProps::ProfessionalBreeder(_) => TemplateKind::ProfessionalBreeder,
            TemplateProps::ShowKennel(_) => TemplateKind::ShowKennel,
            TemplateProps::FamilyBreeder(_) => TemplateKind::FamilyBreeder,
            TemplateProps::MultiServiceKennel(_) => TemplateKind::MultiServiceKennel,
        }
    }

    /// The shared kennel info block
    pub fn kennel(&self) -> &KennelInfo {
        match self {
            TemplateProps::ProfessionalBreeder(p) => &p.kennel,
            TemplateProps::ShowKennel(p) => &p.kennel,
            TemplateProps::FamilyBreeder(p) => &p.kennel,
            TemplateProps::MultiServiceKennel(p) => &p.kennel,
        }
    }
}
