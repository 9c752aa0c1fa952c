//! Content mapper
//!
//! Pure transformation from stored tenant data to one of the four template
//! prop shapes. No I/O, no clock, no hidden state: identical inputs always
//! produce deep-equal outputs. Every optional stored field maps to a named
//! default from [`crate::props`]; nothing here panics on missing content.

use chrono::NaiveDate;
use petpals_core::{DogRecord, LitterRecord, TemplateKind, TenantSite};
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

use crate::props::{
    DEFAULT_COLOR_SCHEME, DEFAULT_PUPPY_COUNT, DOG_PHOTO_PLACEHOLDER, DogCard, EMPTY_TEXT,
    FamilyBreederProps, KennelInfo, LitterCard, MultiServiceKennelProps,
    ProfessionalBreederProps, ServiceItem, ShowKennelProps, SocialLink, StudCard, TemplateProps,
    UNKNOWN_PARENT,
};

/// Map a tenant site and its domain rows to the props of its template.
///
/// Dispatch is an exhaustive match over [`TemplateKind`]; the unknown-tag
/// fallback already happened when the stored tag was parsed, so every site
/// lands in exactly one arm here.
pub fn map_site(
    site: &TenantSite,
    dogs: &[DogRecord],
    stud_dogs: &[DogRecord],
    litters: &[LitterRecord],
) -> TemplateProps {
    let kennel = kennel_info(site);
    let color_scheme = color_scheme(site);
    let content = &site.content;

    match site.template {
        TemplateKind::ProfessionalBreeder => {
            TemplateProps::ProfessionalBreeder(ProfessionalBreederProps {
                kennel,
                color_scheme,
                featured_dogs: featured_dogs(content, dogs),
                stud_dogs: stud_dogs.iter().map(map_stud).collect(),
                litters: litters.iter().map(map_litter).collect(),
                years_experience: text_field(content, "years_experience"),
            })
        }
        TemplateKind::ShowKennel => TemplateProps::ShowKennel(ShowKennelProps {
            kennel,
            color_scheme,
            show_dogs: dogs.iter().map(map_dog).collect(),
            achievements: text_list(content, "achievements"),
            litters: litters.iter().map(map_litter).collect(),
        }),
        TemplateKind::FamilyBreeder => TemplateProps::FamilyBreeder(FamilyBreederProps {
            kennel,
            color_scheme,
            family_story: text_field(content, "family_story"),
            dogs: dogs.iter().map(map_dog).collect(),
            litters: litters.iter().map(map_litter).collect(),
        }),
        TemplateKind::MultiServiceKennel => {
            TemplateProps::MultiServiceKennel(MultiServiceKennelProps {
                kennel,
                color_scheme,
                services: services(content),
                dogs: dogs.iter().map(map_dog).collect(),
                stud_dogs: stud_dogs.iter().map(map_stud).collect(),
                litters: litters.iter().map(map_litter).collect(),
            })
        }
    }
}

/// Build the shared kennel info block from the site record
pub fn kennel_info(site: &TenantSite) -> KennelInfo {
    let content = &site.content;

    // "about" is the current field name; older sites stored "mission"
    let mut about = text_field(content, "about");
    if about.is_empty() {
        about = text_field(content, "mission");
    }

    KennelInfo {
        name: site.site_name.clone(),
        logo_url: content
            .get("logo_url")
            .and_then(Value::as_str)
            .map(str::to_string),
        about,
        email: nested_text(content, "contact", "email"),
        phone: nested_text(content, "contact", "phone"),
        location: nested_text(content, "contact", "location"),
        social_links: social_links(content),
        breeds: text_list(content, "breeds"),
    }
}

/// Normalize a dog row for display
pub fn map_dog(dog: &DogRecord) -> DogCard {
    DogCard {
        id: dog.id,
        name: dog.name.clone(),
        breed: dog.breed.clone(),
        gender: dog.gender.clone().unwrap_or_else(|| EMPTY_TEXT.to_string()),
        photo_url: dog
            .photo_url
            .clone()
            .unwrap_or_else(|| DOG_PHOTO_PLACEHOLDER.to_string()),
        description: dog
            .description
            .clone()
            .unwrap_or_else(|| EMPTY_TEXT.to_string()),
        titles: dog.titles.clone(),
    }
}

/// Normalize a stud dog row, surfacing fee and health-testing fields
pub fn map_stud(dog: &DogRecord) -> StudCard {
    let card = map_dog(dog);
    StudCard {
        id: card.id,
        name: card.name,
        breed: card.breed,
        photo_url: card.photo_url,
        description: card.description,
        titles: card.titles,
        fee: dog.stud_fee.clone().unwrap_or_else(|| EMPTY_TEXT.to_string()),
        health_tests: dog.health_tests.clone(),
    }
}

/// Normalize a litter row for display
pub fn map_litter(litter: &LitterRecord) -> LitterCard {
    LitterCard {
        breed: litter.breed.clone(),
        sire_name: litter
            .sire_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_PARENT.to_string()),
        dam_name: litter
            .dam_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_PARENT.to_string()),
        expected_date: litter
            .expected_date
            .or(litter.whelped_date)
            .map(format_date)
            .unwrap_or_else(|| EMPTY_TEXT.to_string()),
        puppy_count: litter
            .puppy_count
            .map(|n| n.max(0) as u32)
            .unwrap_or(DEFAULT_PUPPY_COUNT),
        available: litter.available,
    }
}

/// Featured dogs are an explicit opt-in: filter by id membership in the
/// site's `featured_dog_ids` list. An absent list selects nothing.
fn featured_dogs(content: &Value, dogs: &[DogRecord]) -> Vec<DogCard> {
    let featured_ids: HashSet<Uuid> = content
        .get("featured_dog_ids")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .filter_map(|s| Uuid::parse_str(s).ok())
                .collect()
        })
        .unwrap_or_default();

    dogs.iter()
        .filter(|dog| featured_ids.contains(&dog.id))
        .map(map_dog)
        .collect()
}

fn color_scheme(site: &TenantSite) -> String {
    if site.color_scheme.is_empty() {
        DEFAULT_COLOR_SCHEME.to_string()
    } else {
        site.color_scheme.clone()
    }
}

fn social_links(content: &Value) -> Vec<SocialLink> {
    content
        .get("social")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(platform, url)| {
                    url.as_str().map(|url| SocialLink {
                        platform: platform.clone(),
                        url: url.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

fn services(content: &Value) -> Vec<ServiceItem> {
    content
        .get("services")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|item| ServiceItem {
                    name: item
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or(EMPTY_TEXT)
                        .to_string(),
                    description: item
                        .get("description")
                        .and_then(Value::as_str)
                        .unwrap_or(EMPTY_TEXT)
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn text_field(content: &Value, key: &str) -> String {
    content
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(EMPTY_TEXT)
        .to_string()
}

fn nested_text(content: &Value, outer: &str, key: &str) -> String {
    content
        .get(outer)
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or(EMPTY_TEXT)
        .to_string()
}

fn text_list(content: &Value, key: &str) -> Vec<String> {
    content
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn test_site(template: TemplateKind, content: Value) -> TenantSite {
        TenantSite {
            id: Uuid::new_v4(),
            breeder_id: Uuid::new_v4(),
            site_name: "acme".to_string(),
            custom_domain: None,
            template,
            color_scheme: "earth".to_string(),
            content,
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_dog(name: &str) -> DogRecord {
        DogRecord {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            breed: "Border Collie".to_string(),
            gender: Some("female".to_string()),
            birth_date: None,
            photo_url: Some(format!("/uploads/{}.jpg", name)),
            description: Some("A good dog".to_string()),
            titles: vec!["CH".to_string()],
            is_stud: false,
            stud_fee: None,
            health_tests: vec![],
        }
    }

    fn bare_dog(name: &str) -> DogRecord {
        DogRecord {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            breed: "Border Collie".to_string(),
            gender: None,
            birth_date: None,
            photo_url: None,
            description: None,
            titles: vec![],
            is_stud: true,
            stud_fee: None,
            health_tests: vec![],
        }
    }

    fn test_litter() -> LitterRecord {
        LitterRecord {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            breed: "Border Collie".to_string(),
            sire_name: Some("Rex".to_string()),
            dam_name: Some("Luna".to_string()),
            expected_date: NaiveDate::from_ymd_opt(2026, 3, 14),
            whelped_date: None,
            puppy_count: Some(6),
            available: true,
        }
    }

    #[test]
    fn test_missing_photo_maps_to_placeholder() {
        let card = map_dog(&bare_dog("Rex"));
        assert_eq!(card.photo_url, DOG_PHOTO_PLACEHOLDER);
    }

    #[test]
    fn test_missing_optionals_map_to_empty_not_null() {
        let card = map_dog(&bare_dog("Rex"));
        assert_eq!(card.description, "");
        assert_eq!(card.gender, "");
        assert!(card.titles.is_empty());
    }

    #[test]
    fn test_present_photo_is_kept() {
        let card = map_dog(&test_dog("Luna"));
        assert_eq!(card.photo_url, "/uploads/Luna.jpg");
    }

    #[test]
    fn test_stud_defaults() {
        let stud = map_stud(&bare_dog("Rex"));
        assert_eq!(stud.fee, "");
        assert!(stud.health_tests.is_empty());
    }

    #[test]
    fn test_stud_fields_surface() {
        let mut dog = test_dog("Rex");
        dog.stud_fee = Some("$1,500".to_string());
        dog.health_tests = vec!["OFA Hips".to_string(), "CEA DNA".to_string()];
        let stud = map_stud(&dog);
        assert_eq!(stud.fee, "$1,500");
        assert_eq!(stud.health_tests.len(), 2);
    }

    #[test]
    fn test_litter_missing_parents_map_to_unknown() {
        let mut litter = test_litter();
        litter.sire_name = None;
        litter.dam_name = None;
        let card = map_litter(&litter);
        assert_eq!(card.sire_name, UNKNOWN_PARENT);
        assert_eq!(card.dam_name, UNKNOWN_PARENT);
    }

    #[test]
    fn test_litter_expected_date_falls_back_to_whelped() {
        let mut litter = test_litter();
        litter.expected_date = None;
        litter.whelped_date = NaiveDate::from_ymd_opt(2026, 1, 2);
        let card = map_litter(&litter);
        assert_eq!(card.expected_date, "January 02, 2026");
    }

    #[test]
    fn test_litter_no_dates_maps_to_empty() {
        let mut litter = test_litter();
        litter.expected_date = None;
        litter.whelped_date = None;
        assert_eq!(map_litter(&litter).expected_date, "");
    }

    #[test]
    fn test_litter_count_and_availability_defaults() {
        let mut litter = test_litter();
        litter.puppy_count = None;
        litter.available = false;
        let card = map_litter(&litter);
        assert_eq!(card.puppy_count, 0);
        assert!(!card.available);
    }

    #[test]
    fn test_kennel_info_defaults_on_empty_content() {
        let site = test_site(TemplateKind::ShowKennel, json!({}));
        let info = kennel_info(&site);
        assert_eq!(info.name, "acme");
        assert_eq!(info.logo_url, None);
        assert_eq!(info.about, "");
        assert_eq!(info.email, "");
        assert_eq!(info.phone, "");
        assert_eq!(info.location, "");
        assert!(info.social_links.is_empty());
        assert!(info.breeds.is_empty());
    }

    #[test]
    fn test_kennel_info_reads_content() {
        let site = test_site(
            TemplateKind::ProfessionalBreeder,
            json!({
                "about": "Thirty years of Border Collies.",
                "logo_url": "/uploads/logo.png",
                "contact": {"email": "hello@acme.com", "phone": "555-0101", "location": "Bend, OR"},
                "social": {"facebook": "https://fb.example/acme", "instagram": "https://ig.example/acme"},
                "breeds": ["Border Collie", "Australian Shepherd"]
            }),
        );
        let info = kennel_info(&site);
        assert_eq!(info.about, "Thirty years of Border Collies.");
        assert_eq!(info.logo_url.as_deref(), Some("/uploads/logo.png"));
        assert_eq!(info.email, "hello@acme.com");
        assert_eq!(info.breeds.len(), 2);
        assert_eq!(info.social_links.len(), 2);
    }

    #[test]
    fn test_kennel_info_falls_back_to_mission() {
        let site = test_site(
            TemplateKind::ProfessionalBreeder,
            json!({"mission": "Healthy dogs first."}),
        );
        assert_eq!(kennel_info(&site).about, "Healthy dogs first.");
    }

    #[test]
    fn test_featured_dogs_opt_in_only() {
        let dogs = vec![test_dog("Rex"), test_dog("Luna"), test_dog("Max")];
        let featured_id = dogs[1].id;

        // Absent list selects nothing, not everything
        let site = test_site(TemplateKind::ProfessionalBreeder, json!({}));
        let props = map_site(&site, &dogs, &[], &[]);
        let TemplateProps::ProfessionalBreeder(props) = props else {
            panic!("expected professional-breeder props");
        };
        assert!(props.featured_dogs.is_empty());

        // A present list filters by id membership
        let site = test_site(
            TemplateKind::ProfessionalBreeder,
            json!({"featured_dog_ids": [featured_id.to_string()]}),
        );
        let TemplateProps::ProfessionalBreeder(props) = map_site(&site, &dogs, &[], &[]) else {
            panic!("expected professional-breeder props");
        };
        assert_eq!(props.featured_dogs.len(), 1);
        assert_eq!(props.featured_dogs[0].name, "Luna");
    }

    #[test]
    fn test_featured_dogs_ignores_unparseable_ids() {
        let dogs = vec![test_dog("Rex")];
        let site = test_site(
            TemplateKind::ProfessionalBreeder,
            json!({"featured_dog_ids": ["not-a-uuid", 42]}),
        );
        let TemplateProps::ProfessionalBreeder(props) = map_site(&site, &dogs, &[], &[]) else {
            panic!("expected professional-breeder props");
        };
        assert!(props.featured_dogs.is_empty());
    }

    #[test]
    fn test_unknown_template_tag_maps_to_professional_shape() {
        let site = test_site(TemplateKind::from_tag("vaporwave-kennel"), json!({}));
        let props = map_site(&site, &[], &[], &[]);
        assert_eq!(props.kind(), TemplateKind::ProfessionalBreeder);
    }

    #[test]
    fn test_each_template_kind_maps_to_matching_shape() {
        for kind in [
            TemplateKind::ProfessionalBreeder,
            TemplateKind::ShowKennel,
            TemplateKind::FamilyBreeder,
            TemplateKind::MultiServiceKennel,
        ] {
            let site = test_site(kind, json!({}));
            assert_eq!(map_site(&site, &[], &[], &[]).kind(), kind);
        }
    }

    #[test]
    fn test_multi_service_reads_services() {
        let site = test_site(
            TemplateKind::MultiServiceKennel,
            json!({"services": [
                {"name": "Boarding", "description": "Climate-controlled kennels"},
                {"name": "Grooming"}
            ]}),
        );
        let TemplateProps::MultiServiceKennel(props) = map_site(&site, &[], &[], &[]) else {
            panic!("expected multi-service props");
        };
        assert_eq!(props.services.len(), 2);
        assert_eq!(props.services[0].name, "Boarding");
        assert_eq!(props.services[1].description, "");
    }

    #[test]
    fn test_empty_color_scheme_defaults() {
        let mut site = test_site(TemplateKind::ShowKennel, json!({}));
        site.color_scheme = String::new();
        let TemplateProps::ShowKennel(props) = map_site(&site, &[], &[], &[]) else {
            panic!("expected show-kennel props");
        };
        assert_eq!(props.color_scheme, DEFAULT_COLOR_SCHEME);
    }

    #[test]
    fn test_mapper_is_idempotent() {
        let site = test_site(
            TemplateKind::MultiServiceKennel,
            json!({
                "about": "Full-service kennel",
                "social": {"facebook": "https://fb.example/k9"},
                "services": [{"name": "Training", "description": "Puppy classes"}]
            }),
        );
        let dogs = vec![test_dog("Rex"), bare_dog("Luna")];
        let studs = vec![bare_dog("Max")];
        let litters = vec![test_litter()];

        let first = map_site(&site, &dogs, &studs, &litters);
        let second = map_site(&site, &dogs, &studs, &litters);
        assert_eq!(first, second);
    }
}
