//! Template renderer
//!
//! Selects and renders exactly one of the four kennel-site templates from
//! mapped props. No business logic lives here; the dispatch is an
//! exhaustive match over [`TemplateProps`], which already carries the
//! template variant the mapper chose.

use askama::Template;

use crate::props::{
    FamilyBreederProps, MultiServiceKennelProps, ProfessionalBreederProps, ShowKennelProps,
    TemplateProps,
};

#[derive(Template)]
#[template(path = "professional_breeder.html")]
struct ProfessionalBreederPage<'a> {
    p: &'a ProfessionalBreederProps,
}

#[derive(Template)]
#[template(path = "show_kennel.html")]
struct ShowKennelPage<'a> {
    p: &'a ShowKennelProps,
}

#[derive(Template)]
#[template(path = "family_breeder.html")]
struct FamilyBreederPage<'a> {
    p: &'a FamilyBreederProps,
}

#[derive(Template)]
#[template(path = "multi_service_kennel.html")]
struct MultiServiceKennelPage<'a> {
    p: &'a MultiServiceKennelProps,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage;

/// Render the template matching the mapped props
pub fn render_site(props: &TemplateProps) -> askama::Result<String> {
    match props {
        TemplateProps::ProfessionalBreeder(p) => ProfessionalBreederPage { p }.render(),
        TemplateProps::ShowKennel(p) => ShowKennelPage { p }.render(),
        TemplateProps::FamilyBreeder(p) => FamilyBreederPage { p }.render(),
        TemplateProps::MultiServiceKennel(p) => MultiServiceKennelPage { p }.render(),
    }
}

/// Render the generic not-found page.
///
/// Used for every terminal outcome (missing site, unpublished site,
/// lookup failure) so none of them is externally distinguishable.
pub fn render_not_found() -> String {
    NotFoundPage.render().unwrap_or_else(|_| {
        "<!DOCTYPE html><html><body><h1>Page not found</h1></body></html>".to_string()
    })
}
