//! Dog and litter domain records
//!
//! Raw rows as the data store returns them, before the content mapper
//! normalizes them into template props. Each record is owned by exactly one
//! breeder and is only ever fetched scoped to `owner_id = breeder_id`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dog as stored, including stud-service fields when flagged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub breed: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub photo_url: Option<String>,
    pub description: Option<String>,

    /// Show/championship titles, most recent first
    #[serde(default)]
    pub titles: Vec<String>,

    /// Whether this dog is offered for stud service
    #[serde(default)]
    pub is_stud: bool,

    /// Display-formatted stud fee, e.g. "$1,500"
    pub stud_fee: Option<String>,

    /// Completed health tests (OFA, DNA panels, ...)
    #[serde(default)]
    pub health_tests: Vec<String>,
}

/// A litter as stored.
///
/// `sire_name`/`dam_name` come from a join against the dogs table and may be
/// absent when the parent record was deleted or never linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LitterRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub breed: String,
    pub sire_name: Option<String>,
    pub dam_name: Option<String>,

    /// Breeder-entered expected date for upcoming litters
    pub expected_date: Option<NaiveDate>,

    /// Actual whelping date once the litter is born
    pub whelped_date: Option<NaiveDate>,

    pub puppy_count: Option<i32>,

    /// Whether puppies from this litter are currently available
    #[serde(default)]
    pub available: bool,
}
