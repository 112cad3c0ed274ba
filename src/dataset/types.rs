use serde::{Deserialize, Serialize};

/// Which of the three sub-collections a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Archive,
    Monastery,
    Festival,
}

/// One searchable entity: an archive item, a monastery, or a festival.
///
/// The source data stores the display string under `title` for archives and
/// `name` for monasteries and festivals; exactly one is ever present, so the
/// model carries a single `title` field and the API always serializes it as
/// `title`.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Category,
    pub redirect_url: String,
    pub monastery: Option<String>,
    /// Serialized as `type` in API responses; `kind` here because `type` is
    /// a keyword.
    pub kind: Option<String>,
    pub year: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub artist: Option<String>,
    pub language: Option<String>,
    pub material: Option<String>,
    pub instruments: Option<Vec<String>>,
    pub architect: Option<String>,
    pub photographer: Option<String>,
}
