use serde::{Deserialize, Serialize};

/// Paginated response from GET /object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectsResponse {
    pub info: PageInfo,
    #[serde(default)]
    pub records: Vec<HarvardObject>,
}

/// Pagination block of an objects response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    pub totalrecords: i64,
    pub page: i64,
    pub pages: i64,
}

/// Object record from GET /object
///
/// The API sends explicit nulls for absent text, hence the Options. Only the
/// fields consumed downstream are modeled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvardObject {
    pub id: i64,
    pub title: Option<String>,
    pub dated: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub culture: Option<String>,
    pub department: Option<String>,
    pub classification: Option<String>,
    pub technique: Option<String>,
    pub period: Option<String>,
    pub century: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub primaryimageurl: Option<String>,
    pub people: Option<Vec<Person>>,
    pub images: Option<Vec<ObjectImage>>,
}

/// Contributor entry of an object record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub role: Option<String>,
    pub displayname: Option<String>,
}

/// Image entry of an object record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectImage {
    pub thumbnailurl: Option<String>,
}
