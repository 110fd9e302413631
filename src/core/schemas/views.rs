use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::MovieStatus;

// ===============================================================================
// List
// ===============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieListItem {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub overview: String,
}

/// One page of list items. Page tokens and totals come from the caller's pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieListItem>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}

// ===============================================================================
// Reference data
// ===============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryView {
    pub id: i64,
    pub code: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreView {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorView {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageView {
    pub id: i64,
    pub name: String,
}

// ===============================================================================
// Detail
// ===============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub overview: String,
    pub status: MovieStatus,
    pub budget: f64,
    pub revenue: f64,
    pub country: CountryView,
    pub genres: Vec<GenreView>,
    pub actors: Vec<ActorView>,
    pub languages: Vec<LanguageView>,
}

impl From<&MovieDetail> for MovieListItem {
    fn from(detail: &MovieDetail) -> Self {
        MovieListItem {
            id: detail.id,
            name: detail.name.clone(),
            date: detail.date,
            score: detail.score,
            overview: detail.overview.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail() -> MovieDetail {
        MovieDetail {
            id: 7,
            name: "Heat".to_string(),
            date: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            score: 82.0,
            overview: "A group of professional bank robbers".to_string(),
            status: MovieStatus::Released,
            budget: 60_000_000.0,
            revenue: 187_436_818.0,
            country: CountryView {
                id: 1,
                code: "USA".to_string(),
                name: Some("United States".to_string()),
            },
            genres: vec![GenreView { id: 3, name: "Crime".to_string() }],
            actors: vec![ActorView { id: 9, name: "Al Pacino".to_string() }],
            languages: vec![LanguageView { id: 2, name: "English".to_string() }],
        }
    }

    #[test]
    fn detail_emits_status_value_and_nested_views() {
        let value = serde_json::to_value(detail()).unwrap();
        assert_eq!(value["status"], json!("Released"));
        assert_eq!(value["date"], json!("1995-12-15"));
        assert_eq!(value["country"]["code"], json!("USA"));
        assert_eq!(value["genres"][0]["name"], json!("Crime"));
    }

    #[test]
    fn list_item_projects_from_detail() {
        let d = detail();
        let item = MovieListItem::from(&d);
        assert_eq!(item.id, d.id);
        assert_eq!(item.name, "Heat");
        assert_eq!(item.date, d.date);
    }

    #[test]
    fn list_response_passes_page_tokens_through() {
        let raw = json!({
            "movies": [],
            "prev_page": null,
            "next_page": "/movies?page=2",
            "total_pages": 4,
            "total_items": 37
        });
        let page: MovieListResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(page.prev_page, None);
        assert_eq!(page.next_page.as_deref(), Some("/movies?page=2"));
        assert_eq!(page.total_items, 37);
    }

    #[test]
    fn country_name_is_optional() {
        let raw = json!({ "id": 4, "code": "FRA", "name": null });
        let country: CountryView = serde_json::from_value(raw).unwrap();
        assert!(country.name.is_none());
    }
}
