use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use super::status::MovieStatus;
use crate::core::validation::rules::{check_release_window, ReleaseWindow};

/// Longest accepted `name` / `overview`, in characters.
pub const MAX_TEXT_LEN: usize = 255;
/// Longest accepted country code after upper-casing.
pub const MAX_COUNTRY_CODE_LEN: usize = 3;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;
/// How far past today a release date may lie.
pub const MAX_FUTURE_DAYS: i64 = 365;

/// A creation payload that passed every rule. Built only by the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCreateRequest {
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub overview: String,
    pub status: MovieStatus,
    pub budget: f64,
    pub revenue: f64,
    pub country: Option<String>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub languages: Vec<String>,
}

/// A partial update. `None` leaves the stored value unchanged.
///
/// Carries the per-field bounds. Create payloads are checked through this
/// shape too, before every required field is confirmed present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[validate(context = ReleaseWindow)]
pub struct MovieUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "check_release_window", use_context))]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MovieStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 3))]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl MovieUpdateRequest {
    pub fn is_empty(&self) -> bool {
        *self == MovieUpdateRequest::default()
    }
}
