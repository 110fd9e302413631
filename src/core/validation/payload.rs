use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;
use validator::{ValidateArgs, ValidationErrors};

use super::normalize::{title_case, upper_case};
use super::rules::{parse_date, ReleaseWindow};
use super::types::{FieldError, ValidationError, Violation};
use crate::core::schemas::{
    MovieCreateRequest, MovieStatus, MovieUpdateRequest, MAX_SCORE, MAX_TEXT_LEN, MIN_SCORE,
};
use crate::utils::Clock;

/// Payload keys in declaration order. Violations are reported in this order.
const FIELDS: [&str; 11] = [
    "name", "date", "score", "overview", "status", "budget", "revenue", "country", "genres",
    "actors", "languages",
];

/// Keys a create payload must carry; `country` may be absent.
const CREATE_REQUIRED: [&str; 10] = [
    "name", "date", "score", "overview", "status", "budget", "revenue", "genres", "actors",
    "languages",
];

/// Turns raw JSON payloads into validated, normalized requests.
///
/// Every field is checked; all violations are reported together.
#[derive(Debug, Clone)]
pub struct Validator<C> {
    clock: C,
}

impl<C: Clock> Validator<C> {
    pub fn new(clock: C) -> Self {
        Validator { clock }
    }

    pub fn validate_create(&self, raw: &Value) -> Result<MovieCreateRequest, ValidationError> {
        let draft = self.check(raw, &CREATE_REQUIRED, "create")?;

        let (
            Some(name),
            Some(date),
            Some(score),
            Some(overview),
            Some(status),
            Some(budget),
            Some(revenue),
            Some(genres),
            Some(actors),
            Some(languages),
        ) = (
            draft.name,
            draft.date,
            draft.score,
            draft.overview,
            draft.status,
            draft.budget,
            draft.revenue,
            draft.genres,
            draft.actors,
            draft.languages,
        )
        else {
            return Err(FieldError::new("payload", Violation::Missing).into());
        };

        Ok(MovieCreateRequest {
            name,
            date,
            score,
            overview,
            status,
            budget,
            revenue,
            country: draft.country,
            genres,
            actors,
            languages,
        })
    }

    pub fn validate_update(&self, raw: &Value) -> Result<MovieUpdateRequest, ValidationError> {
        self.check(raw, &[], "update")
    }

    /// Read every known key, normalize it, then run the declared bounds.
    fn check(
        &self,
        raw: &Value,
        required: &[&str],
        kind: &str,
    ) -> Result<MovieUpdateRequest, ValidationError> {
        let window = ReleaseWindow::new(self.clock.today());
        let mut fields = Fields::new(raw)?;

        for key in required {
            fields.require(key);
        }

        let draft = MovieUpdateRequest {
            name: fields.optional("name", parse_text),
            date: fields.optional("date", parse_release_date),
            score: fields.optional("score", as_number),
            overview: fields.optional("overview", parse_text),
            status: fields.optional("status", parse_status),
            budget: fields.optional("budget", as_number),
            revenue: fields.optional("revenue", as_number),
            country: fields.optional("country", parse_country),
            genres: fields.optional("genres", parse_names),
            actors: fields.optional("actors", parse_names),
            languages: fields.optional("languages", parse_names),
        };

        if let Err(errors) = draft.validate_with_args(&window) {
            fields.extend(bound_violations(&errors, &draft, &window));
        }

        fields.finish(kind)?;
        Ok(draft)
    }
}

// ===============================================================================
// Field access
// ===============================================================================

struct Fields<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    fn new(raw: &'a Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => Ok(Fields {
                map,
                errors: Vec::new(),
            }),
            _ => Err(FieldError::new("payload", Violation::InvalidType { expected: "object" }).into()),
        }
    }

    /// Absent and `null` both count as not supplied.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn require(&mut self, key: &str) {
        if self.get(key).is_none() {
            self.errors.push(FieldError::new(key, Violation::Missing));
        }
    }

    fn optional<T>(
        &mut self,
        key: &str,
        parse: impl FnOnce(&Value) -> Result<T, Violation>,
    ) -> Option<T> {
        let value = self.get(key)?;
        match parse(value) {
            Ok(v) => Some(v),
            Err(violation) => {
                self.errors.push(FieldError::new(key, violation));
                None
            }
        }
    }

    fn extend(&mut self, errors: Vec<FieldError>) {
        self.errors.extend(errors);
    }

    fn finish(mut self, kind: &str) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            debug!("Accepted {kind} payload");
            return Ok(());
        }
        self.errors.sort_by_key(|e| field_position(&e.field));
        debug!("Rejected {kind} payload with {} violation(s)", self.errors.len());
        Err(ValidationError::new(self.errors))
    }
}

fn field_position(field: &str) -> usize {
    FIELDS
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELDS.len())
}

// ===============================================================================
// Bounds
// ===============================================================================

fn bound_violations(
    errors: &ValidationErrors,
    draft: &MovieUpdateRequest,
    window: &ReleaseWindow,
) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, errs) in errors.field_errors() {
        for error in errs.iter() {
            let violation = bound_violation(&field, &error.code, draft, window);
            out.push(FieldError::new(field.to_string(), violation));
        }
    }
    out
}

/// Describe a failed bound using the value that failed it.
fn bound_violation(
    field: &str,
    code: &str,
    draft: &MovieUpdateRequest,
    window: &ReleaseWindow,
) -> Violation {
    let too_long = |text: &Option<String>| Violation::TooLong {
        max: MAX_TEXT_LEN,
        actual: text.as_deref().map_or(0, |t| t.chars().count()),
    };
    match field {
        "name" => too_long(&draft.name),
        "overview" => too_long(&draft.overview),
        "score" => Violation::OutOfRange {
            min: MIN_SCORE,
            max: MAX_SCORE,
            actual: draft.score.unwrap_or_default(),
        },
        "budget" => Violation::Negative {
            actual: draft.budget.unwrap_or_default(),
        },
        "revenue" => Violation::Negative {
            actual: draft.revenue.unwrap_or_default(),
        },
        "country" => Violation::CountryCodeTooLong {
            code: draft.country.clone().unwrap_or_default(),
        },
        "date" => match window.latest() {
            Some(latest) => Violation::DateTooFar { latest },
            None => Violation::Rule { code: code.to_string() },
        },
        _ => Violation::Rule { code: code.to_string() },
    }
}

// ===============================================================================
// Field parsers
// ===============================================================================

fn as_str(value: &Value) -> Result<&str, Violation> {
    value
        .as_str()
        .ok_or(Violation::InvalidType { expected: "string" })
}

fn as_number(value: &Value) -> Result<f64, Violation> {
    value
        .as_f64()
        .ok_or(Violation::InvalidType { expected: "number" })
}

fn parse_text(value: &Value) -> Result<String, Violation> {
    as_str(value).map(str::to_string)
}

fn parse_release_date(value: &Value) -> Result<NaiveDate, Violation> {
    parse_date(as_str(value)?)
}

fn parse_status(value: &Value) -> Result<MovieStatus, Violation> {
    let raw = as_str(value)?;
    raw.parse()
        .map_err(|_| Violation::UnknownStatus(raw.to_string()))
}

fn parse_country(value: &Value) -> Result<String, Violation> {
    as_str(value).map(upper_case)
}

fn parse_names(value: &Value) -> Result<Vec<String>, Violation> {
    let expected = Violation::InvalidType {
        expected: "array of strings",
    };
    let items = value.as_array().ok_or_else(|| expected.clone())?;
    items
        .iter()
        .map(|item| item.as_str().map(title_case).ok_or_else(|| expected.clone()))
        .collect()
}
