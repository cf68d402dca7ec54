//! Rating comparison methods.
//!
//! Rating queries arrive as two strings (the method name and the value).
//! Both are converted here before any comparison happens, so ratings are
//! always compared as numbers.

use crate::error::{QueryError, Result};
use std::fmt;
use std::str::FromStr;

/// How a movie's rating is compared against the queried value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingMethod {
    /// `movie.rating <= value`
    LessThanOrEqual,
    /// `movie.rating >= value`
    MoreThanOrEqual,
    /// `movie.rating == value`
    EqualTo,
}

impl RatingMethod {
    /// Every accepted method, in the order they are listed to clients
    pub const ALL: [RatingMethod; 3] = [
        RatingMethod::LessThanOrEqual,
        RatingMethod::MoreThanOrEqual,
        RatingMethod::EqualTo,
    ];

    /// Name used in URLs and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingMethod::LessThanOrEqual => "lessThanOrEqual",
            RatingMethod::MoreThanOrEqual => "moreThanOrEqual",
            RatingMethod::EqualTo => "equalTo",
        }
    }

    /// Apply the comparison `movie_rating <method> value`
    pub fn compare(&self, movie_rating: f64, value: f64) -> bool {
        match self {
            RatingMethod::LessThanOrEqual => movie_rating <= value,
            RatingMethod::MoreThanOrEqual => movie_rating >= value,
            RatingMethod::EqualTo => movie_rating == value,
        }
    }

    /// "lessThanOrEqual, moreThanOrEqual, equalTo"
    pub(crate) fn accepted_list() -> String {
        Self::ALL
            .iter()
            .map(RatingMethod::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RatingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingMethod {
    type Err = QueryError;

    /// Method names are matched exactly (case-sensitive)
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| QueryError::InvalidMethod {
                method: s.to_string(),
            })
    }
}

/// Convert a raw rating parameter into a number
///
/// Surrounding whitespace is ignored and `Infinity`/`-Infinity` are
/// accepted. Anything that is not a number becomes `NaN`, which compares
/// false under every method, so such a query matches no movies.
pub fn parse_rating(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
