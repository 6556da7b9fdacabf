use std::fmt::Display;

use ::serde::Deserialize;

/// оценка по пятибалльной шкале
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(value)
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// значение поля: текст из urlencoded-формы или число из JSON
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FormValue {
    /// `None` для пустой строки: такое поле считается отсутствующим
    fn as_integer(&self) -> Option<Result<i64, String>> {
        match self {
            FormValue::Int(i) => Some(Ok(*i)),
            FormValue::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(Ok(*f as i64)),
            FormValue::Float(f) => Some(Err(f.to_string())),
            FormValue::Text(t) => {
                let t = t.trim();
                if t.is_empty() {
                    return None;
                }
                Some(t.parse::<i64>().map_err(|_| t.to_owned()))
            }
        }
    }
}

#[derive(Debug, ::thiserror::Error, PartialEq, Eq)]
pub enum RatingFormError {
    #[error("missing required field `rating`")]
    MissingRating,
    #[error("missing required field `class_id`")]
    MissingClassId,
    #[error("`rating` must be a whole number between 1 and 5, got `{0}`")]
    InvalidRating(String),
    #[error("`class_id` must be a non-negative integer, got `{0}`")]
    InvalidClassId(String),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// тело запроса `POST /addrating`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default)]
    pub rating: Option<FormValue>,
    #[serde(default)]
    pub class_id: Option<FormValue>,
}

impl RatingForm {
    pub fn validate(&self) -> Result<(i32, Rating), RatingFormError> {
        let rating = match self.rating.as_ref().and_then(FormValue::as_integer) {
            None => return Err(RatingFormError::MissingRating),
            Some(Err(raw)) => return Err(RatingFormError::InvalidRating(raw)),
            Some(Ok(r)) => {
                Rating::try_from(r).map_err(|r| RatingFormError::InvalidRating(r.to_string()))?
            }
        };

        let class_id = match self.class_id.as_ref().and_then(FormValue::as_integer) {
            None => return Err(RatingFormError::MissingClassId),
            Some(Err(raw)) => return Err(RatingFormError::InvalidClassId(raw)),
            Some(Ok(id)) => i32::try_from(id)
                .ok()
                .filter(|id| *id >= 0)
                .ok_or_else(|| RatingFormError::InvalidClassId(id.to_string()))?,
        };

        Ok((class_id, rating))
    }
}
