use ::sea_orm::{entity::prelude::*, ActiveValue};
use ::serde::{Deserialize, Serialize};

pub mod prelude;

pub mod classroom;

fn now() -> ::chrono::NaiveDateTime {
    ::chrono::Utc::now().naive_utc()
}

/// средняя оценка для показа, считается из суммы и количества оценок
///
/// `0`, пока оценок нет (или счётчик испорчен), иначе `sum / count`,
/// округлённое до сотых
pub fn display_rating(rating_sum: i64, num_of_ratings: i32) -> f64 {
    if num_of_ratings <= 0 {
        return 0.0;
    }

    let avg = rating_sum as f64 / num_of_ratings as f64;
    (avg * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::display_rating;

    #[test]
    fn unrated_is_zero() {
        assert_eq!(display_rating(0, 0), 0.0);
        assert_eq!(display_rating(17, 0), 0.0);
        assert_eq!(display_rating(17, -1), 0.0);
    }

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(display_rating(5, 1), 5.0);
        assert_eq!(display_rating(8, 2), 4.0);
        assert_eq!(display_rating(10, 3), 3.33);
        assert_eq!(display_rating(11, 3), 3.67);
        assert_eq!(display_rating(1, 8), 0.13);
    }
}
