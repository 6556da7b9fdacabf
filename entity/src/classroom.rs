use std::fmt::Display;

use super::*;

pub const CLASS_NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "classroom")]
pub struct Model {
    #[sea_orm(primary_key, unique)]
    pub id: i32,
    #[sea_orm(not_null)]
    pub class_name: String,
    #[sea_orm(unique, not_null)]
    pub description: String,
    /// сумма всех оценок, средняя считается только при чтении
    #[sea_orm(default_value = "0", not_null)]
    pub rating_sum: i64,
    #[sea_orm(default_value = "0", not_null)]
    pub num_of_ratings: i32,
    #[sea_orm(default_expr = "now()", not_null)]
    pub created_at: ChronoDateTime,
    #[sea_orm(default_expr = "now()", not_null)]
    pub updated_at: ChronoDateTime,
}

impl Model {
    pub fn display_rating(&self) -> f64 {
        crate::display_rating(self.rating_sum, self.num_of_ratings)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Class: {}, Description: {}, Rating: {:.2}, Number of ratings: {}>",
            self.class_name,
            self.description,
            self.display_rating(),
            self.num_of_ratings
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let reject = || match insert {
            true => Err(DbErr::RecordNotInserted),
            false => Err(DbErr::RecordNotUpdated),
        };

        if let ActiveValue::Set(class_name) = &self.class_name {
            let len = class_name.trim().chars().count();
            if len == 0 || len > CLASS_NAME_MAX_LEN {
                ::log::warn!("reject save a classroom with incorrect class_name: {class_name:?}");
                return reject();
            }
        }

        if let ActiveValue::Set(description) = &self.description {
            let len = description.trim().chars().count();
            if len == 0 || len > DESCRIPTION_MAX_LEN {
                ::log::warn!(
                    "reject save a classroom with incorrect description ({} chars)",
                    description.chars().count()
                );
                return reject();
            }
        }

        if let ActiveValue::Set(num_of_ratings) = self.num_of_ratings {
            if num_of_ratings < 0 {
                ::log::warn!("reject save a classroom with negative num_of_ratings: {num_of_ratings}");
                return reject();
            }
        }

        if !insert {
            self.updated_at = ActiveValue::Set(now());
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(rating_sum: i64, num_of_ratings: i32) -> Model {
        Model {
            id: 1,
            class_name: "APP1".to_owned(),
            description: "taught by steemers".to_owned(),
            rating_sum,
            num_of_ratings,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            model(8, 2).to_string(),
            "<Class: APP1, Description: taught by steemers, Rating: 4.00, Number of ratings: 2>"
        );
        assert_eq!(model(0, 0).display_rating(), 0.0);
    }

    /// u32 на Postgres декодируется как `OID` и не читается из `INT4`
    #[test]
    fn column_types_match_migration() {
        assert_eq!(
            Column::Id.def().get_column_type(),
            &ColumnType::Integer
        );
        assert_eq!(
            Column::NumOfRatings.def().get_column_type(),
            &ColumnType::Integer
        );
        assert_eq!(
            Column::RatingSum.def().get_column_type(),
            &ColumnType::BigInteger
        );
    }
}
