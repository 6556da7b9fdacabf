use ::log::{info, trace};
use ::sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DbConn, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::data::Rating;
use entity::classroom;

#[derive(Debug, ::thiserror::Error)]
pub enum ClassroomManagerError {
    #[error("Classroom `{0}` not found")]
    ClassroomNotFound(i32),
    #[error("DbErr: `{0}`")]
    DbErr(#[from] DbErr),
}

/// строка списка классов, готовая для шаблона
#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomView {
    pub id: i32,
    pub class_name: String,
    pub description: String,
    /// средняя оценка, округлённая до сотых
    pub rating: f64,
    pub num_of_ratings: i32,
}

impl From<&classroom::Model> for ClassroomView {
    fn from(m: &classroom::Model) -> Self {
        Self {
            id: m.id,
            class_name: m.class_name.clone(),
            description: m.description.clone(),
            rating: m.display_rating(),
            num_of_ratings: m.num_of_ratings,
        }
    }
}

#[derive(Debug)]
pub struct ClassroomManager<'a> {
    db: &'a DbConn,
    pub classroom: classroom::Model,
}

impl<'db> ClassroomManager<'db> {
    pub async fn load_classroom(db: &'db DbConn, id: i32) -> Result<Self, ClassroomManagerError> {
        let classroom = classroom::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ClassroomManagerError::ClassroomNotFound(id))?;

        Ok(Self { db, classroom })
    }

    /// добавляет класс (вне HTTP: через `add-class` или тесты)
    pub async fn create(
        db: &'db DbConn,
        class_name: &str,
        description: &str,
    ) -> Result<Self, ClassroomManagerError> {
        let classroom = classroom::ActiveModel {
            class_name: ActiveValue::Set(class_name.trim().to_owned()),
            description: ActiveValue::Set(description.trim().to_owned()),
            rating_sum: ActiveValue::Set(0),
            num_of_ratings: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("created {}", classroom);

        Ok(Self { db, classroom })
    }

    /// добавляет одну оценку к сумме и счётчику класса
    ///
    /// сумма и счётчик увеличиваются одним `UPDATE ... SET col = col + ?`,
    /// параллельные оценки одного класса упорядочивает сама база;
    /// средняя в таблицу не пишется
    pub async fn apply_rating(
        db: &'db DbConn,
        class_id: i32,
        rating: Rating,
    ) -> Result<Self, ClassroomManagerError> {
        let txn = db.begin().await?;

        let res = classroom::Entity::update_many()
            .col_expr(
                classroom::Column::RatingSum,
                Expr::col(classroom::Column::RatingSum).add(i64::from(rating.get())),
            )
            .col_expr(
                classroom::Column::NumOfRatings,
                Expr::col(classroom::Column::NumOfRatings).add(1),
            )
            .col_expr(
                classroom::Column::UpdatedAt,
                Expr::value(::chrono::Utc::now().naive_utc()),
            )
            .filter(classroom::Column::Id.eq(class_id))
            .exec(&txn)
            .await?;

        if res.rows_affected == 0 {
            txn.rollback().await?;
            return Err(ClassroomManagerError::ClassroomNotFound(class_id));
        }

        let classroom = classroom::Entity::find_by_id(class_id)
            .one(&txn)
            .await?
            .ok_or(ClassroomManagerError::ClassroomNotFound(class_id))?;

        txn.commit().await?;

        trace!("rating {} applied to {}", rating, classroom);

        Ok(Self { db, classroom })
    }

    /// все классы с вычисленной средней оценкой; ничего не пишет
    pub async fn list(db: &'db DbConn) -> Result<Vec<ClassroomView>, ClassroomManagerError> {
        let classes = classroom::Entity::find()
            .order_by_asc(classroom::Column::Id)
            .all(db)
            .await?;

        Ok(classes.iter().map(ClassroomView::from).collect())
    }
}

impl ClassroomManager<'_> {
    pub fn view(&self) -> ClassroomView {
        ClassroomView::from(&self.classroom)
    }

    /// перечитывает строку из базы
    pub async fn reload(&mut self) -> Result<(), ClassroomManagerError> {
        self.classroom = classroom::Entity::find_by_id(self.classroom.id)
            .one(self.db)
            .await?
            .ok_or(ClassroomManagerError::ClassroomNotFound(self.classroom.id))?;

        Ok(())
    }
}
