use ::sea_orm::EntityTrait;

use super::*;

use crate::state::Registry;

#[derive(Debug, Serialize, Deserialize)]
pub struct GetClassroom {
    id: i32,
}

/// строка таблицы как есть, без пересчёта средней
pub(crate) async fn get_classroom(
    Query(GetClassroom { id }): Query<GetClassroom>,
    reg: Data<Registry>,
) -> impl Responder {
    let classroom = entity::classroom::Entity::find_by_id(id)
        .one(&reg.db)
        .await
        .unwrap();

    Json(classroom)
}
