use ::sea_orm::DbConn;

/// всё, что нужно обработчикам запросов; передаётся через `web::Data`
#[derive(Debug, Default, Clone)]
pub struct Registry {
    pub db: DbConn,
}
