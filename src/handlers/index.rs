use super::*;

#[derive(Template)]
#[template(path = "index.html")]
struct Index {
    classes: Vec<ClassroomView>,
}

pub async fn get(reg: Data<Registry>) -> ::aw::Result<impl Responder> {
    let classes = ClassroomManager::list(&reg.db).await?;

    Ok(Index { classes })
}
