extern crate actix_web as aw;

use ::aw::{web::Data, HttpServer};
use ::clap::Parser;
use ::dotenvy::dotenv;
use ::log::{info, trace};
use ::sea_orm::{Database, DbErr};
use migration::{Migrator, MigratorTrait};

pub mod api;
pub mod data;
pub mod handlers;
pub mod manager;
pub mod settings;
pub mod state;
use manager::{ClassroomManager, ClassroomManagerError};
use settings::{Command, Settings};
use state::*;

macro_rules! app {
    () => {
        ::actix_web::App::new()
            .wrap(::actix_web::middleware::Logger::default())
            .service(actix_files::Files::new("/static", "./static/").use_last_modified(true))
            .configure(handlers::config)
    };
}

#[derive(Debug, ::thiserror::Error)]
enum StartUpError {
    #[error("DATABASE_URL is not set")]
    DatabaseUrlIsNotSet,
    #[error("Database IO error: {0}")]
    DbErr(#[from] DbErr),
    #[error("general IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("{0}")]
    Classroom(#[from] ClassroomManagerError),
}

#[actix_web::main]
async fn main() -> Result<(), StartUpError> {
    dotenv().ok();

    env_logger::init();

    trace!("TRACE level enabled");

    let settings = Settings::parse();

    let database_url = settings
        .database_url()
        .ok_or(StartUpError::DatabaseUrlIsNotSet)?;

    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;

    match settings.command.clone().unwrap_or_default() {
        Command::Serve => {
            let registry = Data::new(Registry { db });
            serve(registry, &settings).await?;
        }
        Command::AddClass { name, description } => {
            let manager = ClassroomManager::create(&db, &name, &description).await?;
            println!("{} (id: {})", manager.classroom, manager.classroom.id);
        }
    }

    Ok(())
}

async fn serve(registry: Data<Registry>, settings: &Settings) -> std::io::Result<()> {
    info!("listening on {}:{}", settings.host, settings.port);

    HttpServer::new(move || app!().app_data(Data::clone(&registry)))
        .workers(2)
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await
}
