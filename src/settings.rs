use ::clap::{Parser, Subcommand};

/// старое имя переменной со строкой подключения
pub const LEGACY_DATABASE_URL_VAR: &str = "DATABASE_URI";

#[derive(Parser, Debug)]
#[command(name = "classroom-rank", about = "Lists classes and collects their ratings")]
pub struct Settings {
    /// строка подключения, например `sqlite://rank.db?mode=rwc` или `postgres://...`
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Default, Clone, PartialEq, Eq)]
pub enum Command {
    /// запустить HTTP-сервер (по умолчанию)
    #[default]
    Serve,
    /// добавить класс в базу и выйти
    AddClass {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
}

impl Settings {
    pub fn database_url(&self) -> Option<String> {
        resolve_database_url(
            self.database_url.clone(),
            std::env::var(LEGACY_DATABASE_URL_VAR).ok(),
        )
    }
}

fn resolve_database_url(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    primary
        .into_iter()
        .chain(legacy)
        .find(|url| !url.trim().is_empty())
}
