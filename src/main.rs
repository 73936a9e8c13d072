use actix_web::{App, HttpServer, middleware, web};

use chatdata::{config, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::Settings::from_env();

    // Ensure the database directory exists
    if let Some(dir) = std::path::Path::new(&settings.database_path).parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).expect("Failed to create data directory");
    }

    let pool = db::init_pool(&settings.database_path);
    db::run_migrations(&pool);

    log::info!("Starting server at http://{}", settings.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(chatdata::configure)
    })
    .bind(settings.bind_addr.as_str())?
    .run()
    .await
}
