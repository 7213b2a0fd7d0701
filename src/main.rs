use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use tera::Tera;

use claude_chat_app::provider::ClaudeClient;
use claude_chat_app::session::SessionStore;
use claude_chat_app::web::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Claude chat web application");

    // The provider client is built once and shared with every handler.
    // A missing API key only surfaces when the first call is attempted.
    let client = Data::new(ClaudeClient::from_env());
    let sessions = Data::new(SessionStore::new());

    // Initialize template engine
    let mut tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);
    let tera = Data::new(tera);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Listening on {}", bind_addr);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(tera.clone())
            .app_data(client.clone())
            .app_data(sessions.clone())
            .app_data(routes::json_error_handler())
            .configure(routes::configure)
            .service(fs::Files::new("/static", "./static"))
    })
    .bind(bind_addr)?
    .run()
    .await
}
