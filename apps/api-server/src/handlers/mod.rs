//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod upload;

use actix_web::web;

pub use upload::UploadConfig;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .route("/signup", web::post().to(auth::signup))
            .route("/login", web::post().to(auth::login))
            // Image upload
            .route("/upload", web::post().to(upload::upload_image))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/me", web::get().to(posts::my_posts))
                    .route("/author/{id}", web::get().to(posts::author_profile))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post))
                    .route("/{id}/like", web::post().to(posts::toggle_like))
                    .route("/{id}/comments", web::post().to(posts::add_comment))
                    .route("/{id}/view", web::post().to(posts::record_view)),
            ),
    );
}
