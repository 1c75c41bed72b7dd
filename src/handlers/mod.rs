pub mod home_handlers;
pub mod post_handlers;

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use log::warn;

use crate::errors::ApiError;

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
    ApiError::BadRequest("リクエストの形式が正しくありません".to_string()).into()
}

/// Registers every route. Shared by `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(home_handlers::index)
        .service(
            web::scope("/api")
                .service(post_handlers::list_posts)
                .service(post_handlers::create_post)
                .service(post_handlers::delete_post),
        );
}
