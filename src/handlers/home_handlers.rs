use actix_web::{get, http::header::ContentType, HttpResponse, Responder};

/// GET /
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body("<h1>Postboard API</h1><p>Posts are served under /api/posts.</p>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn index_returns_html_greeting() {
        let app = test::init_service(App::new().service(index)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("Postboard API"));
    }
}
