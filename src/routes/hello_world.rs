use actix_web::HttpResponse;

pub async fn handler() -> HttpResponse {
    tracing::info!("Hello World Handler");
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to the movie API!")
}

pub async fn heartbeat() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Have fun with the project!")
}
