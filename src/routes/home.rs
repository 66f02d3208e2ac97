use actix_web::{get, HttpResponse, Responder};

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok()
        .body("Biometric record API is running - Use /debug to check data structure")
}
