use actix_web::web;

pub mod biometrics;
pub mod debug;
pub mod home;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::home)
        .service(debug::debug_collection)
        .service(biometrics::ingest)
        .service(biometrics::raw)
        .service(biometrics::filtered)
        .service(biometrics::recent);
}
