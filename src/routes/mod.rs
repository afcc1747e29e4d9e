pub mod appointments;
pub mod doctor;
pub mod doctors;

use actix_web::{HttpResponse, Responder, get, web};

#[get("/health/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping)
        .service(web::scope("/doctors").configure(doctors::init))
        .service(web::scope("/appointment").configure(appointments::init))
        .service(web::scope("/doctor").configure(doctor::init));
}
