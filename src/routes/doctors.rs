use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::handlers::doctors::list_doctors;
use crate::store::ClinicStore;

#[get("")]
async fn doctors(store: web::Data<ClinicStore>) -> impl Responder {
    let doctors = list_doctors(&store).await;
    HttpResponse::Ok().json(json!({ "doctors": doctors }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(doctors);
}
