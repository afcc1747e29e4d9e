use actix_web::{HttpResponse, delete, get, put, web};
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::appointments;
use crate::models::appointment::AppointmentPatch;
use crate::store::ClinicStore;

#[get("/{id}")]
async fn appointment(
    store: web::Data<ClinicStore>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let appointment = appointments::get_appointment(&store, id).await?;
    Ok(HttpResponse::Ok().json(json!({ "appointment": appointment })))
}

#[put("/{id}")]
async fn update(
    store: web::Data<ClinicStore>,
    path: web::Path<u32>,
    body: web::Json<AppointmentPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let updated_appointment = appointments::update_appointment(&store, id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "appointment": updated_appointment })))
}

#[delete("/{id}")]
async fn remove(
    store: web::Data<ClinicStore>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    appointments::delete_appointment(&store, id).await?;
    Ok(HttpResponse::Ok().json(json!({ "result": true })))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(appointment).service(update).service(remove);
}
