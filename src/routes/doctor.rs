use actix_web::{HttpResponse, get, post, web};
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::appointments;
use crate::models::appointment::NewAppointment;
use crate::store::ClinicStore;

#[get("/{doctor_id}")]
async fn schedule(
    store: web::Data<ClinicStore>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ApiError> {
    let doctor_id = path.into_inner();
    let appointments = appointments::appointments_for_doctor(&store, doctor_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "appointments": appointments })))
}

#[get("/{doctor_id}/date/{day}")]
async fn schedule_on_day(
    store: web::Data<ClinicStore>,
    path: web::Path<(u32, String)>,
) -> Result<HttpResponse, ApiError> {
    let (doctor_id, day) = path.into_inner();
    let appointments = appointments::appointments_on_day(&store, doctor_id, &day).await?;
    Ok(HttpResponse::Ok().json(json!({ "appointments": appointments })))
}

#[post("/{doctor_id}")]
async fn create(
    store: web::Data<ClinicStore>,
    path: web::Path<u32>,
    body: web::Json<NewAppointment>,
) -> Result<HttpResponse, ApiError> {
    let doctor_id = path.into_inner();
    let appointment = appointments::create_appointment(&store, doctor_id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({ "appointment": appointment })))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(schedule).service(schedule_on_day).service(create);
}
