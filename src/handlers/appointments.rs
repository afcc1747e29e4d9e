use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::appointment::{
    Appointment, AppointmentPatch, AppointmentUpdate, NewAppointment, VisitKind,
};
use crate::store::ClinicStore;

/// Minutes past the hour an appointment may start on.
const SLOT_MINUTES: [u32; 4] = [0, 15, 30, 45];

/// Pattern day path segments are parsed against, e.g. `20240315`.
const DAY_FORMAT: &str = "%Y%m%d";

/// Parses an ISO-8601 timestamp and checks it lands on the 15 minute
/// booking grid. Offset timestamps normalize to UTC.
pub fn parse_appointment_time(raw: &str) -> ApiResult<DateTime<Utc>> {
    let time = DateTime::parse_from_rfc3339(raw)
        .map_err(|_| ApiError::InvalidDateFormat(raw.to_string()))?
        .with_timezone(&Utc);

    if !SLOT_MINUTES.contains(&time.minute()) {
        return Err(ApiError::InvalidTimeSlot);
    }

    Ok(time)
}

pub fn parse_day(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT)
        .map_err(|_| ApiError::InvalidDateFormat(raw.to_string()))
}

fn parse_kind(index: usize) -> ApiResult<VisitKind> {
    VisitKind::from_index(index).ok_or(ApiError::InvalidKind(index))
}

/// Validates a create payload and appends the appointment. No store
/// mutation happens unless every check passes.
pub async fn create_appointment(
    store: &ClinicStore,
    doctor_id: u32,
    payload: NewAppointment,
) -> ApiResult<Appointment> {
    let kind = parse_kind(payload.kind)?;
    let time = parse_appointment_time(&payload.time)?;

    if !store.doctor_exists(doctor_id) {
        return Err(ApiError::UnknownDoctor(doctor_id));
    }

    let appointment =
        store.insert_appointment(payload.first_name, payload.last_name, time, kind, doctor_id);

    info!(
        "Booked appointment {} with doctor {} at {}",
        appointment.id, doctor_id, appointment.time
    );

    Ok(appointment)
}

pub async fn get_appointment(store: &ClinicStore, id: u32) -> ApiResult<Appointment> {
    store.appointment(id)
}

/// Validates whichever fields the patch carries, then merges them into
/// the stored appointment.
pub async fn update_appointment(
    store: &ClinicStore,
    id: u32,
    patch: AppointmentPatch,
) -> ApiResult<Appointment> {
    let kind = patch.kind.map(parse_kind).transpose()?;
    let time = patch
        .time
        .as_deref()
        .map(parse_appointment_time)
        .transpose()?;

    store.update_appointment(
        id,
        AppointmentUpdate {
            first_name: patch.first_name,
            last_name: patch.last_name,
            time,
            kind,
        },
    )
}

pub async fn delete_appointment(store: &ClinicStore, id: u32) -> ApiResult<()> {
    store.delete_appointment(id)?;
    info!("Deleted appointment {}", id);
    Ok(())
}

pub async fn appointments_for_doctor(
    store: &ClinicStore,
    doctor_id: u32,
) -> ApiResult<Vec<Appointment>> {
    if !store.doctor_exists(doctor_id) {
        return Err(ApiError::NotFound);
    }
    Ok(store.appointments_for_doctor(doctor_id))
}

/// Appointments for a doctor falling within the calendar day `raw_day`
/// (`YYYYMMDD`), taken as the UTC window `[day start, day start + 24h)`.
pub async fn appointments_on_day(
    store: &ClinicStore,
    doctor_id: u32,
    raw_day: &str,
) -> ApiResult<Vec<Appointment>> {
    if !store.doctor_exists(doctor_id) {
        return Err(ApiError::NotFound);
    }

    let day = parse_day(raw_day)?;
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1);

    Ok(store.appointments_in_window(doctor_id, start, end))
}
