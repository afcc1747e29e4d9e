use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::error::{ApiError, ApiResult};
use crate::models::appointment::{Appointment, AppointmentUpdate, VisitKind};
use crate::models::doctor::Doctor;

/// Roster every process starts with.
const SEED_DOCTORS: [(&str, &str); 2] = [("Julius", "Hilbert"), ("John", "Smith")];

struct Collections {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    next_appointment_id: u32,
}

/// Owns both in-memory collections. One mutex guards the pair: there is
/// no per-record isolation, so interleaved mutations from concurrent
/// workers could otherwise break id uniqueness.
pub struct ClinicStore {
    inner: Mutex<Collections>,
}

impl ClinicStore {
    pub fn with_seed_doctors() -> Self {
        let doctors = SEED_DOCTORS
            .iter()
            .enumerate()
            .map(|(i, (first_name, last_name))| Doctor {
                id: i as u32 + 1,
                first_name: (*first_name).to_string(),
                last_name: (*last_name).to_string(),
            })
            .collect();

        ClinicStore {
            inner: Mutex::new(Collections {
                doctors,
                appointments: Vec::new(),
                next_appointment_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().expect("clinic store mutex poisoned")
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        self.lock().doctors.clone()
    }

    pub fn doctor_exists(&self, id: u32) -> bool {
        self.lock().doctors.iter().any(|doctor| doctor.id == id)
    }

    pub fn appointment(&self, id: u32) -> ApiResult<Appointment> {
        self.lock()
            .appointments
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    /// Appends a new appointment, assigning its id from the store's
    /// counter so ids stay unique across interleaved creates and
    /// deletes.
    pub fn insert_appointment(
        &self,
        first_name: String,
        last_name: String,
        time: DateTime<Utc>,
        kind: VisitKind,
        doctor: u32,
    ) -> Appointment {
        let mut inner = self.lock();
        let appointment = Appointment {
            id: inner.next_appointment_id,
            first_name,
            last_name,
            time,
            kind,
            doctor,
        };
        inner.next_appointment_id += 1;
        inner.appointments.push(appointment.clone());
        appointment
    }

    /// Partial merge: only fields carried by `update` overwrite the
    /// stored record.
    pub fn update_appointment(&self, id: u32, update: AppointmentUpdate) -> ApiResult<Appointment> {
        let mut inner = self.lock();
        let appointment = inner
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or(ApiError::NotFound)?;

        if let Some(first_name) = update.first_name {
            appointment.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            appointment.last_name = last_name;
        }
        if let Some(time) = update.time {
            appointment.time = time;
        }
        if let Some(kind) = update.kind {
            appointment.kind = kind;
        }

        Ok(appointment.clone())
    }

    pub fn delete_appointment(&self, id: u32) -> ApiResult<()> {
        let mut inner = self.lock();
        let index = inner
            .appointments
            .iter()
            .position(|appointment| appointment.id == id)
            .ok_or(ApiError::NotFound)?;
        inner.appointments.remove(index);
        Ok(())
    }

    pub fn appointments_for_doctor(&self, doctor: u32) -> Vec<Appointment> {
        self.lock()
            .appointments
            .iter()
            .filter(|appointment| appointment.doctor == doctor)
            .cloned()
            .collect()
    }

    /// Appointments for `doctor` with `start <= time < end`, in
    /// insertion order.
    pub fn appointments_in_window(
        &self,
        doctor: u32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Appointment> {
        self.lock()
            .appointments
            .iter()
            .filter(|appointment| {
                appointment.doctor == doctor
                    && appointment.time >= start
                    && appointment.time < end
            })
            .cloned()
            .collect()
    }
}
