use crate::models::doctor::Doctor;
use crate::store::ClinicStore;

pub async fn list_doctors(store: &ClinicStore) -> Vec<Doctor> {
    store.doctors()
}
