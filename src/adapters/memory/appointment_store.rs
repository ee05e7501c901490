use crate::domain::{Appointment, AppointmentId, NewAppointment, VisitDate};
use crate::ports::appointment_store::{
    AppointmentStore as AppointmentStoreTrait, Result, StoreError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

#[derive(Default)]
struct State {
    by_date: BTreeMap<VisitDate, Appointment>,
    last_id: i64,
}

/// In-memory implementation of AppointmentStore
///
/// A single mutex serialises inserts, so the uniqueness check and the write
/// happen atomically. Ids start at 1 and increase by one per insert.
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct AppointmentStore {
    state: Mutex<State>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored appointments
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .by_date
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AppointmentStoreTrait for AppointmentStore {
    async fn exists(&self, visit_date: VisitDate) -> Result<bool> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(state.by_date.contains_key(&visit_date))
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if state.by_date.contains_key(&appointment.visit_date) {
            return Err(StoreError::Conflict(appointment.visit_date));
        }

        state.last_id += 1;
        let created = Appointment {
            id: AppointmentId::from_i64(state.last_id),
            first_name: appointment.first_name,
            last_name: appointment.last_name,
            visit_date: appointment.visit_date,
            created_at: Utc::now(),
        };
        state.by_date.insert(created.visit_date, created.clone());

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_appointment(first: &str, date: &str) -> NewAppointment {
        NewAppointment {
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            visit_date: VisitDate::parse(date).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = AppointmentStore::new();

        let first = store.insert(new_appointment("A", "2075-06-15")).await.unwrap();
        let second = store.insert(new_appointment("B", "2075-06-16")).await.unwrap();

        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_exists_reflects_inserts() {
        let store = AppointmentStore::new();
        let date = VisitDate::parse("2075-06-15").unwrap();

        assert!(!store.exists(date).await.unwrap());
        store.insert(new_appointment("A", "2075-06-15")).await.unwrap();
        assert!(store.exists(date).await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_same_date_conflicts() {
        let store = AppointmentStore::new();
        store.insert(new_appointment("A", "2075-06-15")).await.unwrap();

        let result = store.insert(new_appointment("B", "2075-06-15")).await;

        assert!(matches!(result, Err(StoreError::Conflict(d)) if d.to_string() == "2075-06-15"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_same_date_single_winner() {
        let store = Arc::new(AppointmentStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert(new_appointment(&format!("P{i}"), "2075-07-01"))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(StoreError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(store.len(), 1);
    }
}
