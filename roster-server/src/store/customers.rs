//! Customer store

use parking_lot::RwLock;

use shared::error::{ApiError, ApiResult};
use shared::models::Customer;

/// In-memory customer store
///
/// Read-only after construction; the demonstration data set ships exactly
/// two records.
pub struct CustomerStore {
    records: RwLock<Vec<Customer>>,
}

impl CustomerStore {
    pub fn new(records: Vec<Customer>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store seeded with the demonstration records
    pub fn with_sample_data() -> Self {
        Self::new(vec![
            Customer {
                id: 1,
                name: "John Smith".to_string(),
                email: Some("john.smith@example.com".to_string()),
                created_at: 1_700_000_000,
            },
            Customer {
                id: 2,
                name: "Jane Miller".to_string(),
                email: None,
                created_at: 1_700_086_400,
            },
        ])
    }

    /// All records, in insertion order
    pub fn list(&self) -> Vec<Customer> {
        self.records.read().clone()
    }

    /// Look up a customer by id
    pub fn get(&self, id: i64) -> ApiResult<Customer> {
        self.records
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Customer {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_has_two_records() {
        let store = CustomerStore::with_sample_data();
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn get_finds_seeded_customer() {
        let store = CustomerStore::with_sample_data();
        assert_eq!(store.get(1).unwrap().name, "John Smith");
    }

    #[test]
    fn get_missing_reports_not_found_with_id() {
        let store = CustomerStore::with_sample_data();
        let err = store.get(99).unwrap_err();
        assert!(err.to_string().contains("99"));
    }
}
