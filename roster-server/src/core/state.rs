use std::sync::Arc;

use crate::core::Config;
use crate::store::{CustomerStore, PeopleStore};

/// Server state - shared handles to every store
///
/// The stores are owned here and passed to handlers by cloning the state;
/// there is no process-wide singleton. `Arc` makes the clone shallow.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub people: Arc<PeopleStore>,
    pub customers: Arc<CustomerStore>,
}

impl ServerState {
    /// Initialize state from configuration
    ///
    /// The customer store starts with its sample records; the people store
    /// starts empty.
    pub fn initialize(config: &Config) -> Self {
        Self {
            config: config.clone(),
            people: Arc::new(PeopleStore::new()),
            customers: Arc::new(CustomerStore::with_sample_data()),
        }
    }
}
