use crate::soda::SodaClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub soda: SodaClient,
    /// Species selector options, fetched once at startup and immutable after.
    pub species: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(soda: SodaClient, species: Vec<String>) -> Self {
        Self {
            soda,
            species: Arc::new(species),
        }
    }
}
