use crate::errors::DataError;
use crate::models::{HealthRow, SpeciesRow, StewardRow};
use crate::normalize::species_names;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{env, time::Duration};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://data.cityofnewyork.us/resource/nwxe-4ae8.json";

pub const BOROUGHS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Staten Island", "Queens"];

/// Row cap on per-borough queries; the largest borough stays well under it.
pub const ROW_CAP: u32 = 300_000;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub fn resolve_base_url() -> String {
    env::var("TREES_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

// Query builders escape spaces only; a quote inside a name flows through unaltered.

pub fn species_query(base: &str) -> String {
    format!("{base}?$select=spc_common,count(tree_id)&$group=spc_common").replace(' ', "%20")
}

pub fn health_query(base: &str, borough: &str, species: &str) -> String {
    format!(
        "{base}?$select=spc_common,health&$where=boroname='{borough}' AND spc_common='{species}'&$limit={ROW_CAP}"
    )
    .replace(' ', "%20")
}

pub fn steward_query(base: &str, borough: &str, species: &str) -> String {
    format!(
        "{base}?$select=steward,health,count(tree_id)&$where=boroname='{borough}' AND spc_common='{species}'&$group=steward,health"
    )
    .replace(' ', "%20")
}

#[derive(Clone)]
pub struct SodaClient {
    client: Client,
    base: String,
}

impl SodaClient {
    pub fn new(base: String) -> Result<Self, DataError> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client, base })
    }

    async fn get_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, DataError> {
        debug!(%url, "querying tree census");
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Distinct species names. Fetched once at startup, never refreshed.
    pub async fn species_list(&self) -> Result<Vec<String>, DataError> {
        let rows: Vec<SpeciesRow> = self.get_rows(&species_query(&self.base)).await?;
        let names = species_names(&rows);
        if names.is_empty() {
            return Err(DataError::empty("species list"));
        }
        Ok(names)
    }

    pub async fn health_rows(
        &self,
        borough: &str,
        species: &str,
    ) -> Result<Vec<HealthRow>, DataError> {
        self.get_rows(&health_query(&self.base, borough, species))
            .await
    }

    pub async fn steward_rows(
        &self,
        borough: &str,
        species: &str,
    ) -> Result<Vec<StewardRow>, DataError> {
        self.get_rows(&steward_query(&self.base, borough, species))
            .await
    }
}
