use crate::app_config::Places;
use crate::domain::Location;

/// Address autocomplete over a fixed set of known places.
#[derive(Debug)]
pub struct PlaceCatalog {
    locations: Vec<Location>,
    min_query_len: usize,
}

impl PlaceCatalog {
    pub fn new(locations: Vec<Location>, min_query_len: usize) -> Self {
        PlaceCatalog { locations, min_query_len }
    }

    pub fn from_config(config: &Places) -> Self {
        PlaceCatalog::new(config.locations().to_vec(), config.min_query_len())
    }

    /// Places whose address contains `query`, ignoring case. Too short queries match nothing.
    pub fn predictions<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Location> + 'a {
        let needle = query.trim().to_lowercase();
        let long_enough = needle.chars().count() >= self.min_query_len;

        self.locations
            .iter()
            .filter(move |location| long_enough && location.address().to_lowercase().contains(&needle))
    }

    pub fn resolve(&self, query: &str) -> Option<&Location> {
        self.predictions(query).next()
    }
}
