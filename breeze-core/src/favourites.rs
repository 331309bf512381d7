use thiserror::Error;

/// Hard cap on the number of favourite cities.
pub const MAX_FAVOURITES: usize = 3;

/// Rejections reported by the favourites store. These are user-facing
/// warnings, not failures: the store is left untouched and the caller
/// prints the message and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FavouritesError {
    #[error("'{0}' is already in favourites")]
    Duplicate(String),

    #[error("you already have {MAX_FAVOURITES} favourite cities; remove one before adding another")]
    Full,

    #[error("'{0}' is not in your favourites")]
    NotFound(String),
}

/// In-memory ordered list of favourite city names.
///
/// Insertion order is preserved, entries are unique (case-sensitive exact
/// match) and the list never grows beyond [`MAX_FAVOURITES`]. State lives
/// for the process lifetime only; nothing is persisted.
#[derive(Debug, Default)]
pub struct Favourites {
    cities: Vec<String>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a city. The duplicate check runs before the capacity check,
    /// so adding a city that is already stored reports `Duplicate` even
    /// when the list is full.
    pub fn add(&mut self, city: &str) -> Result<(), FavouritesError> {
        if self.cities.iter().any(|c| c == city) {
            return Err(FavouritesError::Duplicate(city.to_string()));
        }
        if self.cities.len() >= MAX_FAVOURITES {
            return Err(FavouritesError::Full);
        }
        self.cities.push(city.to_string());
        Ok(())
    }

    pub fn remove(&mut self, city: &str) -> Result<(), FavouritesError> {
        let pos = self
            .cities
            .iter()
            .position(|c| c == city)
            .ok_or_else(|| FavouritesError::NotFound(city.to_string()))?;
        self.cities.remove(pos);
        Ok(())
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }
}
