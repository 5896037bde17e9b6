//! Geocoded places attached to itinerary items.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair as returned by the geocoder.
///
/// Carried through for map rendering only; place comparison never looks at
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lng.to_bits().hash(state);
    }
}

/// A place an itinerary item starts or ends at.
///
/// Only `address` is required. The other fields are filled in by geocoding
/// upstream and may be missing.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Address as the user typed it.
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl Location {
    /// Create a location with only an address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            formatted_address: None,
            city: None,
            country: None,
            coordinates: None,
            place_id: None,
        }
    }

    /// Set the geocoded city and country.
    pub fn with_locality(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.country = Some(country.into());
        self
    }

    /// Set the geocoded coordinates.
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lng });
        self
    }

    /// Returns `(city, country)` when both are present and non-empty.
    pub fn locality(&self) -> Option<(&str, &str)> {
        let city = self.city.as_deref().filter(|c| !c.is_empty())?;
        let country = self.country.as_deref().filter(|c| !c.is_empty())?;
        Some((city, country))
    }

    /// Returns true if both locations refer to the same place.
    ///
    /// Two locations match when both have a city and country and those are
    /// equal, or when their address strings are identical. Coordinates are
    /// ignored: independently geocoded strings for one place rarely agree to
    /// the last decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::domain::Location;
    ///
    /// let airport = Location::new("CDG Terminal 2").with_locality("Paris", "France");
    /// let hotel = Location::new("12 Rue de Rivoli").with_locality("Paris", "France");
    /// assert!(airport.same_place(&hotel));
    ///
    /// let station = Location::new("Gare du Nord");
    /// assert!(!station.same_place(&hotel));
    /// assert!(station.same_place(&Location::new("Gare du Nord")));
    /// ```
    pub fn same_place(&self, other: &Location) -> bool {
        let same_locality = match (self.locality(), other.locality()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        same_locality || self.address == other.address
    }

    /// Best label for display: the formatted address if geocoded.
    pub fn label(&self) -> &str {
        self.formatted_address.as_deref().unwrap_or(&self.address)
    }
}
