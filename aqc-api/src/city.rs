//! Static registry of cities the pollution backend reports on.

/// A city the backend can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub id: u32,
    pub name: &'static str,
    pub country: &'static str,
}

/// All known cities, in selector display order.
pub static CITIES: [City; 6] = [
    City { id: 1, name: "Tokyo", country: "Japan" },
    City { id: 2, name: "Barcelona", country: "Spain" },
    City { id: 3, name: "London", country: "United Kingdom" },
    City { id: 4, name: "Ankara", country: "Turkey" },
    City { id: 5, name: "Mumbai", country: "India" },
    City { id: 6, name: "Madrid", country: "Spain" },
];

/// City used when an id has no registry entry.
pub const DEFAULT_CITY_NAME: &str = "Ankara";

impl City {
    pub fn all() -> &'static [City] {
        &CITIES
    }

    pub fn by_id(id: u32) -> Option<&'static City> {
        CITIES.iter().find(|city| city.id == id)
    }

    /// Display name for an id, falling back to the default city for
    /// unknown ids (the backend always needs some city name).
    pub fn name_for_id(id: u32) -> &'static str {
        City::by_id(id).map_or(DEFAULT_CITY_NAME, |city| city.name)
    }
}
