//! GeoIP2 record models and CSV row rendering.
//!
//! Each database variant decodes into its own struct; every field is
//! optional because MMDB records carry only the keys that are present.
//! Rendering matches the classic dump format: missing strings become empty
//! fields, missing numbers become `0`, missing flags become `false`, and
//! localized name maps contribute their English entry only.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Deserialize;

/// Localized name map keyed by language code.
pub type Names = BTreeMap<String, String>;

/// A named place with a GeoNames identifier (city level).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Place {
    pub geoname_id: Option<u32>,
    pub names: Option<Names>,
}

/// Continent portion of City and Country records.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Continent {
    pub code: Option<String>,
    pub geoname_id: Option<u32>,
    pub names: Option<Names>,
}

/// Country portion, shared by the country, registered-country and
/// city-level record shapes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Country {
    pub geoname_id: Option<u32>,
    pub is_in_european_union: Option<bool>,
    pub iso_code: Option<String>,
    pub names: Option<Names>,
}

/// Represented country: a country shape plus the representation kind
/// (e.g. "military").
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RepresentedCountry {
    pub geoname_id: Option<u32>,
    pub is_in_european_union: Option<bool>,
    pub iso_code: Option<String>,
    pub names: Option<Names>,
    #[serde(rename = "type")]
    pub representation_type: Option<String>,
}

/// Coordinates and related location data.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Location {
    pub accuracy_radius: Option<u16>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub metro_code: Option<u16>,
    pub time_zone: Option<String>,
}

/// Postal code data.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Postal {
    pub code: Option<String>,
}

/// A country subdivision (state, province, ...).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Subdivision {
    pub geoname_id: Option<u32>,
    pub iso_code: Option<String>,
    pub names: Option<Names>,
}

/// Network traits flags.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Traits {
    pub is_anonymous_proxy: Option<bool>,
    pub is_satellite_provider: Option<bool>,
}

/// Record shape of City databases.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CityRecord {
    pub city: Option<Place>,
    pub continent: Option<Continent>,
    pub country: Option<Country>,
    pub location: Option<Location>,
    pub postal: Option<Postal>,
    pub registered_country: Option<Country>,
    pub represented_country: Option<RepresentedCountry>,
    pub subdivisions: Option<Vec<Subdivision>>,
    pub traits: Option<Traits>,
}

/// Record shape of Country databases.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CountryRecord {
    pub continent: Option<Continent>,
    pub country: Option<Country>,
    pub registered_country: Option<Country>,
    pub represented_country: Option<RepresentedCountry>,
    pub traits: Option<Traits>,
}

/// Record shape of Connection Type databases.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConnectionTypeRecord {
    pub connection_type: Option<String>,
}

/// Record shape of ISP databases.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct IspRecord {
    pub autonomous_system_number: Option<u32>,
    pub autonomous_system_organization: Option<String>,
    pub isp: Option<String>,
    pub organization: Option<String>,
}

/// Column layout of City exports.
pub const CITY_COLUMNS: &[&str] = &[
    "prefix",
    "city_geoname_id",
    "city_name",
    "continent_code",
    "continent_geoname_id",
    "continent_name",
    "country_geoname_id",
    "country_is_in_european_union",
    "country_iso_code",
    "country_name",
    "location_accuracy_radius",
    "location_latitude",
    "location_longitude",
    "location_metro_code",
    "location_time_zone",
    "postal_code",
    "registered_country_geoname_id",
    "registered_country_is_in_european_union",
    "registered_country_iso_code",
    "registered_country_name",
    "represented_country_geoname_id",
    "represented_country_is_in_european_union",
    "represented_country_iso_code",
    "represented_country_name",
    "represented_country_type",
    "subdivisions_geoname_id",
    "subdivisions_iso_code",
    "subdivisions_name",
    "traits_is_anonymous_proxy",
    "traits_is_satellite_provider",
];

/// Column layout of Country exports.
pub const COUNTRY_COLUMNS: &[&str] = &[
    "prefix",
    "continent_code",
    "continent_geoname_id",
    "continent_name",
    "country_geoname_id",
    "country_is_in_european_union",
    "country_name",
    "registered_country_geoname_id",
    "registered_country_is_in_european_union",
    "registered_country_iso_code",
    "registered_country_name",
    "represented_country_geoname_id",
    "represented_country_is_in_european_union",
    "represented_country_iso_code",
    "represented_country_type",
    "traits_is_anonymous_proxy",
    "traits_is_satellite_provider",
];

/// Column layout of Connection Type exports.
pub const CONNECTION_TYPE_COLUMNS: &[&str] = &["prefix", "connection_type"];

/// Column layout of ISP exports.
pub const ISP_COLUMNS: &[&str] = &[
    "prefix",
    "autonomous_system_number",
    "autonomous_system_organization",
    "isp",
    "organization",
];

/// Render an optional numeric or boolean field, defaulting missing values
/// to the type's zero value (`0`, `false`).
fn scalar<T: Display + Default>(value: Option<T>) -> String {
    value.unwrap_or_default().to_string()
}

/// Render an optional string field, defaulting to empty.
fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Render the English entry of a localized name map.
fn english(names: &Option<Names>) -> String {
    names
        .as_ref()
        .and_then(|n| n.get("en"))
        .cloned()
        .unwrap_or_default()
}

impl CityRecord {
    /// Render this record as one CSV row, prefix first.
    pub fn to_row(&self, prefix: String) -> Vec<String> {
        let city = self.city.clone().unwrap_or_default();
        let continent = self.continent.clone().unwrap_or_default();
        let country = self.country.clone().unwrap_or_default();
        let location = self.location.clone().unwrap_or_default();
        let postal = self.postal.clone().unwrap_or_default();
        let registered = self.registered_country.clone().unwrap_or_default();
        let represented = self.represented_country.clone().unwrap_or_default();
        let traits = self.traits.clone().unwrap_or_default();

        let mut row = vec![
            prefix,
            scalar(city.geoname_id),
            english(&city.names),
            text(&continent.code),
            scalar(continent.geoname_id),
            english(&continent.names),
            scalar(country.geoname_id),
            scalar(country.is_in_european_union),
            text(&country.iso_code),
            english(&country.names),
            scalar(location.accuracy_radius),
            scalar(location.latitude),
            scalar(location.longitude),
            scalar(location.metro_code),
            text(&location.time_zone),
            text(&postal.code),
            scalar(registered.geoname_id),
            scalar(registered.is_in_european_union),
            text(&registered.iso_code),
            english(&registered.names),
            scalar(represented.geoname_id),
            scalar(represented.is_in_european_union),
            text(&represented.iso_code),
            english(&represented.names),
            text(&represented.representation_type),
        ];

        // Only the first subdivision is exported; records without one still
        // fill all three columns.
        match self.subdivisions.as_ref().and_then(|s| s.first()) {
            Some(subdivision) => {
                row.push(scalar(subdivision.geoname_id));
                row.push(text(&subdivision.iso_code));
                row.push(english(&subdivision.names));
            }
            None => row.extend([String::new(), String::new(), String::new()]),
        }

        row.push(scalar(traits.is_anonymous_proxy));
        row.push(scalar(traits.is_satellite_provider));
        row
    }
}

impl CountryRecord {
    /// Render this record as one CSV row, prefix first.
    pub fn to_row(&self, prefix: String) -> Vec<String> {
        let continent = self.continent.clone().unwrap_or_default();
        let country = self.country.clone().unwrap_or_default();
        let registered = self.registered_country.clone().unwrap_or_default();
        let represented = self.represented_country.clone().unwrap_or_default();
        let traits = self.traits.clone().unwrap_or_default();

        vec![
            prefix,
            text(&continent.code),
            scalar(continent.geoname_id),
            english(&continent.names),
            scalar(country.geoname_id),
            scalar(country.is_in_european_union),
            english(&country.names),
            scalar(registered.geoname_id),
            scalar(registered.is_in_european_union),
            text(&registered.iso_code),
            english(&registered.names),
            scalar(represented.geoname_id),
            scalar(represented.is_in_european_union),
            text(&represented.iso_code),
            text(&represented.representation_type),
            scalar(traits.is_anonymous_proxy),
            scalar(traits.is_satellite_provider),
        ]
    }
}

impl ConnectionTypeRecord {
    /// Render this record as one CSV row, prefix first.
    pub fn to_row(&self, prefix: String) -> Vec<String> {
        vec![prefix, text(&self.connection_type)]
    }
}

impl IspRecord {
    /// Render this record as one CSV row, prefix first.
    pub fn to_row(&self, prefix: String) -> Vec<String> {
        vec![
            prefix,
            scalar(self.autonomous_system_number),
            text(&self.autonomous_system_organization),
            text(&self.isp),
            text(&self.organization),
        ]
    }
}
