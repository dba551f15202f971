// Domain records shared by every example: the geographic hierarchy and the package catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Error types for record construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Blank value for field: {0}")]
    BlankField(&'static str),
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ModelError> {
    value.ok_or(ModelError::MissingRequiredField(field))
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ModelError> {
    let value = required(field, value)?;
    if value.trim().is_empty() {
        return Err(ModelError::BlankField(field));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCity")]
pub struct City {
    id: u64,
    name: String,
    population: u32,
}

impl City {
    pub fn new(id: u64, name: impl Into<String>, population: u32) -> Result<Self, ModelError> {
        Self::builder().id(id).name(name).population(population).build()
    }

    pub fn builder() -> CityBuilder {
        CityBuilder::default()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u32 {
        self.population
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.population)
    }
}

#[derive(Debug, Default, Clone)]
pub struct CityBuilder {
    id: Option<u64>,
    name: Option<String>,
    population: Option<u32>,
}

impl CityBuilder {
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn population(mut self, population: u32) -> Self {
        self.population = Some(population);
        self
    }

    pub fn build(self) -> Result<City, ModelError> {
        Ok(City {
            id: required("id", self.id)?,
            name: required_text("name", self.name)?,
            population: required("population", self.population)?,
        })
    }
}

#[derive(Deserialize)]
struct RawCity {
    id: Option<u64>,
    name: Option<String>,
    population: Option<u32>,
}

impl TryFrom<RawCity> for City {
    type Error = ModelError;

    fn try_from(raw: RawCity) -> Result<Self, Self::Error> {
        CityBuilder {
            id: raw.id,
            name: raw.name,
            population: raw.population,
        }
        .build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct State {
    id: u64,
    name: String,
    cities: Vec<City>,
}

impl State {
    pub fn new(id: u64, name: impl Into<String>, cities: Vec<City>) -> Result<Self, ModelError> {
        Self::builder().id(id).name(name).cities(cities).build()
    }

    pub fn builder() -> StateBuilder {
        StateBuilder::default()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

#[derive(Debug, Default, Clone)]
pub struct StateBuilder {
    id: Option<u64>,
    name: Option<String>,
    cities: Vec<City>,
}

impl StateBuilder {
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn city(mut self, city: City) -> Self {
        self.cities.push(city);
        self
    }

    pub fn cities(mut self, cities: impl IntoIterator<Item = City>) -> Self {
        self.cities.extend(cities);
        self
    }

    pub fn build(self) -> Result<State, ModelError> {
        Ok(State {
            id: required("id", self.id)?,
            name: required_text("name", self.name)?,
            cities: self.cities,
        })
    }
}

// A state without a "cities" entry simply owns no cities
#[derive(Deserialize)]
struct RawState {
    id: Option<u64>,
    name: Option<String>,
    #[serde(default)]
    cities: Vec<City>,
}

impl TryFrom<RawState> for State {
    type Error = ModelError;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        StateBuilder {
            id: raw.id,
            name: raw.name,
            cities: raw.cities,
        }
        .build()
    }
}

/// The (hotel, flight) pair that decides whether two offers are the same bookable combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
    pub hotel: String,
    pub flight: String,
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.hotel, self.flight)
    }
}

/// A package offer. Prices are not checked for comparability here; a NaN price is
/// rejected once the package takes part in consolidation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPackage")]
pub struct Package {
    hotel: String,
    flight: String,
    price: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ChildPackage>,
}

impl Package {
    pub fn new(
        hotel: impl Into<String>,
        flight: impl Into<String>,
        price: f64,
    ) -> Result<Self, ModelError> {
        Self::builder().hotel(hotel).flight(flight).price(price).build()
    }

    pub fn builder() -> PackageBuilder {
        PackageBuilder::default()
    }

    pub fn hotel(&self) -> &str {
        &self.hotel
    }

    pub fn flight(&self) -> &str {
        &self.flight
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn children(&self) -> &[ChildPackage] {
        &self.children
    }

    pub fn identity(&self) -> IdentityKey {
        IdentityKey {
            hotel: self.hotel.clone(),
            flight: self.flight.clone(),
        }
    }

    /// Builds a new package with the same offer and the given children, replacing any it had.
    pub fn with_children(self, children: Vec<ChildPackage>) -> Self {
        Self { children, ..self }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{} @ {}", self.hotel, self.flight, self.price)?;
        if !self.children.is_empty() {
            let children: Vec<String> = self.children.iter().map(|c| c.to_string()).collect();
            write!(f, " [{}]", children.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PackageBuilder {
    hotel: Option<String>,
    flight: Option<String>,
    price: Option<f64>,
}

impl PackageBuilder {
    pub fn hotel(mut self, hotel: impl Into<String>) -> Self {
        self.hotel = Some(hotel.into());
        self
    }

    pub fn flight(mut self, flight: impl Into<String>) -> Self {
        self.flight = Some(flight.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn build(self) -> Result<Package, ModelError> {
        Ok(Package {
            hotel: required_text("hotel", self.hotel)?,
            flight: required_text("flight", self.flight)?,
            price: required("price", self.price)?,
            children: Vec::new(),
        })
    }
}

#[derive(Deserialize)]
struct RawPackage {
    hotel: Option<String>,
    flight: Option<String>,
    price: Option<f64>,
}

impl TryFrom<RawPackage> for Package {
    type Error = ModelError;

    fn try_from(raw: RawPackage) -> Result<Self, Self::Error> {
        PackageBuilder {
            hotel: raw.hotel,
            flight: raw.flight,
            price: raw.price,
        }
        .build()
    }
}

/// Snapshot of one member of a consolidated group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildPackage {
    hotel: String,
    flight: String,
    price: f64,
}

impl ChildPackage {
    pub fn hotel(&self) -> &str {
        &self.hotel
    }

    pub fn flight(&self) -> &str {
        &self.flight
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl From<&Package> for ChildPackage {
    fn from(package: &Package) -> Self {
        Self {
            hotel: package.hotel.clone(),
            flight: package.flight.clone(),
            price: package.price,
        }
    }
}

impl fmt::Display for ChildPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{} @ {}", self.hotel, self.flight, self.price)
    }
}
