// Reporting transformations over the geographic hierarchy.
// Every function here is independent and leaves its input untouched.

use crate::model::{City, State};
use std::fmt;
use thiserror::Error;
use tracing::warn;

pub const BIG_CITY_THRESHOLD: u32 = 100_000;
pub const NAME_SEPARATOR: &str = ", ";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("State {state} has no cities")]
    EmptyCollection { state: String },
}

/// City names of one state, sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCities {
    pub state: String,
    pub cities: Vec<String>,
}

impl fmt::Display for StateCities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.state, self.cities.join(NAME_SEPARATOR))
    }
}

/// Cities of one state at or above the big-city threshold, in stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct BigCities {
    pub state: String,
    pub cities: Vec<String>,
}

impl fmt::Display for BigCities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has big cities: {}",
            self.state,
            self.cities.join(NAME_SEPARATOR)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationMetric {
    Total,
    Highest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationReport {
    pub state: String,
    pub metric: PopulationMetric,
    pub population: u64,
}

impl fmt::Display for PopulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.metric {
            PopulationMetric::Total => "Population",
            PopulationMetric::Highest => "Higher Population",
        };
        write!(f, "{} - {}: {}", self.state, label, self.population)
    }
}

/// Upper-cases every element, keeping order.
pub fn uppercase<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_uppercase())
        .collect()
}

/// Every city of every state, sorted ascending by name.
pub fn flatten_sorted_cities(states: &[State]) -> Vec<&City> {
    let mut cities: Vec<&City> = states.iter().flat_map(|s| s.cities()).collect();
    cities.sort_by(|a, b| a.name().cmp(b.name()));
    cities
}

pub fn city_names_by_state(states: &[State]) -> Vec<StateCities> {
    states
        .iter()
        .map(|state| {
            let mut cities: Vec<&City> = state.cities().iter().collect();
            cities.sort_by(|a, b| a.name().cmp(b.name()));
            StateCities {
                state: state.name().to_string(),
                cities: cities.iter().map(|c| c.name().to_string()).collect(),
            }
        })
        .collect()
}

pub fn big_cities_by_state(states: &[State], threshold: u32) -> Vec<BigCities> {
    states
        .iter()
        .map(|state| BigCities {
            state: state.name().to_string(),
            cities: state
                .cities()
                .iter()
                .filter(|city| city.population() >= threshold)
                .map(|city| city.name().to_string())
                .collect(),
        })
        .collect()
}

pub fn population_by_state(states: &[State]) -> Vec<PopulationReport> {
    states
        .iter()
        .map(|state| PopulationReport {
            state: state.name().to_string(),
            metric: PopulationMetric::Total,
            population: state
                .cities()
                .iter()
                .map(|c| u64::from(c.population()))
                .sum::<u64>(),
        })
        .collect()
}

/// Highest city population per state. A state with no cities has no maximum.
pub fn max_population_by_state(states: &[State]) -> Result<Vec<PopulationReport>, ReportError> {
    states
        .iter()
        .map(|state| {
            let highest = state.cities().iter().map(City::population).max();
            match highest {
                Some(population) => Ok(PopulationReport {
                    state: state.name().to_string(),
                    metric: PopulationMetric::Highest,
                    population: u64::from(population),
                }),
                None => {
                    warn!(state = state.name(), "no cities to take a maximum over");
                    Err(ReportError::EmptyCollection {
                        state: state.name().to_string(),
                    })
                }
            }
        })
        .collect()
}

pub fn total_population<'a, I>(cities: I) -> u64
where
    I: IntoIterator<Item = &'a City>,
{
    cities.into_iter().fold(0u64, |mut total, city| {
        total += u64::from(city.population());
        total
    })
}

/// City names in stored order, accumulated into a fresh Vec.
pub fn city_names(state: &State) -> Vec<String> {
    let (first, second) = state.cities().split_at(state.cities().len() / 2);
    let accumulate = |mut names: Vec<String>, city: &City| {
        names.push(city.name().to_string());
        names
    };

    // Each half accumulates on its own; the halves are combined in order
    let mut names = first.iter().fold(Vec::new(), accumulate);
    names.extend(second.iter().fold(Vec::new(), accumulate));
    names
}
