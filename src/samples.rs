// Built-in sample data used by the driver and the tests

use crate::model::{City, ModelError, Package, State};

pub fn sample_states() -> Result<Vec<State>, ModelError> {
    let sao_paulo = State::builder()
        .id(1)
        .name("São Paulo")
        .city(City::new(1, "São Caetano do Sul", 80_000)?)
        .city(City::new(2, "Santo André", 100_000)?)
        .city(City::new(3, "São Bernardo do Campo", 150_000)?)
        .build()?;

    let rio_de_janeiro = State::builder()
        .id(2)
        .name("Rio de Janeiro")
        .city(City::new(4, "Rio de Janeiro", 200_000)?)
        .city(City::new(5, "São Gonçalo", 50_000)?)
        .city(City::new(6, "Parati", 40_000)?)
        .build()?;

    Ok(vec![sao_paulo, rio_de_janeiro])
}

pub fn sample_packages() -> Result<Vec<Package>, ModelError> {
    [
        ("Hotel Diogo", "789", 110.0),
        ("Hotel Serrano", "123", 110.0),
        ("Hotel Serrano", "123", 99.0),
        ("Hotel Diogo", "789", 100.0),
        ("Hotel Serrano", "123", 120.0),
        ("Hotel Diogo", "789", 120.0),
    ]
    .into_iter()
    .map(|(hotel, flight, price)| Package::new(hotel, flight, price))
    .collect()
}

pub fn sample_words() -> Vec<&'static str> {
    vec!["First", "Second", "Third"]
}
