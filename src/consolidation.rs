// Package consolidation: group duplicate offers, pick the cheapest as principal and
// attach every member of the group to it as a child

use crate::model::{ChildPackage, IdentityKey, Package};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsolidationError {
    #[error("Package {key} has no comparable price")]
    MissingPrice { key: IdentityKey },
}

/// Packages sharing one identity key, in the order they were first seen.
/// A group always holds at least its first package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageGroup {
    key: IdentityKey,
    first: Package,
    rest: Vec<Package>,
}

impl PackageGroup {
    pub fn key(&self) -> &IdentityKey {
        &self.key
    }

    pub fn members(&self) -> impl Iterator<Item = &Package> + '_ {
        std::iter::once(&self.first).chain(&self.rest)
    }

    /// Reduces the group to its principal record.
    ///
    /// A single member is returned with no children. Otherwise every member becomes a
    /// child, sorted by price (stable, so equal prices keep their input order), and the
    /// cheapest member, first seen on ties, is returned carrying that list.
    pub fn consolidate(self) -> Result<Package, ConsolidationError> {
        if self.members().any(|p| p.price().is_nan()) {
            return Err(ConsolidationError::MissingPrice { key: self.key });
        }

        let PackageGroup { key, first, rest } = self;
        if rest.is_empty() {
            return Ok(first.with_children(Vec::new()));
        }

        let mut children: Vec<ChildPackage> = std::iter::once(&first)
            .chain(&rest)
            .map(ChildPackage::from)
            .collect();
        children.sort_by(|a, b| a.price().total_cmp(&b.price()));

        let principal = rest.into_iter().fold(first, |cheapest, p| {
            if p.price() < cheapest.price() {
                p
            } else {
                cheapest
            }
        });

        debug!(
            key = %key,
            children = children.len(),
            principal_price = principal.price(),
            "consolidated package group"
        );

        Ok(principal.with_children(children))
    }
}

/// Partitions packages by identity key. Groups come out in order of first appearance.
pub fn group_by_identity<I>(packages: I) -> Vec<PackageGroup>
where
    I: IntoIterator<Item = Package>,
{
    let mut index: HashMap<IdentityKey, usize> = HashMap::new();
    let mut groups: Vec<PackageGroup> = Vec::new();

    for package in packages {
        let key = package.identity();
        match index.get(&key) {
            Some(&position) => groups[position].rest.push(package),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(PackageGroup {
                    key,
                    first: package,
                    rest: Vec::new(),
                });
            }
        }
    }

    groups
}

/// Consolidates a catalog into one record per identity key, sorted ascending by price.
pub fn consolidate<I>(packages: I) -> Result<Vec<Package>, ConsolidationError>
where
    I: IntoIterator<Item = Package>,
{
    let groups = group_by_identity(packages);
    let group_count = groups.len();

    let mut consolidated = groups
        .into_iter()
        .map(PackageGroup::consolidate)
        .collect::<Result<Vec<_>, _>>()?;

    consolidated.sort_by(|a, b| a.price().total_cmp(&b.price()));

    info!(groups = group_count, "consolidated package catalog");
    Ok(consolidated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn package(hotel: &str, flight: &str, price: f64) -> Package {
        Package::new(hotel, flight, price).unwrap()
    }

    fn sample_catalog() -> Vec<Package> {
        vec![
            package("Hotel Diogo", "789", 110.0),
            package("Hotel Serrano", "123", 110.0),
            package("Hotel Serrano", "123", 99.0),
            package("Hotel Diogo", "789", 100.0),
            package("Hotel Serrano", "123", 120.0),
            package("Hotel Diogo", "789", 120.0),
        ]
    }

    fn child_prices(package: &Package) -> Vec<f64> {
        package.children().iter().map(|c| c.price()).collect()
    }

    #[test]
    fn test_consolidate_sample_catalog() {
        let result = consolidate(sample_catalog()).unwrap();

        assert_eq!(result.len(), 2);

        assert_eq!(result[0].hotel(), "Hotel Serrano");
        assert_eq!(result[0].flight(), "123");
        assert_eq!(result[0].price(), 99.0);
        assert_eq!(child_prices(&result[0]), vec![99.0, 110.0, 120.0]);

        assert_eq!(result[1].hotel(), "Hotel Diogo");
        assert_eq!(result[1].price(), 100.0);
        assert_eq!(child_prices(&result[1]), vec![100.0, 110.0, 120.0]);
        assert!(result[1]
            .children()
            .iter()
            .all(|c| c.hotel() == "Hotel Diogo" && c.flight() == "789"));
    }

    #[test]
    fn test_group_by_identity_keeps_first_appearance_order() {
        let groups = group_by_identity(sample_catalog());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key().to_string(), "Hotel Diogo|789");
        assert_eq!(groups[1].key().to_string(), "Hotel Serrano|123");

        let prices: Vec<f64> = groups[0].members().map(|p| p.price()).collect();
        assert_eq!(prices, vec![110.0, 100.0, 120.0]);
    }

    #[test]
    fn test_singleton_group_passes_through_unchanged() {
        let input = package("Hotel Sol", "555", 75.5);
        let result = consolidate(vec![input.clone()]).unwrap();

        assert_eq!(result, vec![input]);
        assert!(result[0].children().is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_empty_output() {
        let result = consolidate(Vec::new()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_same_hotel_on_different_flights_is_not_merged() {
        let result = consolidate(vec![
            package("Hotel Diogo", "789", 110.0),
            package("Hotel Diogo", "790", 90.0),
        ])
        .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].flight(), "790");
        assert!(result.iter().all(|p| p.children().is_empty()));
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let result = consolidate(vec![
            package("Hotel B", "2", 50.0),
            package("Hotel A", "1", 50.0),
            package("Hotel A", "1", 50.0),
        ])
        .unwrap();

        assert_eq!(result[0].hotel(), "Hotel B");
        assert_eq!(result[1].hotel(), "Hotel A");
        assert_eq!(result[1].children().len(), 2);
    }

    #[test]
    fn test_nan_price_fails_the_whole_catalog() {
        let result = consolidate(vec![
            package("Hotel Diogo", "789", 110.0),
            package("Hotel Serrano", "123", f64::NAN),
        ]);

        match result {
            Err(ConsolidationError::MissingPrice { key }) => {
                assert_eq!(key.to_string(), "Hotel Serrano|123");
            }
            other => panic!("expected MissingPrice, got {:?}", other),
        }
    }

    #[test]
    fn test_singleton_drops_children_it_arrived_with() {
        let stale_child = ChildPackage::from(&package("Hotel Y", "9", 1.0));
        let stale = package("Hotel X", "1", 10.0).with_children(vec![stale_child]);

        let result = consolidate(vec![stale]).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].price(), 10.0);
        assert!(result[0].children().is_empty());
    }

    #[test]
    fn test_input_children_are_replaced_on_consolidation() {
        let stale = package("Hotel X", "1", 10.0);
        let stale_child = ChildPackage::from(&package("Hotel Y", "9", 1.0));
        let stale = stale.with_children(vec![stale_child]);

        let result = consolidate(vec![stale, package("Hotel X", "1", 20.0)]).unwrap();

        assert_eq!(child_prices(&result[0]), vec![10.0, 20.0]);
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<(u8, u8, u16)>> {
        prop::collection::vec((0u8..4, 0u8..3, 0u16..500), 0..40)
    }

    fn build_catalog(raw: &[(u8, u8, u16)]) -> Vec<Package> {
        raw.iter()
            .map(|(h, f, p)| package(&format!("Hotel {}", h), &format!("{}", f), *p as f64))
            .collect()
    }

    fn sorted_tuples(mut tuples: Vec<(String, String, u64)>) -> Vec<(String, String, u64)> {
        tuples.sort();
        tuples
    }

    proptest! {
        /// Property: output keys are unique and each record reconstructs its input group
        #[test]
        fn prop_consolidation_reconstructs_groups(raw in catalog_strategy()) {
            let catalog = build_catalog(&raw);
            let result = consolidate(catalog.clone()).unwrap();

            let mut keys: Vec<IdentityKey> = result.iter().map(Package::identity).collect();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), result.len());

            for record in &result {
                let key = record.identity();
                let expected: Vec<(String, String, u64)> = catalog
                    .iter()
                    .filter(|p| p.identity() == key)
                    .map(|p| (p.hotel().to_string(), p.flight().to_string(), p.price() as u64))
                    .collect();

                let actual: Vec<(String, String, u64)> = if record.children().is_empty() {
                    vec![(record.hotel().to_string(), record.flight().to_string(), record.price() as u64)]
                } else {
                    record
                        .children()
                        .iter()
                        .map(|c| (c.hotel().to_string(), c.flight().to_string(), c.price() as u64))
                        .collect()
                };

                prop_assert_eq!(sorted_tuples(expected), sorted_tuples(actual));
            }
        }

        /// Property: a principal's price is the cheapest of its children
        #[test]
        fn prop_principal_is_cheapest(raw in catalog_strategy()) {
            let result = consolidate(build_catalog(&raw)).unwrap();

            for record in result.iter().filter(|p| !p.children().is_empty()) {
                let min = record
                    .children()
                    .iter()
                    .map(|c| c.price())
                    .fold(f64::INFINITY, f64::min);
                prop_assert_eq!(record.price(), min);
                prop_assert!(record.children().len() >= 2);
            }
        }

        /// Property: output prices never decrease
        #[test]
        fn prop_output_sorted_by_price(raw in catalog_strategy()) {
            let result = consolidate(build_catalog(&raw)).unwrap();

            prop_assert!(result.windows(2).all(|w| w[0].price() <= w[1].price()));
        }
    }
}
