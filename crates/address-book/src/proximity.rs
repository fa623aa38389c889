//! Proximity Query Engine
//!
//! Full scan: every query reads all addresses and measures each one against
//! the target. Fine for small collections; there is no spatial index.

use geodesy::distance_km;
use serde::Serialize;
use storage::Address;

/// An address that fell inside the search radius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nearby {
    #[serde(flatten)]
    pub address: Address,
    /// Geodesic distance to the target in kilometres
    pub distance_km: f64,
}

/// Keep the candidates within `radius_km` of `target`, inclusive.
///
/// The target itself (matched by id) is never returned. Output preserves the
/// order of `candidates`; nothing is sorted by distance.
pub fn within_radius(
    target: &Address,
    candidates: impl IntoIterator<Item = Address>,
    radius_km: f64,
) -> Vec<Nearby> {
    let origin = target.coordinate();

    candidates
        .into_iter()
        .filter(|candidate| candidate.id != target.id)
        .filter_map(|candidate| {
            let distance = distance_km(candidate.coordinate(), origin);
            (distance <= radius_km).then_some(Nearby {
                address: candidate,
                distance_km: distance,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn address(id: i64, label: &str, latitude: f64, longitude: f64) -> Address {
        Address {
            id,
            label: label.to_string(),
            latitude,
            longitude,
        }
    }

    fn dataset() -> Vec<Address> {
        vec![
            address(1, "NYC", 40.7128, -74.0060),
            address(2, "NearNYC", 40.7306, -73.9352),
            address(3, "LA", 34.0522, -118.2437),
        ]
    }

    fn ids(found: &[Nearby]) -> Vec<i64> {
        found.iter().map(|n| n.address.id).collect()
    }

    #[test]
    fn test_nyc_within_20km() {
        let data = dataset();
        let found = within_radius(&data[0], data.clone(), 20.0);
        assert_eq!(ids(&found), vec![2]);
        assert!(found[0].distance_km < 20.0);
    }

    #[test]
    fn test_nyc_within_1km_is_empty() {
        let data = dataset();
        assert!(within_radius(&data[0], data.clone(), 1.0).is_empty());
    }

    #[test]
    fn test_zero_radius_matches_colocated_only() {
        let mut data = dataset();
        data.push(address(4, "NYC twin", 40.7128, -74.0060));
        let found = within_radius(&data[0], data.clone(), 0.0);
        assert_eq!(ids(&found), vec![4]);
        assert_eq!(found[0].distance_km, 0.0);
    }

    #[test]
    fn test_target_only_dataset() {
        let data = dataset();
        assert!(within_radius(&data[0], vec![data[0].clone()], 50_000.0).is_empty());
    }

    #[test]
    fn test_source_order_is_kept() {
        let data = dataset();
        let mut reversed = data.clone();
        reversed.reverse();
        let found = within_radius(&data[0], reversed, 10_000.0);
        assert_eq!(ids(&found), vec![3, 2]);
    }

    fn scattered() -> impl Strategy<Value = Vec<Address>> {
        prop::collection::vec((-89.0f64..89.0, -179.0f64..179.0), 1..20).prop_map(|points| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lon))| address(i as i64 + 1, "p", lat, lon))
                .collect()
        })
    }

    proptest! {
        /// A smaller radius never finds anything a larger one misses
        #[test]
        fn radius_is_monotonic(data in scattered(), r1 in 0.0f64..20_000.0, extra in 0.0f64..20_000.0) {
            let r2 = r1 + extra;
            let small = ids(&within_radius(&data[0], data.clone(), r1));
            let large = ids(&within_radius(&data[0], data.clone(), r2));
            prop_assert!(small.iter().all(|id| large.contains(id)));
        }

        #[test]
        fn target_is_never_returned(data in scattered(), r in 0.0f64..25_000.0) {
            let found = within_radius(&data[0], data.clone(), r);
            prop_assert!(found.iter().all(|n| n.address.id != data[0].id));
        }
    }
}
