//! Assignment engine tests.

use fb_core::{Agent, DeliveryInput, Package, Point, SimRng, Warehouse};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Random input with `n_agents` agents, 4 warehouses, `n_packages` packages.
/// Coordinates are small integers so exact ties occur regularly.
fn random_input(rng: &mut SimRng, n_agents: usize, n_packages: usize) -> DeliveryInput {
    let coord = |rng: &mut SimRng| Point::new(rng.gen_range(0..6) as f64, rng.gen_range(0..6) as f64);

    let warehouses = (0..4).map(|i| Warehouse::new(format!("W{i}"), coord(rng))).collect();
    let agents = (0..n_agents).map(|i| Agent::new(format!("A{i}"), coord(rng))).collect();
    let packages = (0..n_packages)
        .map(|i| Package::new(format!("P{i}"), format!("W{}", rng.gen_range(0..4)), coord(rng)))
        .collect();
    DeliveryInput::new(warehouses, agents, packages)
}

#[cfg(test)]
mod scenarios {
    use super::*;
    use crate::assign_packages;

    #[test]
    fn nearest_agent_takes_package() {
        let input = DeliveryInput::new(
            vec![Warehouse::new("W1", [0.0, 0.0])],
            vec![Agent::new("A1", [0.0, 0.0]), Agent::new("A2", [10.0, 10.0])],
            vec![Package::new("P1", "W1", [1.0, 1.0])],
        );
        let map = assign_packages(&input).unwrap();
        assert_eq!(map.agent_for("P1").map(|a| a.as_str()), Some("A1"));
        assert_eq!(map.get("A2"), Some(&[][..]));
        assert_eq!(map.agent_count(), 2);
    }

    #[test]
    fn tie_goes_to_first_listed_agent() {
        let input = DeliveryInput::new(
            vec![Warehouse::new("W1", [0.0, 0.0])],
            vec![Agent::new("B", [3.0, 4.0]), Agent::new("A", [-3.0, -4.0])],
            vec![Package::new("P1", "W1", [1.0, 1.0])],
        );
        let map = assign_packages(&input).unwrap();
        assert_eq!(map.agent_for("P1").map(|a| a.as_str()), Some("B"));
    }

    #[test]
    fn package_order_preserved_per_agent() {
        let input = DeliveryInput::new(
            vec![Warehouse::new("W1", [0.0, 0.0])],
            vec![Agent::new("A1", [0.0, 0.0])],
            vec![
                Package::new("P3", "W1", [1.0, 0.0]),
                Package::new("P1", "W1", [2.0, 0.0]),
                Package::new("P2", "W1", [3.0, 0.0]),
            ],
        );
        let map = assign_packages(&input).unwrap();
        let ids: Vec<_> = map.get("A1").unwrap().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P3", "P1", "P2"]);
    }

    #[test]
    fn uses_start_location_not_last_drop() {
        // A1 starts at the warehouse but its first drop is far away; the
        // second package must still go to A1.
        let input = DeliveryInput::new(
            vec![Warehouse::new("W1", [0.0, 0.0])],
            vec![Agent::new("A1", [0.0, 0.0]), Agent::new("A2", [1.0, 0.0])],
            vec![
                Package::new("P1", "W1", [100.0, 100.0]),
                Package::new("P2", "W1", [1.0, 1.0]),
            ],
        );
        let map = assign_packages(&input).unwrap();
        assert_eq!(map.get("A1").map(<[_]>::len), Some(2));
    }

    #[test]
    fn joined_agent_is_considered() {
        let mut input = DeliveryInput::new(
            vec![Warehouse::new("W1", [20.0, 20.0])],
            vec![Agent::new("A1", [0.0, 0.0])],
            vec![Package::new("P1", "W1", [21.0, 21.0])],
        );
        input.add_agent(Agent::new("A4", [20.0, 20.0]));
        let map = assign_packages(&input).unwrap();
        assert_eq!(map.agent_for("P1").map(|a| a.as_str()), Some("A4"));
    }

    #[test]
    fn empty_packages_gives_empty_lists() {
        let input = DeliveryInput::new(
            vec![],
            vec![Agent::new("A1", [0.0, 0.0]), Agent::new("A2", [1.0, 1.0])],
            vec![],
        );
        let map = assign_packages(&input).unwrap();
        assert_eq!(map.agent_count(), 2);
        assert_eq!(map.package_count(), 0);
    }
}

#[cfg(test)]
mod errors {
    use super::*;
    use crate::{AssignError, AssignmentMap, assign_packages};

    #[test]
    fn unknown_warehouse() {
        let input = DeliveryInput::new(
            vec![Warehouse::new("W1", [0.0, 0.0])],
            vec![Agent::new("A1", [0.0, 0.0])],
            vec![
                Package::new("P1", "W1", [1.0, 1.0]),
                Package::new("P2", "W9", [1.0, 1.0]),
            ],
        );
        assert_eq!(
            assign_packages(&input),
            Err(AssignError::UnknownWarehouse { package: "P2".into(), warehouse: "W9".into() })
        );
    }

    #[test]
    fn no_agents() {
        let input = DeliveryInput::new(
            vec![Warehouse::new("W1", [0.0, 0.0])],
            vec![],
            vec![Package::new("P1", "W1", [1.0, 1.0])],
        );
        assert_eq!(assign_packages(&input), Err(AssignError::NoAgents { package: "P1".into() }));
    }

    #[test]
    fn no_agents_and_no_packages_is_fine() {
        let map = assign_packages(&DeliveryInput::default()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn duplicate_agent() {
        let input = DeliveryInput::new(
            vec![],
            vec![Agent::new("A1", [0.0, 0.0]), Agent::new("A1", [1.0, 1.0])],
            vec![],
        );
        assert_eq!(assign_packages(&input), Err(AssignError::DuplicateAgent("A1".into())));
    }

    #[test]
    fn push_for_creates_slot() {
        let mut map = AssignmentMap::default();
        map.push_for(&"A9".into(), Package::new("P1", "W1", [0.0, 0.0]));
        map.push_for(&"A9".into(), Package::new("P2", "W1", [0.0, 0.0]));
        assert_eq!(map.agent_count(), 1);
        assert_eq!(map.get("A9").map(<[_]>::len), Some(2));
    }
}

#[cfg(test)]
mod properties {
    use std::collections::HashSet;

    use super::*;
    use crate::{assign_packages, nearest_agent};

    #[test]
    fn every_package_assigned_exactly_once() {
        let mut rng = SimRng::new(7);
        for round in 0..50 {
            let input = random_input(&mut rng, 1 + round % 6, round * 3);
            let map = assign_packages(&input).unwrap();

            let mut seen = HashSet::new();
            for (_, pkgs) in map.iter() {
                for p in pkgs {
                    assert!(seen.insert(p.id.clone()), "package {} assigned twice", p.id);
                }
            }
            let expected: HashSet<_> = input.packages.iter().map(|p| p.id.clone()).collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn assigned_agent_is_minimum_distance_first_wins() {
        let mut rng = SimRng::new(99);
        for _ in 0..50 {
            let input = random_input(&mut rng, 5, 20);
            let map = assign_packages(&input).unwrap();
            let warehouses = input.warehouse_locations();

            for p in &input.packages {
                let target = warehouses[p.warehouse.as_str()];
                let min = input
                    .agents
                    .iter()
                    .map(|a| a.location.distance(target))
                    .fold(f64::INFINITY, f64::min);
                let first_min = input
                    .agents
                    .iter()
                    .position(|a| a.location.distance(target) == min)
                    .unwrap();

                let owner = map.agent_for(p.id.as_str()).unwrap();
                assert_eq!(owner, &input.agents[first_min].id);
                assert_eq!(nearest_agent(&input.agents, target), Some((first_min, min)));
            }
        }
    }

    #[test]
    fn nearest_agent_empty_roster() {
        assert_eq!(nearest_agent(&[], Point::ORIGIN), None);
    }
}
