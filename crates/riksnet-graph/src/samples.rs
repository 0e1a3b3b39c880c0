//! Small fixed datasets used in the course exercises

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::json;

use crate::edge::Edge;
use crate::network::{Network, record};

/// A Star Trek character and the shows they appear in
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    pub name: &'static str,
    pub species: &'static str,
    pub gender: &'static str,
    pub rank: &'static str,
    pub shows: BTreeSet<&'static str>,
}

/// A Swedish city and the European routes passing through it
#[derive(Debug, Clone, Serialize)]
pub struct City {
    pub name: &'static str,
    pub roads: BTreeSet<&'static str>,
}

const TOS: &str = "Star Trek";
const TNG: &str = "Star Trek: The Next Generation";
const DS9: &str = "Star Trek: Deep Space Nine";
const VOY: &str = "Star Trek: Voyager";
const DIS: &str = "Star Trek: Discovery";

fn character(
    name: &'static str,
    species: &'static str,
    gender: &'static str,
    rank: &'static str,
    shows: &[&'static str],
) -> Character {
    Character {
        name,
        species,
        gender,
        rank,
        shows: shows.iter().copied().collect(),
    }
}

/// Seven nodes, two components, one repeated edge
pub fn sample_network() -> Network {
    let nodes = (1..=7).map(|id| record([("id", json!(id))])).collect();
    let edges = [(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4), (6, 5), (1, 2)]
        .into_iter()
        .map(|(from, to)| Edge::new(json!(from), json!(to)))
        .collect();
    Network::new(nodes, edges)
}

pub fn star_trek() -> Vec<Character> {
    vec![
        character("Kirk", "human", "male", "captain", &[TOS, TNG]),
        character("Scotty", "human", "male", "lieutenant commander", &[TOS, TNG]),
        character("Spock", "half-human, half-vulcan", "male", "first officer", &[TOS, TNG, DIS]),
        character("Picard", "human", "male", "captain", &[TNG, DS9]),
        character("Janeway", "human", "female", "captain", &[VOY]),
        character("Tuvok", "vulcan", "male", "science officer", &[VOY]),
        character("Quark", "ferengi", "male", "civilian", &[DS9]),
        character("Tilly", "human", "female", "lieutenant", &[DIS]),
        character("Stamets", "human", "male", "science officer", &[DIS]),
        character("Worf", "klingon", "male", "lieutenant commander", &[TNG, DS9]),
        character("Odo", "changeling", "unknown", "civilian", &[DS9]),
    ]
}

pub fn cities() -> Vec<City> {
    let city = |name, roads: &[&'static str]| City {
        name,
        roads: roads.iter().copied().collect(),
    };
    vec![
        city("Göteborg", &["E6", "E20", "E45"]),
        city("Uddevalla", &["E6", "E45"]),
        city("Kungsbacka", &["E6"]),
        city("Trollhättan", &["E45"]),
        city("Karlstad", &["E18"]),
        city("Örebro", &["E18", "E20"]),
        city("Stockholm", &["E20", "E4", "E18"]),
        city("Helsingborg", &["E6", "E4"]),
        city("Jönköping", &["E4"]),
    ]
}

/// Directed flight routes between Nordic airports
pub fn flights() -> Vec<Edge<&'static str>> {
    [
        ("Arlanda", "Kastrup"),
        ("Arlanda", "Oslo"),
        ("Landvetter", "Arlanda"),
        ("Landvetter", "Helsingfors"),
        ("Kastrup", "Landvetter"),
        ("Oslo", "Landvetter"),
        ("Oslo", "Helsingfors"),
        ("Helsingfors", "Arlanda"),
        ("Helsingfors", "Oslo"),
    ]
    .into_iter()
    .map(|(from, to)| Edge::new(from, to))
    .collect()
}

/// Three generations with a drawing layout; edges run parent → child
pub fn family() -> Network {
    let person = |name: &str, children: &[&str], x: f64, y: f64| {
        record([
            ("id", json!(name)),
            ("name", json!(name)),
            ("children", json!(children)),
            ("x", json!(x)),
            ("y", json!(y)),
        ])
    };
    let nodes = vec![
        person("Per", &["Elias", "Gudmund"], 0.35, 1.0),
        person("Gun", &["Elias", "Gudmund"], 0.65, 1.0),
        person("Elias", &["Siv"], 0.35, 0.75),
        person("Adelia", &["Siv"], 0.65, 0.75),
        person("Gudmund", &[], 0.05, 0.75),
        person("Siv", &[], 0.35, 0.5),
    ];
    let edges = [
        ("Per", "Elias"),
        ("Per", "Gudmund"),
        ("Gun", "Elias"),
        ("Gun", "Gudmund"),
        ("Elias", "Siv"),
        ("Adelia", "Siv"),
    ]
    .into_iter()
    .map(|(from, to)| Edge::new(json!(from), json!(to)))
    .collect();
    Network::new(nodes, edges)
}

/// Land masses 1–7 joined by the bridges of the exercise
pub fn bridges() -> Network {
    let nodes = (1..=7).map(|id| record([("id", json!(id))])).collect();
    let edges = [(1, 2), (1, 3), (1, 4), (4, 6), (5, 6), (4, 7), (3, 2), (7, 5)]
        .into_iter()
        .map(|(from, to)| Edge::new(json!(from), json!(to)))
        .collect();
    Network::new(nodes, edges)
}

/// Dataset names accepted by [`by_name`]
pub const NAMES: [&str; 6] = ["sample", "star-trek", "cities", "flights", "family", "bridges"];

/// A dataset as a [`Network`]; set-valued datasets connect items that share
/// a show or a road.
pub fn by_name(name: &str) -> Option<Network> {
    Some(match name {
        "sample" => sample_network(),
        "star-trek" => {
            let crew = star_trek();
            let nodes = crew
                .iter()
                .map(|c| {
                    record([
                        ("id", json!(c.name)),
                        ("species", json!(c.species)),
                        ("gender", json!(c.gender)),
                        ("rank", json!(c.rank)),
                    ])
                })
                .collect();
            let edges = crate::pairwise_intersection(&crew, |c| &c.shows, |c| json!(c.name)).collect();
            Network::new(nodes, edges)
        }
        "cities" => {
            let cities = cities();
            let nodes = cities.iter().map(|c| record([("id", json!(c.name))])).collect();
            let edges = crate::pairwise_intersection(&cities, |c| &c.roads, |c| json!(c.name)).collect();
            Network::new(nodes, edges)
        }
        "flights" => Network::from_edges(flights()),
        "family" => family(),
        "bridges" => bridges(),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_network_shape() {
        let network = sample_network();
        assert_eq!(network.nodes().len(), 7);
        assert_eq!(network.edges().len(), 8);
        // Node 7 is isolated
        assert_eq!(network.degree(&json!(7)), 0);
        assert_eq!(network.degree(&json!(1)), 4);
    }

    #[test]
    fn family_has_layout() {
        let network = family();
        assert!(network.has_layout());
        let keys: Vec<_> = network.keys().into_iter().collect();
        assert_eq!(keys, ["children", "id", "name", "x", "y"]);
    }

    #[test]
    fn bridges_nodes_are_distinct() {
        let network = bridges();
        assert_eq!(network.nodes().len(), 7);
        assert_eq!(network.degree(&json!(4)), 3);
    }

    #[test]
    fn flights_network_has_five_airports() {
        let network = Network::from_edges(flights());
        assert_eq!(network.nodes().len(), 5);
        assert_eq!(network.edges().len(), 9);
    }

    #[test]
    fn every_name_resolves() {
        for name in NAMES {
            assert!(by_name(name).is_some(), "{name}");
        }
        assert!(by_name("essay").is_none());
    }

    #[test]
    fn star_trek_crew_connected_by_shows() {
        let network = by_name("star-trek").unwrap();
        assert_eq!(network.nodes().len(), 11);
        // Odo shares Deep Space Nine with Picard, Quark and Worf
        assert_eq!(network.degree(&json!("Odo")), 3);
    }
}
