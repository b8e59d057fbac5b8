//! Weighted station graph and shortest-path search.

use std::collections::HashMap;

use pathfinding::prelude::dijkstra;

use crate::domain::{Section, StationId};

/// Error from a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("cannot find path: source and target are both station {0}")]
    SameStation(StationId),

    /// Station is not on any line
    #[error("cannot find path: station {0} is not on any line")]
    UnknownStation(StationId),

    /// No sequence of sections connects the two stations
    #[error("cannot find path: stations {0} and {1} are not connected")]
    Unreachable(StationId, StationId),
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Stations from source to target, both inclusive.
    pub stations: Vec<StationId>,
    /// Sum of the distances of the traversed sections.
    pub distance: u64,
}

/// Weighted multigraph over every station that appears in a section.
///
/// Each section is one edge, traversable in both directions. Parallel
/// edges between the same pair of stations (for example on two different
/// lines) are all kept; the search simply prefers the cheaper one.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<StationId, Vec<(StationId, u64)>>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from sections of any number of lines.
    pub fn new<'a>(sections: impl IntoIterator<Item = &'a Section>) -> Self {
        let mut graph = Self::default();
        for section in sections {
            graph.add_edge(section);
        }
        graph
    }

    fn add_edge(&mut self, section: &Section) {
        let up = section.up_station();
        let down = section.down_station();
        let weight = u64::from(section.distance());

        self.adjacency.entry(up).or_default().push((down, weight));
        self.adjacency.entry(down).or_default().push((up, weight));
        self.edge_count += 1;
    }

    /// Number of distinct stations.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of sections, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Find the least-distance path between two stations.
    ///
    /// # Errors
    ///
    /// Fails if `source == target`, if either station is absent from the
    /// graph, or if no path connects them.
    pub fn find_shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<Path, PathError> {
        if source == target {
            return Err(PathError::SameStation(source));
        }
        for station in [source, target] {
            if !self.contains_station(station) {
                return Err(PathError::UnknownStation(station));
            }
        }

        let (stations, distance) = dijkstra(
            &source,
            |station| self.neighbours(station),
            |station| *station == target,
        )
        .ok_or(PathError::Unreachable(source, target))?;

        Ok(Path { stations, distance })
    }

    fn neighbours(&self, station: &StationId) -> Vec<(StationId, u64)> {
        self.adjacency.get(station).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 교대 --6-- 강남
    //  |          |
    //  2          2
    //  |          |
    // 남부터미널 --7-- 양재
    const GYODAE: StationId = StationId(1);
    const GANGNAM: StationId = StationId(2);
    const YANGJAE: StationId = StationId(3);
    const NAMBU: StationId = StationId(4);

    fn section(up: StationId, down: StationId, distance: u32) -> Section {
        Section::new(up, down, distance).unwrap()
    }

    fn fixture() -> Vec<Section> {
        vec![
            section(GYODAE, GANGNAM, 6),
            section(NAMBU, YANGJAE, 7),
            section(GYODAE, NAMBU, 2),
            section(GANGNAM, YANGJAE, 2),
        ]
    }

    #[test]
    fn builds_vertices_and_edges() {
        let sections = fixture();
        let graph = Graph::new(&sections);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn shortest_path_through_transfer() {
        let sections = fixture();
        let graph = Graph::new(&sections);

        let path = graph.find_shortest_path(GYODAE, YANGJAE).unwrap();
        assert_eq!(path.distance, 8);
        assert_eq!(path.stations, vec![GYODAE, GANGNAM, YANGJAE]);
    }

    #[test]
    fn shortest_path_direct_section() {
        let sections = fixture();
        let graph = Graph::new(&sections);

        let path = graph.find_shortest_path(GYODAE, GANGNAM).unwrap();
        assert_eq!(path.distance, 6);
        assert_eq!(path.stations, vec![GYODAE, GANGNAM]);

        let path = graph.find_shortest_path(GYODAE, NAMBU).unwrap();
        assert_eq!(path.distance, 2);
        assert_eq!(path.stations, vec![GYODAE, NAMBU]);
    }

    #[test]
    fn sections_are_traversable_against_direction() {
        let sections = fixture();
        let graph = Graph::new(&sections);

        let path = graph.find_shortest_path(NAMBU, GANGNAM).unwrap();
        assert_eq!(path.distance, 8);
        assert_eq!(path.stations, vec![NAMBU, GYODAE, GANGNAM]);
    }

    #[test]
    fn parallel_edges_use_the_shorter() {
        let sections = vec![section(GYODAE, GANGNAM, 9), section(GYODAE, GANGNAM, 3)];
        let graph = Graph::new(&sections);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        let path = graph.find_shortest_path(GANGNAM, GYODAE).unwrap();
        assert_eq!(path.distance, 3);
    }

    #[test]
    fn same_source_and_target_fails() {
        let sections = fixture();
        let graph = Graph::new(&sections);
        assert_eq!(
            graph.find_shortest_path(GYODAE, GYODAE),
            Err(PathError::SameStation(GYODAE))
        );
    }

    #[test]
    fn unknown_station_fails() {
        let sections = fixture();
        let graph = Graph::new(&sections);
        assert_eq!(
            graph.find_shortest_path(StationId(99), GANGNAM),
            Err(PathError::UnknownStation(StationId(99)))
        );
        assert_eq!(
            graph.find_shortest_path(GANGNAM, StationId(99)),
            Err(PathError::UnknownStation(StationId(99)))
        );
    }

    #[test]
    fn disconnected_stations_fail() {
        let mut sections = fixture();
        sections.push(section(StationId(10), StationId(11), 3));
        let graph = Graph::new(&sections);

        assert_eq!(
            graph.find_shortest_path(GYODAE, StationId(10)),
            Err(PathError::Unreachable(GYODAE, StationId(10)))
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let sections = fixture();
        let graph = Graph::new(&sections);

        let first = graph.find_shortest_path(NAMBU, GANGNAM).unwrap();
        for _ in 0..5 {
            assert_eq!(graph.find_shortest_path(NAMBU, GANGNAM).unwrap(), first);
        }
        let rebuilt = Graph::new(&sections);
        assert_eq!(rebuilt.find_shortest_path(NAMBU, GANGNAM).unwrap(), first);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            PathError::SameStation(StationId(1)).to_string(),
            "cannot find path: source and target are both station 1"
        );
        assert_eq!(
            PathError::Unreachable(StationId(1), StationId(2)).to_string(),
            "cannot find path: stations 1 and 2 are not connected"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sections() -> impl Strategy<Value = Vec<Section>> {
        proptest::collection::vec((0u64..8, 0u64..8, 1u32..20), 1..20).prop_map(|raw| {
            raw.into_iter()
                .filter_map(|(up, down, d)| Section::new(StationId(up), StationId(down), d).ok())
                .collect()
        })
    }

    proptest! {
        /// Same source and target always fails
        #[test]
        fn same_station_always_fails(sections in sections(), x in 0u64..8) {
            let graph = Graph::new(&sections);
            prop_assert_eq!(
                graph.find_shortest_path(StationId(x), StationId(x)),
                Err(PathError::SameStation(StationId(x)))
            );
        }

        /// A found path starts and ends at the requested stations and its
        /// distance is no more than any single direct section between them
        #[test]
        fn path_endpoints_and_bound(sections in sections(), a in 0u64..8, b in 0u64..8) {
            let graph = Graph::new(&sections);
            if let Ok(path) = graph.find_shortest_path(StationId(a), StationId(b)) {
                prop_assert_eq!(path.stations.first(), Some(&StationId(a)));
                prop_assert_eq!(path.stations.last(), Some(&StationId(b)));
                for s in &sections {
                    let joins = (s.up_station() == StationId(a) && s.down_station() == StationId(b))
                        || (s.up_station() == StationId(b) && s.down_station() == StationId(a));
                    if joins {
                        prop_assert!(path.distance <= u64::from(s.distance()));
                    }
                }
            }
        }
    }
}
