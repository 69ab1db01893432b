pub mod catalogue;
pub mod criterion;
pub mod graph;
pub mod itinerary;
pub mod pathfinding;
pub mod query;
pub mod record;
pub mod search_config;
pub mod weights;

// Re-export commonly used items
pub use catalogue::PlaceCatalogue;
pub use criterion::Criterion;
pub use graph::{RouteGraph, SegmentEdge};
pub use itinerary::{Itinerary, Segment, assemble_itinerary, dedup_itineraries};
pub use pathfinding::{PathResult, WeightedPath, dfs_find_paths, dijkstra_find_path};
pub use query::{
    RouteQuery, RouteSearch, SearchStats, filter_records, find_routes, records_on_date,
};
pub use record::{FlightRecord, parse_route_text};
pub use search_config::SearchConfig;
pub use weights::WeightPolicy;
