pub mod dfs;
pub mod dijkstra;

// Re-export the public functions
pub use dfs::dfs_find_paths;
pub use dijkstra::dijkstra_find_path;

/// A node path together with its accumulated cost.
pub type WeightedPath = (f64, Vec<String>);

/// Search outcome: found path (if any), airports visited, elapsed seconds.
pub type PathResult = (Option<WeightedPath>, usize, f64);
