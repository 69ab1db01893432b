/// Limits for bounded path enumeration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Keep at most this many paths, cheapest first
    pub max_paths: usize,
    /// Abandon a branch once the path holds more than this many nodes
    pub max_depth: usize,
}

impl SearchConfig {
    pub fn new(max_paths: usize, max_depth: usize) -> Self {
        Self {
            max_paths,
            max_depth,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_paths: 3,
            max_depth: 6,
        }
    }
}
