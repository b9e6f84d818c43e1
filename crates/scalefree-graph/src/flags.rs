use serde::{Deserialize, Serialize};

/// Configuration options that control the behaviour of [`GraphStore`](crate::GraphStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether two edges of the same directedness may join the same endpoint pair.
    #[serde(default = "default_allow_parallel")]
    pub allow_parallel_edges: bool,
}

fn default_allow_parallel() -> bool {
    true
}

impl GraphConfig {
    /// Configuration that rejects parallel edges.
    pub const fn simple() -> Self {
        Self {
            allow_parallel_edges: false,
        }
    }

    /// Configuration that accepts parallel edges.
    pub const fn multigraph() -> Self {
        Self {
            allow_parallel_edges: true,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::multigraph()
    }
}
