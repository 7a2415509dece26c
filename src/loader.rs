//! Demo Child Loader
//!
//! Serves the canned sample children after a simulated network delay.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use tree_board_core::tree::sample::sample_children;
use tree_board_core::{ChildLoader, LoadError, TreeNode};

pub struct DemoLoader {
    delay_ms: u32,
}

impl DemoLoader {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for DemoLoader {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait(?Send)]
impl ChildLoader for DemoLoader {
    async fn load_children(&self, node_id: &str) -> Result<Vec<TreeNode>, LoadError> {
        log::debug!("fetching children of {}", node_id);
        TimeoutFuture::new(self.delay_ms).await;
        Ok(sample_children(node_id))
    }
}
