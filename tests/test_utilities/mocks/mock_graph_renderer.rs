use pydepgraph::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock GraphRenderer that records what it was asked to draw
#[derive(Default, Clone)]
pub struct MockGraphRenderer {
    pub rendered: Arc<Mutex<Vec<(DependencyGraph, FigureSize)>>>,
}

impl MockGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<(DependencyGraph, FigureSize)> {
        self.rendered.lock().unwrap().last().cloned()
    }
}

impl GraphRenderer for MockGraphRenderer {
    fn render(&self, graph: &DependencyGraph, figure_size: FigureSize) -> Result<()> {
        self.rendered
            .lock()
            .unwrap()
            .push((graph.clone(), figure_size));
        Ok(())
    }
}
