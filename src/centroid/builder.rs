use super::{Centroid, CentroidConfig, CentroidError, DEFAULT_CAPACITY};
use crate::payload::PayloadContainer;
use crate::search::{Farthest, Nearest, SearchStrategy};
use std::sync::Arc;

/// Builder for a [`Centroid`]; both search strategies must be supplied
pub struct CentroidBuilder {
    init_vec: Vec<f32>,
    capacity: usize,
    knn_search: Option<Arc<dyn SearchStrategy>>,
    kfn_search: Option<Arc<dyn SearchStrategy>>,
}

impl CentroidBuilder {
    pub fn new(init_vec: &[f32]) -> Self {
        Self {
            init_vec: init_vec.to_vec(),
            capacity: DEFAULT_CAPACITY,
            knn_search: None,
            kfn_search: None,
        }
    }

    pub fn from_config(config: &CentroidConfig, init_vec: &[f32]) -> Self {
        Self::new(init_vec)
            .capacity(config.capacity)
            .knn_search(Nearest(config.knn))
            .kfn_search(Farthest(config.kfn))
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn knn_search(self, strategy: impl SearchStrategy + 'static) -> Self {
        self.shared_knn_search(Arc::new(strategy))
    }

    pub fn kfn_search(self, strategy: impl SearchStrategy + 'static) -> Self {
        self.shared_kfn_search(Arc::new(strategy))
    }

    /// Same as `knn_search`, sharing one strategy instance between centroids
    pub fn shared_knn_search(mut self, strategy: Arc<dyn SearchStrategy>) -> Self {
        self.knn_search = Some(strategy);
        self
    }

    pub fn shared_kfn_search(mut self, strategy: Arc<dyn SearchStrategy>) -> Self {
        self.kfn_search = Some(strategy);
        self
    }

    pub fn build<P: PayloadContainer>(self) -> Result<Centroid<P>, CentroidError> {
        let knn_search = self
            .knn_search
            .ok_or(CentroidError::MissingSearchStrategy("knn"))?;
        let kfn_search = self
            .kfn_search
            .ok_or(CentroidError::MissingSearchStrategy("kfn"))?;

        Ok(Centroid::new(
            &self.init_vec,
            self.capacity,
            knn_search,
            kfn_search,
        ))
    }
}
