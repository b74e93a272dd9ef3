use std::sync::Arc;

use crate::domain::prediction::{entities::ModelState, ports::Classifier};

/// Shared, read-only service object handed to every request.
///
/// The classifier state is fixed at construction; clones share it by reference.
#[derive(Debug)]
pub struct Service<C>
where
    C: Classifier,
{
    pub(crate) model: Arc<ModelState<C>>,
}

impl<C> Service<C>
where
    C: Classifier,
{
    pub fn new(model: ModelState<C>) -> Self {
        Self {
            model: Arc::new(model),
        }
    }

    pub fn model(&self) -> &ModelState<C> {
        &self.model
    }
}

impl<C> Clone for Service<C>
where
    C: Classifier,
{
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}
