use std::future::Future;

use crate::domain::health::entities::ModelHealthStatus;

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = ModelHealthStatus> + Send;
}
