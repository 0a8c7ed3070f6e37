use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::classifier::handlers;
use crate::features::classifier::services::Classifier;

/// Create routes for the classifier feature
pub fn routes(classifier: Arc<dyn Classifier>) -> Router {
    Router::new()
        .route("/api/classify", post(handlers::classify))
        .with_state(classifier)
}
