//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::DetectionService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub detection_service: Arc<DetectionService>,
}

impl AppState {
    pub fn new(detection_service: Arc<DetectionService>) -> Self {
        Self { detection_service }
    }
}
