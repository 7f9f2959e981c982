use std::sync::Arc;

use calorie_tracker_core::application::CalorieTrackerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CalorieTrackerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CalorieTrackerService) -> Self {
        Self { args, service }
    }
}
