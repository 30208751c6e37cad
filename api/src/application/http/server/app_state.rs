use std::sync::Arc;

use vegscan_core::application::VegScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<VegScanService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: VegScanService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
