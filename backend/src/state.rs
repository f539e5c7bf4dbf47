use crate::services::vegetable_data::VegetableData;

/// Read-only state shared by every worker.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub vegetable_data: Option<VegetableData>,
}

impl AppState {
    pub fn new(vegetable_data: Option<VegetableData>) -> Self {
        Self { vegetable_data }
    }

    pub fn data_loaded(&self) -> bool {
        self.vegetable_data.is_some()
    }
}
