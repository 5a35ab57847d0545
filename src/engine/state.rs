use crate::{domain::GeoPoint, models::Prediction};

/// Session state of the interaction controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ControllerState {
    #[default]
    NoSelection,
    HasSelection(Prediction),
}

impl ControllerState {
    pub fn selected_point(&self) -> Option<GeoPoint> {
        self.prediction().map(|p| p.point)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            ControllerState::NoSelection => None,
            ControllerState::HasSelection(prediction) => Some(prediction),
        }
    }

    /// Generation of the current prediction, 0 before the first selection.
    pub fn generation(&self) -> u64 {
        self.prediction().map_or(0, |p| p.generation)
    }
}
