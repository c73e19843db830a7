//! Screen components, one module per primary screen.

pub mod calculator;
pub mod profiles;

use ripplecast_core::{Calculator, ProfileTable, SimulationParameters};

use crate::component::Component;
use crate::screen::ScreenId;

/// Build all screens with their starting state.
pub fn create_screens(
    params: SimulationParameters,
    profiles: &ProfileTable,
) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Calculator,
            Box::new(calculator::CalculatorScreen::new(Calculator::new(
                params,
                profiles.clone(),
            ))),
        ),
        (
            ScreenId::Profiles,
            Box::new(profiles::ProfilesScreen::new(profiles.clone())),
        ),
    ]
}
