use bevy::prelude::*;

use crate::components::{AeroState, Airfoil, MaterialSlot};
use crate::resources::StallDisplayConfig;

/// Shows the stall state of each wing by swapping its material. Cosmetic only.
pub fn stall_display_system(
    display: Res<StallDisplayConfig>,
    mut wings: Query<(Entity, &AeroState, &mut MaterialSlot), With<Airfoil>>,
) {
    for (entity, state, mut slot) in wings.iter_mut() {
        let wanted = if state.stalled {
            display.stalled
        } else {
            display.normal
        };
        if slot.0 != wanted {
            debug!(
                "Airfoil {:?} {} at {:.1} deg",
                entity,
                if state.stalled { "stalled" } else { "recovered" },
                state.angle_of_attack_deg
            );
            slot.0 = wanted;
        }
    }
}
