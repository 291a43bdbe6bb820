//! Legal action enumeration and loss detection.
//!
//! Both walk live units in creation order and directions in `DIRECTIONS`
//! order, so the action list is deterministic and a player has lost exactly
//! when the list is empty.

use crate::game_state::board::Board;
use crate::game_state::types::{Action, Player};
use crate::move_generation::directions::DIRECTIONS;

impl Board {
    /// Every capture `player` can make, unit order then direction order.
    pub fn legal_actions(&self, player: Player) -> Vec<Action> {
        let mut out = Vec::with_capacity(self.live_unit_count() * 2);
        self.legal_actions_in_place(player, &mut out);
        out
    }

    /// Appends the legal actions of `player` to `out` after clearing it.
    pub fn legal_actions_in_place(&self, player: Player, out: &mut Vec<Action>) {
        out.clear();
        for (id, unit) in self.live_units() {
            if unit.owner() != player {
                continue;
            }
            let Some(origin) = self.cell(unit.cell()).map(|c| c.coord()) else {
                continue;
            };
            for (dx, dy) in DIRECTIONS {
                let x = origin.x as isize + dx;
                let y = origin.y as isize + dy;
                if !self.is_capture_valid(x, y, player) {
                    continue;
                }
                if let Some(target) = self.cell_id(x as usize, y as usize) {
                    out.push(Action {
                        unit: id,
                        from: unit.cell(),
                        target,
                    });
                }
            }
        }
    }

    /// True when no live unit of `player` has a capture available.
    pub fn has_player_lost(&self, player: Player) -> bool {
        for (_, unit) in self.live_units() {
            if unit.owner() != player {
                continue;
            }
            let Some(origin) = self.cell(unit.cell()).map(|c| c.coord()) else {
                continue;
            };
            for (dx, dy) in DIRECTIONS {
                if self.is_capture_valid(origin.x as isize + dx, origin.y as isize + dy, player) {
                    return false;
                }
            }
        }
        true
    }
}
