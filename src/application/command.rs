use crate::domain::Direction;

/// A discrete request from the player, at most one per input event
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    Reset,
}
