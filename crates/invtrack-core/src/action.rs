//! Action vocabulary and labeling.
//!
//! Environment actions come from several unrelated families (keyboard
//! commands, compass moves, miscellaneous directions). [`Action`] tags the
//! family and resolves every value to one canonical label. A fixed subset
//! of commands is "inventory-relevant": those are the actions whose effect
//! can remove an item from inventory, and their labels are the ones usage
//! counters are keyed by.

use strum::{Display, EnumIter};

/// Label used when an action maps to no known family.
pub const UNKNOWN_ACTION_LABEL: &str = "unknown";

/// Keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    Apply,
    Cast,
    Chat,
    Close,
    Dip,
    Drop,
    DropType,
    Eat,
    Engrave,
    Fire,
    Force,
    Invoke,
    Jump,
    Kick,
    Look,
    Loot,
    Offer,
    Open,
    Pay,
    Pickup,
    Pray,
    PutOn,
    Quaff,
    Read,
    Remove,
    Rub,
    Search,
    Sit,
    Swap,
    TakeOff,
    TakeOffAll,
    Throw,
    Tip,
    Travel,
    TurnUndead,
    TwoWeapon,
    Untrap,
    Wear,
    Wield,
    Wipe,
    Zap,
}

impl Command {
    /// Label for commands that can plausibly consume or shed inventory.
    /// Returns `None` for everything outside that fixed set.
    pub const fn tracked_label(self) -> Option<&'static str> {
        Some(match self {
            Command::Eat => "eat",
            Command::Quaff => "quaff",
            Command::Read => "read",
            Command::Zap => "zap",
            Command::Apply => "apply",
            Command::Cast => "cast",
            Command::Dip => "dip",
            Command::Drop | Command::DropType => "drop",
            Command::Engrave => "engrave",
            Command::Fire => "fire",
            Command::Invoke => "invoke",
            Command::Loot => "loot",
            Command::Offer => "offer",
            Command::Pay => "pay",
            Command::Pickup => "pickup",
            Command::PutOn => "puton",
            Command::Remove => "remove",
            Command::TakeOff => "takeoff",
            Command::TakeOffAll => "takeoffall",
            Command::Tip => "tip",
            Command::Rub => "rub",
            Command::Wear => "wear",
            Command::Wield => "wield",
            Command::Throw => "throw",
            Command::Untrap => "untrap",
            _ => return None,
        })
    }
}

/// Eight-way compass moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CompassDirection {
    N,
    E,
    S,
    W,
    NE,
    SE,
    SW,
    NW,
}

/// Non-compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MiscDirection {
    Up,
    Down,
    Wait,
}

/// Miscellaneous actions outside the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MiscAction {
    More,
}

/// One action taken by the agent, tagged with its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Command(Command),
    Compass(CompassDirection),
    /// Long-run variant of a compass move; labels identically.
    CompassLonger(CompassDirection),
    MiscDirection(MiscDirection),
    MiscAction(MiscAction),
    /// Raw keypress or any value outside the known families.
    Other(u8),
}

impl Action {
    /// Label for an inventory-relevant action, if this is one.
    pub fn tracked_label(&self) -> Option<&'static str> {
        match self {
            Action::Command(cmd) => cmd.tracked_label(),
            _ => None,
        }
    }

    /// Canonical label for this action. Every action resolves to exactly
    /// one label; unmapped values resolve to `"unknown"`.
    pub fn label(&self) -> String {
        match self {
            Action::Command(cmd) => match cmd.tracked_label() {
                Some(label) => label.to_string(),
                None => cmd.to_string(),
            },
            Action::Compass(dir) | Action::CompassLonger(dir) => format!("move_{dir}"),
            Action::MiscDirection(MiscDirection::Up) => "move_up".to_string(),
            Action::MiscDirection(MiscDirection::Down) => "move_down".to_string(),
            Action::MiscDirection(MiscDirection::Wait) => "wait".to_string(),
            Action::MiscAction(misc) => misc.to_string(),
            Action::Other(_) => UNKNOWN_ACTION_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tracked_commands_use_table_label() {
        assert_eq!(Action::Command(Command::Eat).label(), "eat");
        assert_eq!(Action::Command(Command::Drop).label(), "drop");
        assert_eq!(Action::Command(Command::DropType).label(), "drop");
        assert_eq!(Action::Command(Command::TakeOffAll).label(), "takeoffall");
        assert_eq!(Action::Command(Command::PutOn).label(), "puton");
    }

    #[test]
    fn test_untracked_commands_use_own_name() {
        assert_eq!(Action::Command(Command::Search).label(), "search");
        assert_eq!(Action::Command(Command::Pray).label(), "pray");
        assert_eq!(Action::Command(Command::Kick).label(), "kick");
        assert!(Action::Command(Command::Search).tracked_label().is_none());
    }

    #[test]
    fn test_compass_moves() {
        assert_eq!(Action::Compass(CompassDirection::N).label(), "move_n");
        assert_eq!(Action::Compass(CompassDirection::SW).label(), "move_sw");
        assert_eq!(
            Action::CompassLonger(CompassDirection::E).label(),
            "move_e"
        );
    }

    #[test]
    fn test_misc_directions() {
        assert_eq!(Action::MiscDirection(MiscDirection::Up).label(), "move_up");
        assert_eq!(
            Action::MiscDirection(MiscDirection::Down).label(),
            "move_down"
        );
        assert_eq!(Action::MiscDirection(MiscDirection::Wait).label(), "wait");
    }

    #[test]
    fn test_unmapped_action_is_unknown() {
        assert_eq!(Action::Other(0x1b).label(), "unknown");
        assert!(Action::Other(0x1b).tracked_label().is_none());
    }

    #[test]
    fn test_every_command_has_a_label() {
        for cmd in Command::iter() {
            assert!(!Action::Command(cmd).label().is_empty());
        }
    }
}
