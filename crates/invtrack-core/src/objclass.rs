//! Object class vocabulary.
//!
//! Mirrors the classic roguelike object-class codes. Codes arrive on the
//! observation's class channel as small integers; `MAX_OBJECT_CLASSES` is
//! the reserved "no object" sentinel for empty slots.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Slot sentinel: no object present.
pub const MAX_OBJECT_CLASSES: i16 = 18;

/// Category label used when a class code has no named bucket.
pub const UNKNOWN_CATEGORY_LABEL: &str = "unknown";

/// Object classes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ObjectClass {
    #[default]
    Random = 0,
    IllObj = 1,
    Weapon = 2,
    Armor = 3,
    Ring = 4,
    Amulet = 5,
    Tool = 6,
    Food = 7,
    Potion = 8,
    Scroll = 9,
    Spellbook = 10,
    Wand = 11,
    Coin = 12,
    Gem = 13,
    Rock = 14,
    Ball = 15,
    Chain = 16,
    Venom = 17,
}

impl ObjectClass {
    /// Decode a raw class code from the observation channel.
    pub const fn from_code(code: i16) -> Option<ObjectClass> {
        Some(match code {
            0 => ObjectClass::Random,
            1 => ObjectClass::IllObj,
            2 => ObjectClass::Weapon,
            3 => ObjectClass::Armor,
            4 => ObjectClass::Ring,
            5 => ObjectClass::Amulet,
            6 => ObjectClass::Tool,
            7 => ObjectClass::Food,
            8 => ObjectClass::Potion,
            9 => ObjectClass::Scroll,
            10 => ObjectClass::Spellbook,
            11 => ObjectClass::Wand,
            12 => ObjectClass::Coin,
            13 => ObjectClass::Gem,
            14 => ObjectClass::Rock,
            15 => ObjectClass::Ball,
            16 => ObjectClass::Chain,
            17 => ObjectClass::Venom,
            _ => return None,
        })
    }

    /// Coarse category label used as an aggregation key.
    pub const fn label(&self) -> &'static str {
        match self {
            ObjectClass::Weapon => "weapon",
            ObjectClass::Armor => "armor",
            ObjectClass::Ring => "ring",
            ObjectClass::Amulet => "amulet",
            ObjectClass::Tool => "tool",
            ObjectClass::Food => "food",
            ObjectClass::Potion => "potion",
            ObjectClass::Scroll => "scroll",
            ObjectClass::Spellbook => "spellbook",
            ObjectClass::Wand => "wand",
            ObjectClass::Coin => "gold",
            ObjectClass::Gem => "gem",
            ObjectClass::Rock => "rock",
            ObjectClass::Ball => "ball",
            ObjectClass::Chain => "chain",
            ObjectClass::Venom => "venom",
            ObjectClass::Random | ObjectClass::IllObj => UNKNOWN_CATEGORY_LABEL,
        }
    }
}

/// Category label for a raw class code; unrecognized codes bucket as
/// `"unknown"` rather than failing.
pub fn category_label(code: i16) -> &'static str {
    match ObjectClass::from_code(code) {
        Some(class) => class.label(),
        None => UNKNOWN_CATEGORY_LABEL,
    }
}
