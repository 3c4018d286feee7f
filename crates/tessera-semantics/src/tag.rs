//! The closed set of transfer intents.
//!
//! Each [`SemanticTag`] is an immutable triple of flags:
//!
//! | Tag     | Keep  | Move  | Shallow |
//! |---------|-------|-------|---------|
//! | Copy    | true  | false | true    |
//! | Move    | true  | true  | true    |
//! | Abandon | false | true  | true    |
//! | Disown  | false | false | true    |
//! | Clone   | true  | false | false   |
//!
//! Consumers never branch on a wrapper's runtime contents. They resolve the
//! flags to an [`Operation`] once, through one exhaustive match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a value should be transferred into its new owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticTag {
    /// Shallow duplicate; source untouched, ownership shared.
    Copy,
    /// Shallow transfer; source fully reset afterwards.
    Move,
    /// Shallow transfer; source left only minimally valid.
    Abandon,
    /// Shallow duplicate without any ownership bookkeeping.
    Disown,
    /// Deep duplicate; source untouched.
    Clone,
}

/// The flag triple carried by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemanticFlags {
    pub keep: bool,
    #[serde(rename = "move")]
    pub moves: bool,
    pub shallow: bool,
}

/// The physical operation a consumer performs for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Reference or count increment, shallow.
    Share,
    /// Resource theft followed by a full reset of the source.
    Steal,
    /// Resource theft resetting only what the source's destruction needs.
    Abandon,
    /// Raw structural duplicate, no ownership bookkeeping.
    Disown,
    /// Recursive duplication of every owned sub-resource.
    Deep,
}

impl SemanticTag {
    pub const ALL: [SemanticTag; 5] = [
        SemanticTag::Copy,
        SemanticTag::Move,
        SemanticTag::Abandon,
        SemanticTag::Disown,
        SemanticTag::Clone,
    ];

    /// Whether the transfer keeps ownership bookkeeping intact.
    pub const fn keep(self) -> bool {
        matches!(self, Self::Copy | Self::Move | Self::Clone)
    }

    /// Whether resources are taken away from the source.
    pub const fn moves(self) -> bool {
        matches!(self, Self::Move | Self::Abandon)
    }

    /// Whether only the top-level representation is transferred.
    pub const fn shallow(self) -> bool {
        !matches!(self, Self::Clone)
    }

    pub const fn flags(self) -> SemanticFlags {
        SemanticFlags {
            keep: self.keep(),
            moves: self.moves(),
            shallow: self.shallow(),
        }
    }

    pub const fn operation(self) -> Operation {
        Operation::from_flags(self.flags())
    }

    /// Recover the tag carrying exactly these flags, if any.
    ///
    /// Only five of the eight triples name a tag: a deep transfer is always
    /// a keeping, non-moving one.
    pub const fn from_flags(flags: SemanticFlags) -> Option<Self> {
        match (flags.keep, flags.moves, flags.shallow) {
            (true, false, true) => Some(Self::Copy),
            (true, true, true) => Some(Self::Move),
            (false, true, true) => Some(Self::Abandon),
            (false, false, true) => Some(Self::Disown),
            (true, false, false) => Some(Self::Clone),
            (_, _, false) => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Copy => "Copy",
            Self::Move => "Move",
            Self::Abandon => "Abandon",
            Self::Disown => "Disown",
            Self::Clone => "Clone",
        }
    }
}

impl Operation {
    /// The single dispatch from flags to a physical operation.
    ///
    /// A deep flag wins over everything else.
    pub const fn from_flags(flags: SemanticFlags) -> Self {
        match (flags.keep, flags.moves, flags.shallow) {
            (_, _, false) => Self::Deep,
            (true, false, true) => Self::Share,
            (true, true, true) => Self::Steal,
            (false, true, true) => Self::Abandon,
            (false, false, true) => Self::Disown,
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Self::Share => "shallow copy, ownership shared",
            Self::Steal => "take resources, fully reset source",
            Self::Abandon => "take resources, minimally reset source",
            Self::Disown => "shallow copy, no ownership bookkeeping",
            Self::Deep => "recursive deep copy",
        }
    }
}

impl fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Share => write!(f, "share"),
            Self::Steal => write!(f, "steal"),
            Self::Abandon => write!(f, "abandon"),
            Self::Disown => write!(f, "disown"),
            Self::Deep => write!(f, "deep"),
        }
    }
}

impl std::str::FromStr for SemanticTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" | "copied" => Ok(Self::Copy),
            "move" | "moved" => Ok(Self::Move),
            "abandon" | "abandoned" => Ok(Self::Abandon),
            "disown" | "disowned" => Ok(Self::Disown),
            "clone" | "cloned" => Ok(Self::Clone),
            _ => Err(format!("unknown semantic tag: {s}")),
        }
    }
}
