//! Player privilege bitmask.
//!
//! Privileges are a set of permission flags attached to every player. A command
//! declares the privileges it requires and a sender may invoke it when at least
//! one of the required bits is present in the sender's own mask.
//!
//! # Examples
//!
//! ```
//! use chatcmd::privileges::Privileges;
//!
//! let admin = Privileges::NORMAL | Privileges::ADMIN;
//! assert!(admin.intersects(Privileges::ADMIN));
//! assert!(!admin.intersects(Privileges::DANGEROUS));
//! ```

use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

/// A set of privilege flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Privileges(u32);

/// Names accepted in configuration files and on the command line.
const NAMED: [(&str, Privileges); 10] = [
    ("normal", Privileges::NORMAL),
    ("verified", Privileges::VERIFIED),
    ("whitelisted", Privileges::WHITELISTED),
    ("supporter", Privileges::SUPPORTER),
    ("premium", Privileges::PREMIUM),
    ("tournament", Privileges::TOURNAMENT),
    ("nominator", Privileges::NOMINATOR),
    ("mod", Privileges::MOD),
    ("admin", Privileges::ADMIN),
    ("dangerous", Privileges::DANGEROUS),
];

impl Privileges {
    /// No privileges at all, a restricted player.
    pub const NONE: Privileges = Privileges(0);
    /// Unrestricted player.
    pub const NORMAL: Privileges = Privileges(1 << 0);
    /// Player who has logged in at least once.
    pub const VERIFIED: Privileges = Privileges(1 << 1);
    /// Player whose scores bypass anticheat checks.
    pub const WHITELISTED: Privileges = Privileges(1 << 2);
    pub const SUPPORTER: Privileges = Privileges(1 << 4);
    pub const PREMIUM: Privileges = Privileges(1 << 5);
    pub const TOURNAMENT: Privileges = Privileges(1 << 10);
    pub const NOMINATOR: Privileges = Privileges(1 << 11);
    /// Chat moderator.
    pub const MOD: Privileges = Privileges(1 << 12);
    /// Player management.
    pub const ADMIN: Privileges = Privileges(1 << 13);
    /// Developer level access, able to write raw data to clients.
    pub const DANGEROUS: Privileges = Privileges(1 << 14);

    /// Builds a mask from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Privileges(bits)
    }

    /// Returns `true` when at least one bit of `required` is set in `self`.
    ///
    /// This is the check used to gate commands.
    pub const fn intersects(self, required: Privileges) -> bool {
        self.0 & required.0 != 0
    }

    /// Returns `true` when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Privileges) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Privileges {
    type Output = Privileges;

    fn bitor(self, rhs: Privileges) -> Privileges {
        Privileges(self.0 | rhs.0)
    }
}

impl BitOrAssign for Privileges {
    fn bitor_assign(&mut self, rhs: Privileges) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Privileges {
    type Output = Privileges;

    fn bitand(self, rhs: Privileges) -> Privileges {
        Privileges(self.0 & rhs.0)
    }
}

impl fmt::Display for Privileges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect::<Vec<&str>>();

        if names.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{}", names.join(","))
    }
}

/// Error returned when a privilege name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown privilege `{0}`")]
pub struct UnknownPrivilege(pub String);

impl FromStr for Privileges {
    type Err = UnknownPrivilege;

    /// Parses a comma separated list of privilege names, e.g. `normal,admin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut privileges = Privileges::NONE;

        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let lowered = name.to_lowercase();
            match NAMED.iter().find(|(known, _)| *known == lowered) {
                Some((_, flag)) => privileges |= *flag,
                None => return Err(UnknownPrivilege(name.to_owned())),
            }
        }

        Ok(privileges)
    }
}

/// Privileges are written either as raw bits or as a list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrivileges {
    Bits(u32),
    Names(Vec<String>),
    List(String),
}

impl<'de> Deserialize<'de> for Privileges {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawPrivileges::deserialize(deserializer)? {
            RawPrivileges::Bits(bits) => Ok(Privileges(bits)),
            RawPrivileges::Names(names) => names.join(",").parse().map_err(de::Error::custom),
            RawPrivileges::List(list) => list.parse().map_err(de::Error::custom),
        }
    }
}
