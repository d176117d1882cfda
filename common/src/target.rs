//! # Target Identity
//!
//! The closed set of corporate networks a client can be bound to.
//!
//! Adding a network means adding a variant here and a schema in `breach-schemas`;
//! the client pipeline itself never branches on the target.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    Arasaka,
    Militech,
    Biotechnica,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Arasaka, Target::Militech, Target::Biotechnica];

    pub fn name(&self) -> &'static str {
        match self {
            Target::Arasaka => "Arasaka",
            Target::Militech => "Militech",
            Target::Biotechnica => "Biotechnica",
        }
    }

    /// Stable per-target salt, mixed into seeds so each network gets its own stream.
    pub fn salt(&self) -> u64 {
        match self {
            Target::Arasaka => 0x4152_4153_414b_4100,
            Target::Militech => 0x4d49_4c49_5445_4300,
            Target::Biotechnica => 0x4249_4f54_4543_4800,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = String;

    /// Parses a target name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Target::ALL
            .into_iter()
            .find(|target| target.name().to_ascii_lowercase() == lower)
            .ok_or_else(|| format!("invalid target: {s}"))
    }
}
