//! Arasaka schema: a session-tagged message carrying a flat process list and
//! a table of mapped regions.

use std::fmt;

use breach_common::schema::{MessageRoot, ProcessEntry};
use breach_common::target::Target;
use rand::Rng;

use crate::{Synthesize, page_align, pick};

const IMAGES: &[&str] = &[
    "saburo.sys",
    "hanako-relay",
    "daemon-watch",
    "relic-vault",
    "soulkiller",
    "kiroshi-sync",
    "netwatch-shim",
];
const OWNERS: &[&str] = &["SYSTEM", "ice-operator", "counterintel", "tower-admin"];
const BASE_ADDRESS: u64 = 0x7ff6_0000_0000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArasakaMessageRoot {
    pub session: String,
    pub message: ArasakaMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArasakaMessage {
    pub process_list: Vec<ArasakaMessageProcessList>,
    pub regions: Vec<ArasakaRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArasakaMessageProcessList {
    pub pid: u32,
    pub name: String,
    pub owner: String,
    pub threads: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArasakaRegion {
    pub start: u64,
    pub end: u64,
    pub protection: Protection,
    pub module: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Protection {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.read, 'r'),
            flag(self.write, 'w'),
            flag(self.execute, 'x')
        )
    }
}

impl ArasakaMessageRoot {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            message: ArasakaMessage::default(),
        }
    }

    pub fn with_process(mut self, process: ArasakaMessageProcessList) -> Self {
        self.message.process_list.push(process);
        self
    }

    pub fn with_region(mut self, region: ArasakaRegion) -> Self {
        self.message.regions.push(region);
        self
    }
}

impl ArasakaMessageProcessList {
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            owner: String::from("SYSTEM"),
            threads: 1,
        }
    }
}

impl ProcessEntry for ArasakaMessageProcessList {
    fn pid(&self) -> u32 {
        self.pid
    }

    fn image_name(&self) -> &str {
        &self.name
    }
}

impl MessageRoot for ArasakaMessageRoot {
    type Entry = ArasakaMessageProcessList;

    const TARGET: Target = Target::Arasaka;

    fn process_list(&self) -> Vec<Self::Entry> {
        self.message.process_list.clone()
    }

    fn memory_mapping(&self) -> impl Iterator<Item = String> + '_ {
        self.message.regions.iter().map(|region| {
            format!(
                "{:#014x}-{:#014x} {} {}",
                region.start, region.end, region.protection, region.module
            )
        })
    }
}

impl Synthesize for ArasakaMessageRoot {
    fn synthesize<G: Rng>(rng: &mut G) -> Self {
        let mut root = ArasakaMessageRoot::new(format!("ars-{:08x}", rng.random::<u32>()));

        let mut pid: u32 = rng.random_range(400..1_200);
        let mut cursor: u64 = BASE_ADDRESS;
        for _ in 0..rng.random_range(3..=7) {
            let name = pick(rng, IMAGES);
            root = root.with_process(ArasakaMessageProcessList {
                pid,
                name: name.to_string(),
                owner: pick(rng, OWNERS).to_string(),
                threads: rng.random_range(1..=48),
            });

            let size = page_align(rng.random_range(0x1000..0x40_0000)) + 0x1000;
            root = root.with_region(ArasakaRegion {
                start: cursor,
                end: cursor + size,
                protection: Protection {
                    read: true,
                    write: rng.random_bool(0.4),
                    execute: rng.random_bool(0.5),
                },
                module: name.to_string(),
            });

            pid += rng.random_range(4..256);
            cursor += size + 0x1000;
        }
        root
    }
}
