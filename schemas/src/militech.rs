//! Militech schema: everything sits behind a single ICE layer, processes are
//! addressed by handle and memory is exposed as ICE shards.

use std::fmt;

use breach_common::schema::{MessageRoot, ProcessEntry};
use breach_common::target::Target;
use rand::Rng;

use crate::{Synthesize, page_align, pick};

const IMAGES: &[&str] = &[
    "crusher-fw",
    "avenger-ctl",
    "sentinel-iff",
    "kang-bridge",
    "mantis-daemon",
    "aegis-core",
];
const TAGS: &[&str] = &["heap", "stack", "image", "ice-cache", "shared"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilitechMessageRoot {
    pub ice: MilitechIce,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilitechIce {
    pub layer: u8,
    pub processes: Vec<MilitechIceProcessList>,
    pub shards: Vec<IceShard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilitechIceProcessList {
    pub handle: u32,
    pub image: String,
    pub clearance: Clearance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearance {
    Public,
    Restricted,
    Black,
}

impl fmt::Display for Clearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Clearance::Public => "public",
            Clearance::Restricted => "restricted",
            Clearance::Black => "black",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceShard {
    pub base: u64,
    pub size: u64,
    pub tag: String,
}

impl MilitechMessageRoot {
    pub fn new(layer: u8) -> Self {
        Self {
            ice: MilitechIce {
                layer,
                ..MilitechIce::default()
            },
        }
    }

    pub fn with_process(mut self, process: MilitechIceProcessList) -> Self {
        self.ice.processes.push(process);
        self
    }

    pub fn with_shard(mut self, shard: IceShard) -> Self {
        self.ice.shards.push(shard);
        self
    }
}

impl MilitechIceProcessList {
    pub fn new(handle: u32, image: impl Into<String>) -> Self {
        Self {
            handle,
            image: image.into(),
            clearance: Clearance::Public,
        }
    }

    pub fn with_clearance(mut self, clearance: Clearance) -> Self {
        self.clearance = clearance;
        self
    }
}

impl ProcessEntry for MilitechIceProcessList {
    fn pid(&self) -> u32 {
        self.handle
    }

    fn image_name(&self) -> &str {
        &self.image
    }
}

impl MessageRoot for MilitechMessageRoot {
    type Entry = MilitechIceProcessList;

    const TARGET: Target = Target::Militech;

    fn process_list(&self) -> Vec<Self::Entry> {
        self.ice.processes.clone()
    }

    fn memory_mapping(&self) -> impl Iterator<Item = String> + '_ {
        let layer = self.ice.layer;
        self.ice.shards.iter().enumerate().map(move |(idx, shard)| {
            format!(
                "ice/{layer} shard {idx:02} base={:#x} size={:#x} [{}]",
                shard.base, shard.size, shard.tag
            )
        })
    }
}

impl Synthesize for MilitechMessageRoot {
    fn synthesize<G: Rng>(rng: &mut G) -> Self {
        let mut root = MilitechMessageRoot::new(rng.random_range(1..=7));

        for _ in 0..rng.random_range(2..=6) {
            let clearance = match rng.random_range(0..10) {
                0..=5 => Clearance::Public,
                6..=8 => Clearance::Restricted,
                _ => Clearance::Black,
            };
            // Handles are multiples of four, like the kernel hands them out.
            let handle = rng.random_range(1..0x400) * 4;
            root = root.with_process(
                MilitechIceProcessList::new(handle, pick(rng, IMAGES)).with_clearance(clearance),
            );
        }

        for _ in 0..rng.random_range(2..=5) {
            root = root.with_shard(IceShard {
                base: page_align(rng.random_range(0x1_0000_0000..0x7fff_0000_0000)),
                size: page_align(rng.random_range(0x1000..0x10_0000)) + 0x1000,
                tag: pick(rng, TAGS).to_string(),
            });
        }
        root
    }
}
