//! Biotechnica schema: a lab reports one entry per running culture, and each
//! culture carries its own processes and sequenced pages.

use breach_common::schema::{MessageRoot, ProcessEntry};
use breach_common::target::Target;
use rand::Rng;

use crate::{Synthesize, page_align, pick};

const LABS: &[&str] = &["night-city-02", "mexico-agro", "delamain-annex"];
const STRAINS: &[&str] = &["cn-2077", "soy-ix", "mycelia-b", "kelp-r4"];
const IMAGES: &[&str] = &[
    "bioreactor",
    "sequencer",
    "nutrient-pump",
    "climate-ctl",
    "genome-cache",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiotechnicaMessageRoot {
    pub lab: String,
    pub cultures: Vec<BiotechnicaCulture>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiotechnicaCulture {
    pub strain: String,
    pub processes: Vec<BiotechnicaProcessList>,
    pub pages: Vec<GenePage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiotechnicaProcessList {
    pub pid: u32,
    pub name: String,
    pub parent: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenePage {
    pub address: u64,
    pub length: u32,
    pub sequenced: bool,
}

impl BiotechnicaMessageRoot {
    pub fn new(lab: impl Into<String>) -> Self {
        Self {
            lab: lab.into(),
            cultures: Vec::new(),
        }
    }

    pub fn with_culture(mut self, culture: BiotechnicaCulture) -> Self {
        self.cultures.push(culture);
        self
    }
}

impl BiotechnicaCulture {
    pub fn new(strain: impl Into<String>) -> Self {
        Self {
            strain: strain.into(),
            processes: Vec::new(),
            pages: Vec::new(),
        }
    }

    pub fn with_process(mut self, process: BiotechnicaProcessList) -> Self {
        self.processes.push(process);
        self
    }

    pub fn with_page(mut self, page: GenePage) -> Self {
        self.pages.push(page);
        self
    }
}

impl BiotechnicaProcessList {
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: u32) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl ProcessEntry for BiotechnicaProcessList {
    fn pid(&self) -> u32 {
        self.pid
    }

    fn image_name(&self) -> &str {
        &self.name
    }
}

impl MessageRoot for BiotechnicaMessageRoot {
    type Entry = BiotechnicaProcessList;

    const TARGET: Target = Target::Biotechnica;

    fn process_list(&self) -> Vec<Self::Entry> {
        self.cultures
            .iter()
            .flat_map(|culture| culture.processes.iter().cloned())
            .collect()
    }

    fn memory_mapping(&self) -> impl Iterator<Item = String> + '_ {
        let lab = &self.lab;
        self.cultures.iter().flat_map(move |culture| {
            culture.pages.iter().map(move |page| {
                let state = if page.sequenced { "sequenced" } else { "raw" };
                format!(
                    "{lab}:{} {:#x}+{:#x} {state}",
                    culture.strain, page.address, page.length
                )
            })
        })
    }
}

impl Synthesize for BiotechnicaMessageRoot {
    fn synthesize<G: Rng>(rng: &mut G) -> Self {
        let mut root = BiotechnicaMessageRoot::new(pick(rng, LABS));
        let mut pid: u32 = rng.random_range(100..900);

        for _ in 0..rng.random_range(1..=3) {
            let mut culture = BiotechnicaCulture::new(pick(rng, STRAINS));
            let supervisor = pid;

            for idx in 0..rng.random_range(1..=3) {
                let process = BiotechnicaProcessList::new(pid, pick(rng, IMAGES));
                culture = culture.with_process(if idx == 0 {
                    process
                } else {
                    process.with_parent(supervisor)
                });
                pid += rng.random_range(1..64);
            }

            let mut address = page_align(rng.random_range(0x10_0000..0x7fff_0000));
            for _ in 0..rng.random_range(1..=4) {
                let length: u32 = rng.random_range(1..=16) * 0x1000;
                culture = culture.with_page(GenePage {
                    address,
                    length,
                    sequenced: rng.random_bool(0.7),
                });
                address += u64::from(length);
            }

            root = root.with_culture(culture);
        }
        root
    }
}
