#![allow(dead_code)] // not every test binary uses every helper

use armlet_jit::{GuestBus, LocationDescriptor};
use armlet_types::Cond;

/// Flat little-endian guest memory for driving the translator in tests.
pub struct SimpleBus {
    mem: Vec<u8>,
}

impl SimpleBus {
    pub fn new(size: usize) -> Self {
        Self { mem: vec![0; size] }
    }

    /// Place `words` at `addr`, little-endian.
    pub fn load_words(&mut self, addr: u32, words: &[u32]) {
        for (i, word) in words.iter().enumerate() {
            let off = addr as usize + i * 4;
            self.mem[off..off + 4].copy_from_slice(&word.to_le_bytes());
        }
    }
}

impl GuestBus for SimpleBus {
    fn read32(&self, vaddr: u32) -> u32 {
        let off = vaddr as usize;
        u32::from_le_bytes(self.mem[off..off + 4].try_into().unwrap())
    }
}

/// An ARM-mode, little-endian location with static condition AL.
pub fn loc(pc: u32) -> LocationDescriptor {
    LocationDescriptor::new(pc, false, false, Cond::Al)
}

/// Same, with an explicit static condition.
pub fn loc_cond(pc: u32, cond: Cond) -> LocationDescriptor {
    LocationDescriptor::new(pc, false, false, cond)
}
