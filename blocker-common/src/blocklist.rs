mod user;

use core::sync::atomic::{AtomicU64, Ordering};

/// Empty slot word. The occupancy bit distinguishes "nothing
/// configured" from a configured 0.0.0.0.
pub const SLOT_EMPTY: u64 = 0;

const OCCUPIED: u64 = 1 << 32;
const ADDR_MASK: u64 = 0x0000_0000_FFFF_FFFF;

/// The one blocked IPv4 address, held in host byte order.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "user"), derive(Debug))]
#[cfg_attr(feature = "user", derive(Hash))]
pub struct BlockedIp(u32);

impl BlockedIp {
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Host-order bits of the address.
    pub fn to_bits(self) -> u32 {
        self.0
    }

    /// Network-order octets, for comparison against the source field
    /// as it sits in the packet.
    pub fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// Packs an optional address into the single slot word shared between
/// the kernel map, the userspace writer and [`BlocklistCell`].
#[inline]
pub fn encode_slot(ip: Option<BlockedIp>) -> u64 {
    match ip {
        Some(ip) => OCCUPIED | ip.0 as u64,
        None => SLOT_EMPTY,
    }
}

#[inline]
pub fn decode_slot(raw: u64) -> Option<BlockedIp> {
    if raw & OCCUPIED != 0 {
        Some(BlockedIp((raw & ADDR_MASK) as u32))
    } else {
        None
    }
}

/// Single-slot configuration cell.
///
/// Writers overwrite the whole word, readers load it; a read observes
/// the old or the new value, never a torn one. `get` is wait-free and
/// never allocates.
pub struct BlocklistCell(AtomicU64);

impl BlocklistCell {
    pub const fn new() -> Self {
        Self(AtomicU64::new(SLOT_EMPTY))
    }

    pub fn set(&self, ip: BlockedIp) {
        self.0.store(encode_slot(Some(ip)), Ordering::Relaxed);
    }

    pub fn clear(&self) {
        self.0.store(SLOT_EMPTY, Ordering::Relaxed);
    }

    pub fn get(&self) -> Option<BlockedIp> {
        decode_slot(self.0.load(Ordering::Relaxed))
    }
}

impl Default for BlocklistCell {
    fn default() -> Self {
        Self::new()
    }
}
