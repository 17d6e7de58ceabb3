use std::net::Ipv4Addr;

use aya::{
    maps::{Array, MapRefMut},
    Bpf,
};
use blocker_common::{encode_slot, BlockedIp, BlocklistCell, SLOT_EMPTY, SLOT_KEY};

use crate::{Result, BLOCKLIST};

/// Control-plane handle over the single-slot blocklist map.
///
/// Writes go straight to the kernel map; a userspace mirror cell backs
/// [`current`](Self::current) so reads never round-trip through the
/// kernel.
pub struct StoreHandler {
    slot: Array<MapRefMut, u64>,
    mirror: BlocklistCell,
}

impl StoreHandler {
    pub fn new(bpf: &Bpf) -> Result<Self> {
        Self::new_with_name(bpf, BLOCKLIST)
    }

    fn new_with_name(bpf: &Bpf, map_name: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            slot: Array::try_from(bpf.map_mut(map_name.as_ref())?)?,
            mirror: BlocklistCell::new(),
        })
    }

    /// Overwrites the slot unconditionally. Safe to call while packets
    /// are being evaluated; the program observes the old or the new
    /// word, never a torn one.
    pub fn set(&mut self, addr: Ipv4Addr) -> Result<()> {
        let blocked = BlockedIp::from(addr);
        self.slot.set(SLOT_KEY, encode_slot(Some(blocked)), 0)?;
        self.mirror.set(blocked);
        Ok(())
    }

    /// Empties the slot, reverting to fail-open for all traffic.
    pub fn clear(&mut self) -> Result<()> {
        self.slot.set(SLOT_KEY, SLOT_EMPTY, 0)?;
        self.mirror.clear();
        Ok(())
    }

    pub fn current(&self) -> Option<Ipv4Addr> {
        self.mirror.get().map(Ipv4Addr::from)
    }
}
