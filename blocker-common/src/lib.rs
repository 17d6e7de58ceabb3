#![cfg_attr(not(feature = "user"), no_std)]
mod blocklist;
mod filter;
mod packet;

pub use blocklist::{decode_slot, encode_slot, BlockedIp, BlocklistCell, SLOT_EMPTY};
pub use filter::{decide, evaluate, Verdict};
pub use packet::{parse, EthHdr, Ipv4Hdr, Rejection, ETH_HDR_LEN, ETH_P_IP, IPV4_HDR_LEN};

/// Number of entries in the kernel-side blocklist map. The store is a
/// single slot; growing this means changing the data model, not just
/// the constant.
pub const BLOCKLIST_CAPACITY: u32 = 1;

/// Key of the one slot in the blocklist map.
pub const SLOT_KEY: u32 = 0;

/// Record emitted on every denied packet, carrying the source address
/// octets as they appeared on the wire.
#[repr(C)]
#[derive(Clone, Copy)]
#[cfg_attr(feature = "user", derive(Debug))]
pub struct DropEvent {
    pub source: [u8; 4],
}

#[cfg(feature = "user")]
unsafe impl aya::Pod for DropEvent {}
