#![cfg(feature = "user")]

use crate::blocklist::BlockedIp;
use std::fmt;
use std::net::Ipv4Addr;

impl From<Ipv4Addr> for BlockedIp {
    fn from(addr: Ipv4Addr) -> Self {
        BlockedIp::new(u32::from(addr))
    }
}

impl From<BlockedIp> for Ipv4Addr {
    fn from(ip: BlockedIp) -> Self {
        Ipv4Addr::from(ip.to_bits())
    }
}

impl fmt::Display for BlockedIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ipv4Addr::from(*self).fmt(f)
    }
}
