mod test;

use crate::blocklist::BlockedIp;
use crate::packet;

// These are also defined in aya-bpf::bindings::xdp_action.
// We redefine them here as not to depend on aya-bpf in this crate.
const XDP_DROP: u32 = 1;
const XDP_PASS: u32 = 2;

/// Outcome of the filter for one frame. There are no other outcomes;
/// every failure mode folds into `Admit`.
#[repr(u32)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "user"), derive(Debug))]
#[cfg_attr(feature = "user", derive(Hash, serde::Serialize))]
pub enum Verdict {
    /// Hand the frame to normal protocol processing.
    Admit = XDP_PASS,
    /// Discard the frame.
    Deny = XDP_DROP,
}

/// Compares a parsed source address against the configured blocklist.
///
/// An empty store admits everything; nothing here can fail.
#[inline]
pub fn decide(source: [u8; 4], blocked: Option<BlockedIp>) -> Verdict {
    match blocked {
        Some(ip) if source == ip.octets() => Verdict::Deny,
        _ => Verdict::Admit,
    }
}

/// The full per-packet pipeline: parse, look up, compare.
///
/// Frames the parser rejects (truncated, non-IPv4) are admitted; the
/// filter catches one known-bad address, it does not police protocol
/// correctness.
pub fn evaluate(frame: &[u8], blocked: Option<BlockedIp>) -> Verdict {
    match packet::parse(frame) {
        Ok((_eth, ipv4)) => decide(ipv4.source(), blocked),
        Err(_) => Verdict::Admit,
    }
}
