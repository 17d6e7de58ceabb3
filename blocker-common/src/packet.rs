mod test;

/// Length of an untagged Ethernet header.
pub const ETH_HDR_LEN: usize = 14;
/// Minimal IPv4 header length (no options).
pub const IPV4_HDR_LEN: usize = 20;
/// Ethertype of IPv4, host order.
pub const ETH_P_IP: u16 = 0x0800;

const ETHERTYPE_OFFSET: usize = 12;
const SADDR_OFFSET: usize = 12;

/// Why a frame was not handed to the decision engine.
///
/// A rejection never surfaces to the caller of the filter; it folds
/// into an admit verdict.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "user"), derive(Debug))]
pub enum Rejection {
    /// Buffer shorter than the header being read.
    Truncated,
    /// Ethertype is not IPv4. VLAN tags are not unwrapped, so tagged
    /// IPv4 frames land here too.
    NotIpv4,
}

/// View over the Ethernet header of a frame. Borrows the frame, valid
/// only while the frame is.
#[derive(Clone, Copy)]
#[cfg_attr(any(test, feature = "user"), derive(Debug))]
pub struct EthHdr<'a> {
    bytes: &'a [u8],
}

impl EthHdr<'_> {
    pub fn dest(&self) -> [u8; 6] {
        [
            self.bytes[0],
            self.bytes[1],
            self.bytes[2],
            self.bytes[3],
            self.bytes[4],
            self.bytes[5],
        ]
    }

    pub fn source(&self) -> [u8; 6] {
        [
            self.bytes[6],
            self.bytes[7],
            self.bytes[8],
            self.bytes[9],
            self.bytes[10],
            self.bytes[11],
        ]
    }

    /// The protocol-type field, converted to host order.
    pub fn ethertype(&self) -> u16 {
        u16::from_be_bytes([self.bytes[ETHERTYPE_OFFSET], self.bytes[ETHERTYPE_OFFSET + 1]])
    }
}

/// View over the minimal IPv4 header following the Ethernet header.
#[derive(Clone, Copy)]
#[cfg_attr(any(test, feature = "user"), derive(Debug))]
pub struct Ipv4Hdr<'a> {
    bytes: &'a [u8],
}

impl Ipv4Hdr<'_> {
    /// Source address octets in wire (network) order.
    pub fn source(&self) -> [u8; 4] {
        [
            self.bytes[SADDR_OFFSET],
            self.bytes[SADDR_OFFSET + 1],
            self.bytes[SADDR_OFFSET + 2],
            self.bytes[SADDR_OFFSET + 3],
        ]
    }
}

/// Validates a raw frame and returns bounds-checked header views.
///
/// No checksum validation, no IP options, no total-length cross-check;
/// the filter only needs the source address to exist.
pub fn parse(frame: &[u8]) -> Result<(EthHdr<'_>, Ipv4Hdr<'_>), Rejection> {
    if frame.len() < ETH_HDR_LEN {
        return Err(Rejection::Truncated);
    }
    let eth = EthHdr {
        bytes: &frame[..ETH_HDR_LEN],
    };
    if eth.ethertype() != ETH_P_IP {
        return Err(Rejection::NotIpv4);
    }
    if frame.len() < ETH_HDR_LEN + IPV4_HDR_LEN {
        return Err(Rejection::Truncated);
    }
    let ipv4 = Ipv4Hdr {
        bytes: &frame[ETH_HDR_LEN..ETH_HDR_LEN + IPV4_HDR_LEN],
    };
    Ok((eth, ipv4))
}
