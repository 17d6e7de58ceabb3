#![cfg(test)]

use crate::packet::{parse, Rejection, ETH_HDR_LEN, ETH_P_IP, IPV4_HDR_LEN};
use test_case::test_case;

const FRAME_LEN: usize = ETH_HDR_LEN + IPV4_HDR_LEN;

fn frame(ethertype: u16, source: [u8; 4]) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[..6].copy_from_slice(&[0xaa; 6]);
    frame[6..12].copy_from_slice(&[0xbb; 6]);
    frame[12..14].copy_from_slice(&ethertype.to_be_bytes());
    // Version 4, IHL 5, then zeros until the source address.
    frame[ETH_HDR_LEN] = 0x45;
    frame[ETH_HDR_LEN + 12..ETH_HDR_LEN + 16].copy_from_slice(&source);
    frame
}

#[test]
fn well_formed_frame_parses() {
    let frame = frame(ETH_P_IP, [10, 0, 0, 5]);
    let (eth, ipv4) = parse(&frame).unwrap();
    assert_eq!(eth.dest(), [0xaa; 6]);
    assert_eq!(eth.source(), [0xbb; 6]);
    assert_eq!(eth.ethertype(), ETH_P_IP);
    assert_eq!(ipv4.source(), [10, 0, 0, 5]);
}

#[test]
fn trailing_payload_is_ignored() {
    let mut padded = [0u8; FRAME_LEN + 128];
    padded[..FRAME_LEN].copy_from_slice(&frame(ETH_P_IP, [192, 168, 1, 1]));
    let (_eth, ipv4) = parse(&padded).unwrap();
    assert_eq!(ipv4.source(), [192, 168, 1, 1]);
}

#[test_case(0)]
#[test_case(1)]
#[test_case(10)]
#[test_case(ETH_HDR_LEN - 1)]
fn shorter_than_ethernet_header_is_truncated(len: usize) {
    let frame = frame(ETH_P_IP, [10, 0, 0, 5]);
    assert_eq!(parse(&frame[..len]).unwrap_err(), Rejection::Truncated);
}

#[test_case(ETH_HDR_LEN)]
#[test_case(ETH_HDR_LEN + 1)]
#[test_case(20)]
#[test_case(FRAME_LEN - 1)]
fn incomplete_ipv4_header_is_truncated(len: usize) {
    let frame = frame(ETH_P_IP, [10, 0, 0, 5]);
    assert_eq!(parse(&frame[..len]).unwrap_err(), Rejection::Truncated);
}

#[test_case(0x0806; "arp")]
#[test_case(0x86DD; "ipv6")]
#[test_case(0x8100; "vlan tagged")]
#[test_case(0x0000; "zero")]
fn non_ipv4_ethertype_is_rejected(ethertype: u16) {
    let frame = frame(ethertype, [10, 0, 0, 5]);
    assert_eq!(parse(&frame).unwrap_err(), Rejection::NotIpv4);
}
