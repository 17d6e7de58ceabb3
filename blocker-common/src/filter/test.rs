#![cfg(test)]

use crate::blocklist::{BlockedIp, BlocklistCell};
use crate::filter::{decide, evaluate, Verdict};
use crate::packet::{ETH_HDR_LEN, ETH_P_IP, IPV4_HDR_LEN};
use test_case::test_case;

const FRAME_LEN: usize = ETH_HDR_LEN + IPV4_HDR_LEN;

fn ipv4_frame(source: [u8; 4]) -> [u8; FRAME_LEN] {
    frame(ETH_P_IP, source)
}

fn frame(ethertype: u16, source: [u8; 4]) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[12..14].copy_from_slice(&ethertype.to_be_bytes());
    frame[ETH_HDR_LEN] = 0x45;
    frame[ETH_HDR_LEN + 12..ETH_HDR_LEN + 16].copy_from_slice(&source);
    frame
}

const TEN_FIVE: BlockedIp = BlockedIp::new(0x0A00_0005);

#[test_case([10, 0, 0, 5], Verdict::Deny)]
#[test_case([10, 0, 0, 6], Verdict::Admit)]
#[test_case([10, 0, 0, 4], Verdict::Admit)]
#[test_case([5, 0, 0, 10], Verdict::Admit; "octets reversed")]
#[test_case([0, 0, 0, 0], Verdict::Admit)]
fn deny_iff_source_matches(source: [u8; 4], verdict: Verdict) {
    assert_eq!(decide(source, Some(TEN_FIVE)), verdict);
    assert_eq!(evaluate(&ipv4_frame(source), Some(TEN_FIVE)), verdict);
}

#[test]
fn empty_store_admits_everything() {
    assert_eq!(decide([10, 0, 0, 5], None), Verdict::Admit);
    assert_eq!(evaluate(&ipv4_frame([10, 0, 0, 5]), None), Verdict::Admit);
}

#[test]
fn clearing_the_store_readmits_a_blocked_source() {
    let cell = BlocklistCell::new();
    cell.set(TEN_FIVE);
    let frame = ipv4_frame([10, 0, 0, 5]);
    assert_eq!(evaluate(&frame, cell.get()), Verdict::Deny);
    cell.clear();
    assert_eq!(evaluate(&frame, cell.get()), Verdict::Admit);
}

#[test_case(0)]
#[test_case(10)]
#[test_case(ETH_HDR_LEN - 1)]
fn short_frames_admit_regardless_of_store(len: usize) {
    let frame = ipv4_frame([10, 0, 0, 5]);
    assert_eq!(evaluate(&frame[..len], Some(TEN_FIVE)), Verdict::Admit);
    assert_eq!(evaluate(&frame[..len], None), Verdict::Admit);
}

#[test_case(ETH_HDR_LEN)]
#[test_case(FRAME_LEN - 1)]
fn incomplete_ipv4_header_admits(len: usize) {
    let frame = ipv4_frame([10, 0, 0, 5]);
    assert_eq!(evaluate(&frame[..len], Some(TEN_FIVE)), Verdict::Admit);
}

#[test_case(0x0806; "arp")]
#[test_case(0x86DD; "ipv6")]
#[test_case(0x8100; "vlan tagged ipv4")]
fn non_ipv4_frames_admit_even_with_matching_source(ethertype: u16) {
    let frame = frame(ethertype, [10, 0, 0, 5]);
    assert_eq!(evaluate(&frame, Some(TEN_FIVE)), Verdict::Admit);
}

#[test]
fn evaluate_is_idempotent() {
    let frame = ipv4_frame([10, 0, 0, 5]);
    let first = evaluate(&frame, Some(TEN_FIVE));
    let second = evaluate(&frame, Some(TEN_FIVE));
    assert_eq!(first, second);
    assert_eq!(first, Verdict::Deny);
}

#[test]
fn denied_source_octets_match_the_diagnostic_payload() {
    // The event payload is the parsed source field itself.
    let frame = ipv4_frame([10, 0, 0, 5]);
    let (_eth, ipv4) = crate::packet::parse(&frame).unwrap();
    assert_eq!(decide(ipv4.source(), Some(TEN_FIVE)), Verdict::Deny);
    assert_eq!(ipv4.source(), [10, 0, 0, 5]);
    assert_eq!(TEN_FIVE.octets(), [10, 0, 0, 5]);
}

#[test]
fn verdicts_map_to_xdp_actions() {
    assert_eq!(Verdict::Admit as u32, 2);
    assert_eq!(Verdict::Deny as u32, 1);
}
