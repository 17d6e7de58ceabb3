#![no_std]
#![no_main]

use aya_bpf::{
    bindings::xdp_action,
    macros::{map, xdp},
    maps::{Array, PerfEventArray},
    programs::XdpContext,
};

use blocker_common::{
    decide, decode_slot, parse, DropEvent, Verdict, BLOCKLIST_CAPACITY, SLOT_KEY,
};

// Map names are hardcoded here and in the userspace crate; const values
// as map names are not supported yet (rust-lang/rust#52393).

#[map(name = "BLOCKLIST")]
static mut BLOCKLIST: Array<u64> = Array::<u64>::with_max_entries(BLOCKLIST_CAPACITY, 0);

#[map(name = "EVENTS")]
static mut EVENTS: PerfEventArray<DropEvent> = PerfEventArray::<DropEvent>::with_max_entries(1024, 0);

#[xdp(name = "ip_blocker")]
pub fn ip_blocker(ctx: XdpContext) -> u32 {
    match unsafe { try_ip_blocker(&ctx) } {
        Ok(action) => action,
        // Fail open: an unclassifiable frame passes through untouched.
        Err(_) => xdp_action::XDP_PASS,
    }
}

unsafe fn try_ip_blocker(ctx: &XdpContext) -> Result<u32, i64> {
    let (_eth, ipv4) = match parse(frame_bytes(ctx)) {
        Ok(headers) => headers,
        Err(_) => return Ok(xdp_action::XDP_PASS),
    };

    let blocked = BLOCKLIST.get(SLOT_KEY).copied().and_then(decode_slot);
    let verdict = decide(ipv4.source(), blocked);
    if let Verdict::Deny = verdict {
        let event = DropEvent {
            source: ipv4.source(),
        };
        // Best effort; a full ring drops the event, never the verdict.
        EVENTS.output(ctx, &event, 0);
    }

    Ok(verdict as u32)
}

unsafe fn frame_bytes(ctx: &XdpContext) -> &[u8] {
    core::slice::from_raw_parts(ctx.data() as *const u8, ctx.data_end() - ctx.data())
}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    unsafe { core::hint::unreachable_unchecked() }
}
