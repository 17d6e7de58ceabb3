#![cfg(any(feature = "tokio", feature = "async-std"))]

use crate::Result;
use serde::Serialize;
use std::{net::Ipv4Addr, ops::DerefMut};

// This module could be expanded to be used with `PerfEventArray`
// That way we wouldn't depend on having a tokio or async_std runtime
// to log the events and that could expand our supported platforms.
use aya::{
    maps::{
        perf::{AsyncPerfEventArray, AsyncPerfEventArrayBuffer},
        Map, MapRefMut,
    },
    util::online_cpus,
    Bpf,
};
use blocker_common::DropEvent;
use bytes::BytesMut;

#[cfg(feature = "tokio")]
use tokio::spawn;

#[cfg(feature = "async-std")]
use async_std::task::spawn;

use crate::EVENT_ARRAY;

pub struct Logger {
    event_array: AsyncPerfEventArray<MapRefMut>,
}

impl Logger {
    fn new_with_name(bpf: &Bpf, map_name: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            event_array: AsyncPerfEventArray::try_from(bpf.map_mut(map_name.as_ref())?)?,
        })
    }

    pub fn new(bpf: &Bpf) -> Result<Self> {
        Self::new_with_name(bpf, EVENT_ARRAY)
    }

    pub fn init(&mut self) -> Result<()> {
        for cpu_id in online_cpus()? {
            let buf = self.event_array.open(cpu_id, None)?;
            spawn(log_events(buf));
        }

        Ok(())
    }
}

pub async fn log_events<T: DerefMut<Target = Map>>(mut buf: AsyncPerfEventArrayBuffer<T>) {
    let mut buffers = (0..10)
        .map(|_| BytesMut::with_capacity(1024))
        .collect::<Vec<_>>();
    loop {
        // Lost events (ring overflow) are dropped silently, as is the
        // whole sink: it never affects verdicts.
        let events = buf.read_events(&mut buffers).await.unwrap();
        buffers[0..events.read]
            .iter_mut()
            // SAFETY: read_events makes sure buf is initialized to a DropEvent
            // Also DropEvent is Copy
            .map(|buf| unsafe { buf_to_event(buf) })
            .for_each(|event| {
                let dropped = DropFormatted::from(event);
                let Ok(dropped) = serde_json::to_string(&dropped) else { return; };
                tracing::info!(target: "packet_log", "{dropped}");
            });
    }
}

#[derive(Debug, Clone, Serialize)]
struct DropFormatted {
    source_ip: Ipv4Addr,
    timestamp: String,
}

impl From<DropEvent> for DropFormatted {
    fn from(value: DropEvent) -> Self {
        let timestamp =
            chrono::offset::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        Self {
            source_ip: Ipv4Addr::from(value.source),
            timestamp,
        }
    }
}

unsafe fn buf_to_event(buf: &mut BytesMut) -> DropEvent {
    let ptr = buf.as_ptr() as *const DropEvent;
    ptr.read_unaligned()
}
