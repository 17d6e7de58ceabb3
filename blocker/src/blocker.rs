use std::net::Ipv4Addr;

use aya::{
    include_bytes_aligned,
    programs::{Xdp, XdpFlags},
    Bpf,
};

use crate::{logger::Logger, store::StoreHandler, Result};

/// Represents a filter currently attached to an interface, dropping
/// every frame whose IPv4 source matches the configured address.
///
/// The blocklist holds at most one address; [`set_blocked_address`]
/// overwrites it and [`clear_blocked_address`] empties it. With an
/// empty blocklist every packet passes (the filter fails open).
///
/// Denied packets can be logged through [tracing], currently hardcoded
/// at `info` level, by using [`start_logging`](Self::start_logging).
///
/// [`set_blocked_address`]: Self::set_blocked_address
/// [`clear_blocked_address`]: Self::clear_blocked_address
pub struct Blocker {
    _bpf: Bpf,
    store: StoreHandler,
    logger: Logger,
}

impl Blocker {
    /// Creates a new [Blocker] attached to the given interface.
    ///
    /// The interface must already exist when calling this function.
    ///
    /// The program starts evaluating packets immediately, but with an
    /// empty blocklist it admits everything until an address is set.
    ///
    /// # Example
    /// ```no_run
    /// # use blocker::Blocker;
    /// let blocker = Blocker::new("eth0").unwrap();
    /// ```
    pub fn new(iface: impl AsRef<str>) -> Result<Blocker> {
        #[cfg(debug_assertions)]
        let mut bpf = Bpf::load(include_bytes_aligned!(
            "../../target/artifacts/bpfel-unknown-none/debug/blocker-ebpf"
        ))?;
        #[cfg(not(debug_assertions))]
        let mut bpf = Bpf::load(include_bytes_aligned!(
            "../../target/artifacts/bpfel-unknown-none/release/blocker-ebpf"
        ))?;

        let program: &mut Xdp = bpf.program_mut("ip_blocker").unwrap().try_into()?;
        program.load()?;
        program.attach(iface.as_ref(), XdpFlags::default())?;

        let store = StoreHandler::new(&bpf)?;
        let logger = Logger::new(&bpf)?;

        Ok(Self {
            _bpf: bpf,
            store,
            logger,
        })
    }

    /// Sets the blocked source address, overwriting any previous one.
    ///
    /// Safe to call at any time while packets are being evaluated.
    ///
    /// # Example
    /// ```no_run
    /// # use blocker::Blocker;
    /// let mut blocker = Blocker::new("eth0").unwrap();
    /// blocker.set_blocked_address("10.0.0.5".parse().unwrap()).unwrap();
    /// ```
    pub fn set_blocked_address(&mut self, addr: Ipv4Addr) -> Result<()> {
        self.store.set(addr)
    }

    /// Empties the blocklist; all traffic is admitted again.
    ///
    /// # Example
    /// ```no_run
    /// # use blocker::Blocker;
    /// let mut blocker = Blocker::new("eth0").unwrap();
    /// blocker.set_blocked_address("10.0.0.5".parse().unwrap()).unwrap();
    /// blocker.clear_blocked_address().unwrap();
    /// ```
    pub fn clear_blocked_address(&mut self) -> Result<()> {
        self.store.clear()
    }

    /// Returns the currently blocked address, if one is configured.
    pub fn blocked_address(&self) -> Option<Ipv4Addr> {
        self.store.current()
    }

    /// Starts logging denied packets to `info` level of the [tracing]
    /// crate.
    ///
    /// # Example
    /// ```no_run
    /// # use blocker::Blocker;
    /// let mut blocker = Blocker::new("eth0").unwrap();
    /// blocker.start_logging().unwrap();
    /// ```
    pub fn start_logging(&mut self) -> Result<()> {
        self.logger.init()
    }
}
