use std::net::Ipv4Addr;

use blocker::Blocker;
use clap::Parser;
use tokio::signal;

#[derive(Debug, Parser)]
pub struct Opt {
    /// IPv4 source address to drop.
    blocked_ip: Ipv4Addr,
    #[clap(short, long, default_value = "eth0")]
    iface: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let opt = Opt::parse();
    tracing_subscriber::fmt::init();

    let mut blocker = Blocker::new(&opt.iface)?;
    blocker.set_blocked_address(opt.blocked_ip)?;
    blocker.start_logging()?;

    tracing::info!("Blocking {} on {}", opt.blocked_ip, opt.iface);
    signal::ctrl_c().await?;
    tracing::info!("Exiting...");

    Ok(())
}
