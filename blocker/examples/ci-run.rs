// For now we will use this for CI testing that it just doesn't error out
// (See logger-blocker to actually manual test)
use std::net::Ipv4Addr;

use blocker::Blocker;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Opt {
    #[clap(short, long, default_value = "eth0")]
    iface: String,
}

// Some runners need to update its rlimit to create the maps we use without problems
fn bump_memlock_rlimit() -> Result<(), anyhow::Error> {
    let rlimit = libc::rlimit {
        rlim_cur: 2048 << 20,
        rlim_max: libc::RLIM_INFINITY,
    };

    if unsafe { libc::setrlimit(libc::RLIMIT_MEMLOCK, &rlimit) } != 0 {
        anyhow::bail!("Failed to increase rlimit");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let opt = Opt::parse();
    tracing_subscriber::fmt::init();

    bump_memlock_rlimit()?;

    let mut blocker = Blocker::new(&opt.iface)?;

    blocker.set_blocked_address(Ipv4Addr::new(10, 13, 13, 2))?;
    assert_eq!(
        blocker.blocked_address(),
        Some(Ipv4Addr::new(10, 13, 13, 2))
    );

    blocker.set_blocked_address(Ipv4Addr::new(10, 13, 13, 3))?;
    blocker.clear_blocked_address()?;
    assert_eq!(blocker.blocked_address(), None);

    blocker.start_logging()?;
    tracing::info!("Program executed");

    Ok(())
}
