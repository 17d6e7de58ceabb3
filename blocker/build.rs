use std::{path::PathBuf, process::ExitStatus};

const TOOLCHAIN: &str = "+nightly-2023-01-10";

fn main() {
    println!("cargo:rerun-if-changed=../ebpf/");
    println!("cargo:rerun-if-changed=../blocker-common/src/");
    let endianess = std::env::var("CARGO_CFG_TARGET_ENDIAN").unwrap();
    let profile = std::env::var("PROFILE").unwrap();
    let out_dir = PathBuf::from("../target/artifacts");
    let exit_status =
        build_ebpf(out_dir, endianess, profile).expect("Couldn't build ebpf artifact");
    if !exit_status.success() {
        panic!("couldn't build ebpf, error: {exit_status}")
    }
}

fn get_architecture(endianess: String) -> &'static str {
    match &endianess[..] {
        "big" => "bpfeb-unknown-none",
        "little" => "bpfel-unknown-none",
        _ => panic!("architecture endianess not implemented"),
    }
}

pub fn build_ebpf(
    out_dir: PathBuf,
    endianess: String,
    profile: String,
) -> std::io::Result<ExitStatus> {
    let dir = PathBuf::from("../ebpf");
    let target = format!("--target={}", get_architecture(endianess));
    let mut args = vec![
        TOOLCHAIN,
        "build",
        "--color",
        "always",
        "--verbose",
        target.as_str(),
        "-Z",
        "build-std=core",
    ];

    if profile == "release" {
        args.push("--release");
    }

    std::process::Command::new("cargo")
        .env("CARGO_TARGET_DIR", out_dir)
        .current_dir(&dir)
        .args(&args)
        .status()
}
