// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Chooses SIMD lane counts for the `f32` and `f64` softplus and sigmoid kernels and
//! writes them to `OUT_DIR/simd_lanes.rs` as `W32` and `W64`.
//!
//! `SIMD_LANES_OVERRIDE="<f32 lanes>,<f64 lanes>"` replaces target detection.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Largest lane count `std::simd` accepts.
const MAX_LANES: usize = 64;

/// Lane counts for `(f32, f64)` from the widest vector unit the target enables.
fn detect_lanes(arch: &str, target_features: &str) -> (usize, usize) {
    let enabled = |name: &str| target_features.split(',').any(|f| f == name);
    let register_bits = match arch {
        "x86_64" | "x86" if enabled("avx512f") => 512,
        "x86_64" | "x86" if enabled("avx2") => 256,
        "x86_64" | "x86" if enabled("sse2") => 128,
        // NEON can be switched off with `-C target-feature=-neon`
        "aarch64" if enabled("neon") => 128,
        "wasm32" if enabled("simd128") => 128,
        _ => 64,
    };
    (register_bits / 32, register_bits / 64)
}

/// Parses `"<f32 lanes>,<f64 lanes>"`; each count must be a power of two up to 64.
fn parse_override(raw: &str) -> Result<(usize, usize), String> {
    let counts = raw
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<usize>() {
                Ok(n) if n.is_power_of_two() && n <= MAX_LANES => Ok(n),
                _ => Err(format!(
                    "SIMD_LANES_OVERRIDE: `{}` is not a power of two in 1..={}",
                    part, MAX_LANES
                )),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    match counts.as_slice() {
        [w32, w64] => Ok((*w32, *w64)),
        _ => Err(format!(
            "SIMD_LANES_OVERRIDE: expected two comma-separated lane counts such as \"16,8\", got `{}`",
            raw
        )),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_ARCH");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=SIMD_LANES_OVERRIDE");

    let (w32, w64) = match env::var("SIMD_LANES_OVERRIDE") {
        Ok(raw) => {
            let lanes = parse_override(&raw)?;
            println!("cargo:warning=SIMD_LANES_OVERRIDE applied: f32 x {}, f64 x {}", lanes.0, lanes.1);
            lanes
        }
        Err(_) => detect_lanes(
            &env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default(),
            &env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default(),
        ),
    };

    let out_path = PathBuf::from(env::var("OUT_DIR")?).join("simd_lanes.rs");
    fs::write(
        out_path,
        format!(
            "// Generated by build.rs.

/// Lanes per `f32` SIMD vector.
#[allow(dead_code)]
pub const W32: usize = {w32};

/// Lanes per `f64` SIMD vector.
#[allow(dead_code)]
pub const W64: usize = {w64};
"
        ),
    )?;
    Ok(())
}
