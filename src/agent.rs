//! Synthetic browser identification header.
//!
//! The service expects a browser-looking `User-Agent`; the value carries
//! no protocol meaning. One string is generated per client instance.

use rand::Rng;

const PLATFORMS: &[&str] = &[
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

/// Lowest plausible major browser version.
const MIN_MAJOR_VERSION: u32 = 108;

/// One past the highest plausible major browser version.
const MAX_MAJOR_VERSION: u32 = 132;

/// Generate a plausible desktop-browser User-Agent string.
pub(crate) fn generate() -> String {
    let mut rng = rand::thread_rng();
    let platform = PLATFORMS[rng.gen_range(0..PLATFORMS.len())];
    let major = rng.gen_range(MIN_MAJOR_VERSION..MAX_MAJOR_VERSION);

    if rng.gen_bool(0.5) {
        format!(
            "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.0.0 Safari/537.36",
            platform, major
        )
    } else {
        format!(
            "Mozilla/5.0 ({}; rv:{}.0) Gecko/20100101 Firefox/{}.0",
            platform, major, major
        )
    }
}
