//! Plausible desktop browser User-Agent strings, randomized per call.
//!
//! The upstream widget pages are served without fuss to anything that looks
//! like a browser; rotating the UA just keeps us out of the generic-client
//! bucket. No uniqueness guarantee.

use rand::RngExt;

const PLATFORMS: &[&str] = &[
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

pub fn random_user_agent() -> String {
    let mut rng = rand::rng();

    match rng.random_range(0..3u8) {
        0 => {
            let platform = PLATFORMS[rng.random_range(0..PLATFORMS.len())];
            let major: u32 = rng.random_range(120..=136);
            format!(
                "Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) \
                 Chrome/{major}.0.0.0 Safari/537.36"
            )
        }
        1 => {
            let platform = PLATFORMS[rng.random_range(0..PLATFORMS.len())];
            let major: u32 = rng.random_range(115..=140);
            format!("Mozilla/5.0 ({platform}; rv:{major}.0) Gecko/20100101 Firefox/{major}.0")
        }
        _ => {
            let major: u32 = rng.random_range(16..=18);
            let minor: u32 = rng.random_range(0..=6);
            format!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
                 (KHTML, like Gecko) Version/{major}.{minor} Safari/605.1.15"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_like_a_browser() {
        for _ in 0..50 {
            let ua = random_user_agent();
            assert!(ua.starts_with("Mozilla/5.0 ("), "unexpected UA: {ua}");
            assert!(
                ua.contains("Chrome/") || ua.contains("Firefox/") || ua.contains("Version/"),
                "unexpected UA: {ua}"
            );
        }
    }
}
