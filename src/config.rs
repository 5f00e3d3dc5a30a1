/// Prefix for hero art and logo paths; assets ship alongside the page.
pub const ASSET_BASE: &str = "";

pub fn asset_url(path: &str) -> String {
    format!("{}{}", ASSET_BASE, path)
}

/// Navbar turns solid once the page scrolls past this many pixels.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Window for the leading/trailing scroll throttle.
pub const SCROLL_THROTTLE_MS: u32 = 100;

/// Fraction of a block that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom contraction of the viewport for reveal checks, in px.
pub const REVEAL_BOTTOM_MARGIN_PX: i32 = -50;

pub const SUPPORT_EMAIL: &str = "support@taxitaxsoftware.com";
pub const SUPPORT_PHONE: &str = "1-800-TAXI-TAX";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls_are_root_relative() {
        assert_eq!(asset_url("/hero-box.jpg"), "/hero-box.jpg");
        assert_eq!(asset_url("/logo.png"), "/logo.png");
    }
}
