/// Best-effort user-agent classification.
///
/// The quote notification only needs a human-readable hint of what the visitor
/// was browsing with, so this is deliberate substring matching, not a full
/// parser. Unrecognized input degrades to "Unknown" fields; it never fails.

/// Parsed browser/engine/OS/device descriptor derived from a user-agent header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    /// Browser family (e.g. "Chrome", "Safari"), or "Unknown".
    pub browser: String,
    /// Rendering engine (e.g. "Blink", "Gecko"), or "Unknown".
    pub engine: String,
    /// Operating system (e.g. "Windows", "iOS"), or "Unknown".
    pub os: String,
    /// Form factor: "Desktop", "Mobile", "Tablet", or "Unknown".
    pub device: String,
}

impl ClientInfo {
    /// Descriptor with every field unresolved.
    pub fn unknown() -> Self {
        Self {
            browser: "Unknown".to_string(),
            engine: "Unknown".to_string(),
            os: "Unknown".to_string(),
            device: "Unknown".to_string(),
        }
    }

    /// Parses a raw user-agent header value.
    ///
    /// Empty input yields the fully-unknown descriptor. Non-empty input always
    /// produces a device guess (Desktop when nothing else matches).
    pub fn parse(user_agent: &str) -> Self {
        let ua = user_agent.trim();
        if ua.is_empty() {
            return Self::unknown();
        }

        Self {
            browser: detect_browser(ua).to_string(),
            engine: detect_engine(ua).to_string(),
            os: detect_os(ua).to_string(),
            device: detect_device(ua).to_string(),
        }
    }

    /// One-line summary for notification bodies, e.g. "Chrome on Windows (Desktop)".
    pub fn summary(&self) -> String {
        format!("{} on {} ({})", self.browser, self.os, self.device)
    }
}

/// Browser family from its identifying token.
///
/// Order matters: Edge and Opera embed "Chrome", Chrome embeds "Safari".
fn detect_browser(ua: &str) -> &'static str {
    if ua.contains("Edg/") || ua.contains("Edge/") {
        "Edge"
    } else if ua.contains("OPR/") || ua.contains("Opera") {
        "Opera"
    } else if ua.contains("Chrome/") || ua.contains("CriOS/") {
        "Chrome"
    } else if ua.contains("Firefox/") || ua.contains("FxiOS/") {
        "Firefox"
    } else if ua.contains("Safari/") {
        "Safari"
    } else if ua.contains("MSIE") || ua.contains("Trident/") {
        "Internet Explorer"
    } else {
        "Unknown"
    }
}

/// Rendering engine; Chromium-family tokens resolve to Blink.
fn detect_engine(ua: &str) -> &'static str {
    if ua.contains("Edg/") || ua.contains("OPR/") || ua.contains("Chrome/") {
        "Blink"
    } else if ua.contains("AppleWebKit/") {
        "WebKit"
    } else if ua.contains("Gecko/") {
        "Gecko"
    } else if ua.contains("Trident/") || ua.contains("MSIE") {
        "Trident"
    } else {
        "Unknown"
    }
}

/// Operating system. Apple mobile tokens come before the Mac check because
/// every iPhone user-agent also claims "like Mac OS X"; Android before Linux
/// for the same reason.
fn detect_os(ua: &str) -> &'static str {
    if ua.contains("Windows NT") || ua.contains("Windows") {
        "Windows"
    } else if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("iPod") {
        "iOS"
    } else if ua.contains("Mac OS X") || ua.contains("Macintosh") {
        "macOS"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("CrOS") {
        "Chrome OS"
    } else if ua.contains("Linux") {
        "Linux"
    } else {
        "Unknown"
    }
}

/// Form factor. Android tablets advertise "Android" without "Mobile", so the
/// tablet check runs first.
fn detect_device(ua: &str) -> &'static str {
    let lower = ua.to_lowercase();
    if lower.contains("ipad") || lower.contains("tablet") {
        "Tablet"
    } else if lower.contains("android") && !lower.contains("mobile") {
        "Tablet"
    } else if lower.contains("mobi") || lower.contains("iphone") || lower.contains("ipod") {
        "Mobile"
    } else {
        "Desktop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";
    const FIREFOX_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
    const EDGE_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91";
    const ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 13; SM-X710) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    #[test]
    fn recognizes_chrome_on_windows_desktop() {
        let info = ClientInfo::parse(CHROME_WIN);
        assert_eq!(info.browser, "Chrome");
        assert_eq!(info.engine, "Blink");
        assert_eq!(info.os, "Windows");
        assert_eq!(info.device, "Desktop");
    }

    #[test]
    fn recognizes_safari_on_iphone() {
        let info = ClientInfo::parse(SAFARI_IPHONE);
        assert_eq!(info.browser, "Safari");
        assert_eq!(info.engine, "WebKit");
        assert_eq!(info.os, "iOS");
        assert_eq!(info.device, "Mobile");
    }

    #[test]
    fn recognizes_firefox_on_linux() {
        let info = ClientInfo::parse(FIREFOX_LINUX);
        assert_eq!(info.browser, "Firefox");
        assert_eq!(info.engine, "Gecko");
        assert_eq!(info.os, "Linux");
    }

    #[test]
    fn edge_wins_over_embedded_chrome_token() {
        let info = ClientInfo::parse(EDGE_WIN);
        assert_eq!(info.browser, "Edge");
        assert_eq!(info.engine, "Blink");
    }

    #[test]
    fn android_without_mobile_token_is_a_tablet() {
        let info = ClientInfo::parse(ANDROID_TABLET);
        assert_eq!(info.os, "Android");
        assert_eq!(info.device, "Tablet");
    }

    #[test]
    fn empty_input_is_fully_unknown() {
        assert_eq!(ClientInfo::parse(""), ClientInfo::unknown());
        assert_eq!(ClientInfo::parse("   "), ClientInfo::unknown());
    }

    #[test]
    fn unrecognized_input_defaults_to_desktop() {
        let info = ClientInfo::parse("curl/8.4.0");
        assert_eq!(info.browser, "Unknown");
        assert_eq!(info.os, "Unknown");
        assert_eq!(info.device, "Desktop");
    }

    #[test]
    fn summary_reads_naturally() {
        let info = ClientInfo::parse(CHROME_WIN);
        assert_eq!(info.summary(), "Chrome on Windows (Desktop)");
    }
}
