/// A booth offered on the booths page.
#[derive(Clone, Debug, PartialEq)]
pub struct Booth {
    /// Card heading.
    pub title: &'static str,
    /// Name used in booking requests when it differs from the heading.
    pub booking_name: Option<&'static str>,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
}

impl Booth {
    pub fn identifier(&self) -> Option<String> {
        resolve_booth_name(self.booking_name, Some(self.title))
    }
}

/// Explicit booking name first, card heading second. Blank values fall through.
pub fn resolve_booth_name(booking_name: Option<&str>, heading: Option<&str>) -> Option<String> {
    [booking_name, heading]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

pub const BOOTHS: &[Booth] = &[
    Booth {
        title: "Classic Photo Booth",
        booking_name: Some("Classic Booth"),
        description: "Enclosed booth with instant 4x6 prints and a props box for every guest.",
        price: "PKR 25,000 / event",
        features: &["Unlimited prints", "Custom print template", "Props included"],
        image: "/assets/booths/classic.jpg",
    },
    Booth {
        title: "Mirror Booth",
        booking_name: None,
        description: "Full-length interactive mirror with touch animations and signatures.",
        price: "PKR 40,000 / event",
        features: &["Touch-screen mirror", "Animated prompts", "Digital gallery"],
        image: "/assets/booths/mirror.jpg",
    },
    Booth {
        title: "360° Video Booth",
        booking_name: Some("360 Video Booth"),
        description: "Rotating slow-motion video platform for groups of up to four.",
        price: "PKR 55,000 / event",
        features: &["Slow-motion clips", "Instant sharing", "LED lighting"],
        image: "/assets/booths/360.jpg",
    },
    Booth {
        title: "GIF Booth",
        booking_name: None,
        description: "Open-air booth producing boomerangs and GIFs sent straight to phones.",
        price: "PKR 20,000 / event",
        features: &["Boomerangs", "QR code sharing", "Branded overlays"],
        image: "/assets/booths/gif.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn booking_name_takes_precedence() {
        assert_eq!(resolve_booth_name(Some("Booth A"), Some("Heading")), Some("Booth A".to_string()));
    }

    #[test]
    fn falls_back_to_heading() {
        assert_eq!(resolve_booth_name(None, Some(" Mirror Booth ")), Some("Mirror Booth".to_string()));
        assert_eq!(resolve_booth_name(Some("  "), Some("Mirror Booth")), Some("Mirror Booth".to_string()));
    }

    #[test]
    fn nothing_to_resolve() {
        assert_eq!(resolve_booth_name(None, None), None);
        assert_eq!(resolve_booth_name(Some(""), Some("")), None);
    }

    #[test]
    fn every_catalogue_entry_has_an_identifier() {
        for booth in BOOTHS {
            assert!(booth.identifier().is_some(), "{} has no identifier", booth.title);
        }
        assert_eq!(BOOTHS[0].identifier().as_deref(), Some("Classic Booth"));
        assert_eq!(BOOTHS[1].identifier().as_deref(), Some("Mirror Booth"));
    }
}
