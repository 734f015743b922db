//! Per-component-type constraints.
//!
//! This table is the single source of truth for what each component type
//! requires. Checks that cannot be expressed as data (HTTPS image sources,
//! Dropdown's dual option cap) live in `component.rs`.

/// A Flow JSON platform version such as `6.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
}

impl PlatformVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        PlatformVersion { major, minor }
    }

    /// Parse `"7"`, `"7.1"` or `"7.1+"`. Returns `None` for anything non-numeric.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().trim_end_matches('+');
        let mut parts = raw.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(m) => m.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(PlatformVersion { major, minor })
    }
}

impl std::fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A property restricted to a fixed set of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumeration {
    pub property: &'static str,
    /// Value assumed when the property is absent.
    pub default: &'static str,
    pub allowed: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub requires: &'static [&'static str],
    pub max_text_length: Option<usize>,
    pub max_label_length: Option<usize>,
    pub max_description_length: Option<usize>,
    pub min_options: Option<usize>,
    pub max_options: Option<usize>,
    pub allowed_values: &'static [Enumeration],
    /// Advisory only. Never produces an error.
    pub min_platform_version: Option<PlatformVersion>,
    pub max_images: Option<usize>,
    /// `max-length`, when present, must be a positive integer.
    pub positive_max_length: bool,
}

impl Rule {
    const fn requiring(requires: &'static [&'static str]) -> Self {
        Rule {
            requires,
            max_text_length: None,
            max_label_length: None,
            max_description_length: None,
            min_options: None,
            max_options: None,
            allowed_values: &[],
            min_platform_version: None,
            max_images: None,
            positive_max_length: false,
        }
    }

    /// Length caps as `(property, cap)` pairs, in check order.
    pub fn length_caps(&self) -> impl Iterator<Item = (&'static str, usize)> {
        [
            ("text", self.max_text_length),
            ("label", self.max_label_length),
            ("description", self.max_description_length),
        ]
        .into_iter()
        .filter_map(|(key, cap)| cap.map(|c| (key, c)))
    }
}

const INPUT_TYPES: Enumeration = Enumeration {
    property: "input-type",
    default: "text",
    allowed: &["text", "number", "email", "password", "passcode", "phone", "date"],
};

const CALENDAR_MODES: Enumeration = Enumeration {
    property: "mode",
    default: "single",
    allowed: &["single", "range"],
};

static RULE_TABLE: &[(&str, Rule)] = &[
    (
        "TextHeading",
        Rule {
            max_text_length: Some(80),
            ..Rule::requiring(&["text"])
        },
    ),
    (
        "TextSubheading",
        Rule {
            max_text_length: Some(80),
            ..Rule::requiring(&["text"])
        },
    ),
    (
        "TextBody",
        Rule {
            max_text_length: Some(4096),
            ..Rule::requiring(&["text"])
        },
    ),
    (
        "TextCaption",
        Rule {
            max_text_length: Some(409),
            ..Rule::requiring(&["text"])
        },
    ),
    (
        "RichText",
        Rule {
            max_text_length: Some(4096),
            min_platform_version: Some(PlatformVersion::new(5, 1)),
            ..Rule::requiring(&["text"])
        },
    ),
    (
        "TextInput",
        Rule {
            allowed_values: &[INPUT_TYPES],
            positive_max_length: true,
            ..Rule::requiring(&["name"])
        },
    ),
    (
        "TextArea",
        Rule {
            positive_max_length: true,
            ..Rule::requiring(&["name"])
        },
    ),
    (
        "CheckboxGroup",
        Rule {
            min_options: Some(1),
            max_options: Some(20),
            ..Rule::requiring(&["name", "data-source"])
        },
    ),
    (
        "RadioButtonsGroup",
        Rule {
            min_options: Some(1),
            max_options: Some(20),
            ..Rule::requiring(&["name", "data-source"])
        },
    ),
    ("Dropdown", Rule::requiring(&["name", "data-source"])),
    (
        "OptIn",
        Rule {
            max_label_length: Some(80),
            max_description_length: Some(200),
            ..Rule::requiring(&["name", "label"])
        },
    ),
    (
        "DatePicker",
        Rule {
            min_platform_version: Some(PlatformVersion::new(5, 0)),
            ..Rule::requiring(&["name"])
        },
    ),
    (
        "CalendarPicker",
        Rule {
            allowed_values: &[CALENDAR_MODES],
            min_platform_version: Some(PlatformVersion::new(6, 1)),
            ..Rule::requiring(&["name"])
        },
    ),
    (
        "PhotoPicker",
        Rule {
            min_platform_version: Some(PlatformVersion::new(5, 0)),
            ..Rule::requiring(&["name"])
        },
    ),
    (
        "DocumentPicker",
        Rule {
            min_platform_version: Some(PlatformVersion::new(5, 0)),
            ..Rule::requiring(&["name"])
        },
    ),
    ("Image", Rule::requiring(&["src"])),
    (
        "ImageCarousel",
        Rule {
            max_images: Some(3),
            min_platform_version: Some(PlatformVersion::new(7, 1)),
            ..Rule::requiring(&["images"])
        },
    ),
    (
        "NavigationList",
        Rule {
            max_options: Some(20),
            min_platform_version: Some(PlatformVersion::new(6, 2)),
            ..Rule::requiring(&["name", "data-source"])
        },
    ),
    (
        "ChipsSelector",
        Rule {
            min_options: Some(2),
            max_options: Some(20),
            min_platform_version: Some(PlatformVersion::new(6, 3)),
            ..Rule::requiring(&["name", "data-source"])
        },
    ),
    (
        "EmbeddedLink",
        Rule {
            max_text_length: Some(25),
            ..Rule::requiring(&["text"])
        },
    ),
    (
        "Footer",
        Rule {
            max_label_length: Some(30),
            ..Rule::requiring(&["label"])
        },
    ),
    (
        "If",
        Rule {
            min_platform_version: Some(PlatformVersion::new(4, 0)),
            ..Rule::requiring(&["condition", "then"])
        },
    ),
    (
        "Switch",
        Rule {
            min_platform_version: Some(PlatformVersion::new(4, 0)),
            ..Rule::requiring(&["value", "cases"])
        },
    ),
];

/// Look up the rule for a component type tag.
pub fn rule_for(component_type: &str) -> Option<&'static Rule> {
    RULE_TABLE
        .iter()
        .find(|(tag, _)| *tag == component_type)
        .map(|(_, rule)| rule)
}

/// Every component type the table knows about, in table order.
pub fn component_types() -> impl Iterator<Item = &'static str> {
    RULE_TABLE.iter().map(|(tag, _)| *tag)
}
