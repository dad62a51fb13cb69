//! Classful address categories and special-use ranges.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Legacy classful category of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    /// Not covered by any class range (only 255.255.255.255).
    Other,
}

/// Well-known special-use range an address falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialUse {
    Multicast,
    TestNet1,
    TestNet2,
    TestNet3,
    Private,
    Apipa,
    Loopback,
    Local,
}

impl fmt::Display for SpecialUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecialUse::Multicast => "Multicast",
            SpecialUse::TestNet1 => "TEST-NET-1",
            SpecialUse::TestNet2 => "TEST-NET-2",
            SpecialUse::TestNet3 => "TEST-NET-3",
            SpecialUse::Private => "Private",
            SpecialUse::Apipa => "APIPA",
            SpecialUse::Loopback => "Loopback",
            SpecialUse::Local => "Local",
        };
        f.write_str(name)
    }
}

/// Class plus at most one special-use tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub class: AddressClass,
    pub special: Option<SpecialUse>,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            AddressClass::Other => f.write_str("Other")?,
            class => write!(f, "Class {class:?}")?,
        }
        if let Some(special) = self.special {
            write!(f, ", {special}")?;
        }
        Ok(())
    }
}

/// Inclusive numeric range with the tag it carries.
struct Range {
    lo: u32,
    hi: u32,
    tag: SpecialUse,
}

impl Range {
    const fn new(lo: u32, hi: u32, tag: SpecialUse) -> Self {
        Range { lo, hi, tag }
    }

    fn contains(&self, ip: u32) -> bool {
        (self.lo..=self.hi).contains(&ip)
    }
}

const CLASS_C_RANGES: [Range; 4] = [
    Range::new(0xC0000200, 0xC00002FF, SpecialUse::TestNet1),
    Range::new(0xC6336400, 0xC63364FF, SpecialUse::TestNet2),
    Range::new(0xCB007100, 0xCB0071FF, SpecialUse::TestNet3),
    Range::new(0xC0A80000, 0xC0A8FFFF, SpecialUse::Private),
];

const CLASS_B_RANGES: [Range; 2] = [
    Range::new(0xAC100000, 0xAC1FFFFF, SpecialUse::Private),
    Range::new(0xA9FE0000, 0xA9FEFFFF, SpecialUse::Apipa),
];

const CLASS_A_RANGES: [Range; 3] = [
    Range::new(0x0A000000, 0x0AFFFFFF, SpecialUse::Private),
    Range::new(0x7F000000, 0x7F1FFFFF, SpecialUse::Loopback),
    Range::new(0x00000000, 0x00FFFFFF, SpecialUse::Local),
];

fn first_match(ranges: &[Range], ip: u32) -> Option<SpecialUse> {
    ranges.iter().find(|r| r.contains(ip)).map(|r| r.tag)
}

/// Classify an address by its leading bits and special-use ranges.
///
/// The first matching sub-range wins, so an address carries at most one tag.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_mask::processing::classify;
/// assert_eq!(classify(Ipv4Addr::new(127, 0, 0, 1)).to_string(), "Class A, Loopback");
/// ```
pub fn classify(addr: Ipv4Addr) -> Classification {
    let ip = u32::from(addr);

    let (class, special) = match ip {
        0xF0000000..=0xFFFFFFFE => (AddressClass::E, None),
        0xE0000000..=0xEFFFFFFF => (AddressClass::D, Some(SpecialUse::Multicast)),
        0xC0000000..=0xDFFFFFFF => (AddressClass::C, first_match(&CLASS_C_RANGES, ip)),
        0x80000000..=0xBFFFFFFF => (AddressClass::B, first_match(&CLASS_B_RANGES, ip)),
        0x00000000..=0x7FFFFFFF => (AddressClass::A, first_match(&CLASS_A_RANGES, ip)),
        _ => (AddressClass::Other, None),
    };

    log::trace!("classify({addr}) = {class:?} {special:?}");
    Classification { class, special }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(a: u8, b: u8, c: u8, d: u8) -> String {
        classify(Ipv4Addr::new(a, b, c, d)).to_string()
    }

    #[test]
    fn test_class_boundaries() {
        assert_eq!(label(0, 0, 0, 0), "Class A, Local");
        assert_eq!(label(1, 0, 0, 0), "Class A");
        assert_eq!(label(127, 255, 255, 255), "Class A");
        assert_eq!(label(128, 0, 0, 0), "Class B");
        assert_eq!(label(191, 255, 255, 255), "Class B");
        assert_eq!(label(192, 0, 0, 0), "Class C");
        assert_eq!(label(223, 255, 255, 255), "Class C");
        assert_eq!(label(224, 0, 0, 1), "Class D, Multicast");
        assert_eq!(label(239, 255, 255, 255), "Class D, Multicast");
        assert_eq!(label(240, 0, 0, 0), "Class E");
        assert_eq!(label(255, 255, 255, 254), "Class E");
        assert_eq!(label(255, 255, 255, 255), "Other");
    }

    #[test]
    fn test_special_use() {
        assert_eq!(label(10, 0, 0, 1), "Class A, Private");
        assert_eq!(label(127, 0, 0, 1), "Class A, Loopback");
        assert_eq!(label(127, 31, 255, 255), "Class A, Loopback");
        assert_eq!(label(127, 32, 0, 0), "Class A");
        assert_eq!(label(0, 255, 255, 255), "Class A, Local");
        assert_eq!(label(172, 16, 0, 1), "Class B, Private");
        assert_eq!(label(172, 31, 255, 255), "Class B, Private");
        assert_eq!(label(172, 32, 0, 0), "Class B");
        assert_eq!(label(169, 254, 1, 1), "Class B, APIPA");
        assert_eq!(label(192, 168, 1, 1), "Class C, Private");
        assert_eq!(label(192, 0, 2, 10), "Class C, TEST-NET-1");
        assert_eq!(label(198, 51, 100, 7), "Class C, TEST-NET-2");
        assert_eq!(label(203, 0, 113, 255), "Class C, TEST-NET-3");
        assert_eq!(label(8, 8, 8, 8), "Class A");
    }

    #[test]
    fn test_classification_fields() {
        let c = classify(Ipv4Addr::new(169, 254, 0, 1));
        assert_eq!(c.class, AddressClass::B);
        assert_eq!(c.special, Some(SpecialUse::Apipa));

        let c = classify(Ipv4Addr::BROADCAST);
        assert_eq!(c.class, AddressClass::Other);
        assert_eq!(c.special, None);
    }
}
