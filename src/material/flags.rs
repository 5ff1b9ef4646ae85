use serde::{Deserialize, Serialize};

/// M2 material render flags bitfield
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialFlags(u16);

impl MaterialFlags {
    pub const NONE: Self = Self(0x0);
    pub const UNLIT: Self = Self(0x1);
    pub const UNFOGGED: Self = Self(0x2);
    pub const TWO_SIDED: Self = Self(0x4);

    const KNOWN: [(Self, &'static str); 3] = [
        (Self::UNLIT, "Unlit"),
        (Self::UNFOGGED, "Unfogged"),
        (Self::TWO_SIDED, "TwoSided"),
    ];

    /// Keep only the bits this pipeline understands
    pub fn from_bits(bits: i16) -> Self {
        let all = Self::UNLIT.0 | Self::UNFOGGED.0 | Self::TWO_SIDED.0;
        Self(bits as u16 & all)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of all flags present
    pub fn names(self) -> Vec<&'static str> {
        Self::KNOWN
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::ops::BitOr for MaterialFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_masks_unknown() {
        let flags = MaterialFlags::from_bits(0x7 | 0x40);
        assert_eq!(flags.bits(), 0x7);
        assert_eq!(flags.names(), vec!["Unlit", "Unfogged", "TwoSided"]);
    }

    #[test]
    fn test_none_contains_nothing() {
        assert!(MaterialFlags::NONE.is_empty());
        assert!(!MaterialFlags::TWO_SIDED.contains(MaterialFlags::NONE));
        assert!(!MaterialFlags::NONE.contains(MaterialFlags::UNLIT));
    }

    #[test]
    fn test_combined_flags() {
        let flags = MaterialFlags::UNLIT | MaterialFlags::TWO_SIDED;
        assert!(flags.contains(MaterialFlags::UNLIT));
        assert!(flags.contains(MaterialFlags::TWO_SIDED));
        assert!(!flags.contains(MaterialFlags::UNFOGGED));
    }
}
