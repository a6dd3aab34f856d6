use std::fmt;
use std::str::FromStr;

use crate::base::Sequence;
use crate::errors::ProviderError;

/// Short, well-characterized regulatory motifs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegulatoryElement {
    /// Core promoter TATA box
    TataBox,
    /// Kozak translation-initiation context
    Kozak,
    /// Polyadenylation signal
    PolyASignal,
    /// NF-κB binding site
    NfKb,
    /// SP1 GC box
    Sp1,
    /// CAAT box
    CaatBox,
}

impl RegulatoryElement {
    pub const ALL: [RegulatoryElement; 6] = [
        Self::TataBox,
        Self::Kozak,
        Self::PolyASignal,
        Self::NfKb,
        Self::Sp1,
        Self::CaatBox,
    ];

    pub const fn sequence(self) -> &'static str {
        match self {
            Self::TataBox => "TATAAA",
            Self::Kozak => "GCCACC",
            Self::PolyASignal => "AATAAA",
            Self::NfKb => "GGGACTTTCC",
            Self::Sp1 => "GGGCGG",
            Self::CaatBox => "CCAAT",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::TataBox => "TATA_box",
            Self::Kozak => "Kozak_sequence",
            Self::PolyASignal => "Poly_A_signal",
            Self::NfKb => "NF_kB",
            Self::Sp1 => "SP1",
            Self::CaatBox => "CAAT_box",
        }
    }
}

impl fmt::Display for RegulatoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegulatoryElement {
    type Err = ProviderError;

    /// Look up an element by name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProviderError::UnknownElement(s.to_string()))
    }
}

/// TATA box, Kozak context, NF-κB site and poly-A signal, in that order.
pub fn regulatory_cassette() -> Sequence {
    let parts = [
        RegulatoryElement::TataBox,
        RegulatoryElement::Kozak,
        RegulatoryElement::NfKb,
        RegulatoryElement::PolyASignal,
    ];
    parts
        .iter()
        .flat_map(|e| e.sequence().bytes())
        .filter_map(crate::base::Nucleotide::from_ascii)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_elements_are_dna() {
        for element in RegulatoryElement::ALL {
            let seq = Sequence::parse_canonical(element.sequence()).unwrap();
            assert_eq!(seq.len(), element.sequence().len());
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(
            "tata_box".parse::<RegulatoryElement>().unwrap(),
            RegulatoryElement::TataBox
        );
        assert_eq!(
            "NF_kB".parse::<RegulatoryElement>().unwrap(),
            RegulatoryElement::NfKb
        );
        assert!("nope".parse::<RegulatoryElement>().is_err());
    }

    #[test]
    fn test_cassette() {
        assert_eq!(
            regulatory_cassette().to_string(),
            "TATAAAGCCACCGGGACTTTCCAATAAA"
        );
    }
}
