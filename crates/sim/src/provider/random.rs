use rand::Rng;

use crate::base::{Nucleotide, Sequence};
use crate::errors::ProviderError;

/// TAA, TAG, TGA
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Random sequence of `len` bases with expected GC fraction `gc_fraction`.
///
/// G/C and A/T are each split evenly within their class.
pub fn random_sequence<R: Rng + ?Sized>(
    len: usize,
    gc_fraction: f64,
    rng: &mut R,
) -> Result<Sequence, ProviderError> {
    if !(0.0..=1.0).contains(&gc_fraction) {
        return Err(ProviderError::InvalidGcFraction(gc_fraction));
    }

    let seq = (0..len)
        .map(|_| {
            let strong = rng.random_bool(gc_fraction);
            match (strong, rng.random_bool(0.5)) {
                (true, true) => Nucleotide::G,
                (true, false) => Nucleotide::C,
                (false, true) => Nucleotide::A,
                (false, false) => Nucleotide::T,
            }
        })
        .collect();
    Ok(seq)
}

/// An open reading frame: ATG, `n_codons` random sense codons, one stop codon.
pub fn random_coding_sequence<R: Rng + ?Sized>(n_codons: usize, rng: &mut R) -> Sequence {
    let mut seq = Sequence::with_capacity(3 * (n_codons + 2));
    for base in [Nucleotide::A, Nucleotide::T, Nucleotide::G] {
        seq.push(base);
    }

    let mut added = 0;
    while added < n_codons {
        let codon: [Nucleotide; 3] =
            std::array::from_fn(|_| Nucleotide::ALL[rng.random_range(0..4)]);
        if is_stop(&codon) {
            continue;
        }
        for base in codon {
            seq.push(base);
        }
        added += 1;
    }

    let stop = STOP_CODONS[rng.random_range(0..STOP_CODONS.len())];
    for base in stop.bytes().filter_map(Nucleotide::from_ascii) {
        seq.push(base);
    }
    seq
}

fn is_stop(codon: &[Nucleotide; 3]) -> bool {
    let text: String = codon.iter().map(|b| b.to_char()).collect();
    STOP_CODONS.contains(&text.as_str())
}
