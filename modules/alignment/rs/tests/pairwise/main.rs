use itertools::Itertools;

mod engines;
mod global;
mod local;

pub type Score = i32;

pub const DNA: &[&str] = &[
    "ACGTGACTGACACTACGACT",
    "GATTACAGATTACAGATTACA",
    "TTTTTTTTTTAAAAAAAAAA",
    "ACGTACGTTTGACCATGACGATCGATCGGGATCCATGCA",
    "CCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCC",
    "ACGATCGATCGATGCTAGCTAGCTAGCTAGCATCGATCGATCGATCGTAGCTAGCTAGCTAGTCGATCGA",
    "TGCATGCATGCAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAATGCA",
    "GGGCCCGGGCCCAT",
    "A",
    "",
];

pub const PROTEIN: &[&str] = &[
    "ACKLMNPQRRTVWYNMPQHIK",
    "FVNQHLCGSHLVEALYLVCGERGFFYTPKT",
    "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG",
    "MSKGEELFTGVVPILVELDGDVNGHKFSVSGEGEGDATYGKLTLKFICTTGKLPVPWPTLVTTFSYGVQCFSRYPDHMKQHDFF",
    "KSAMPEGYVQERTIFFKDDGNYKTRAEVKFEGDTLVNRIELKGIDFKEDGNILGHKLEYNYNSHNVYIMADKQKNGIKVNFKIRH",
    "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGGMQIFVKTLTG",
    "W",
    "",
];

/// Every DNA sequence of at most `len` nucleotides, the empty one included.
pub fn exhaustive(len: usize) -> Vec<Vec<u8>> {
    let mut seqs = vec![Vec::new()];
    for k in 1..=len {
        seqs.extend(itertools::repeat_n(b"ACGT".iter().copied(), k).multi_cartesian_product());
    }
    seqs
}

pub fn all_pairs<T: AsRef<[u8]>>(seqs: &[T]) -> Vec<(&[u8], &[u8])> {
    seqs.iter()
        .cartesian_product(seqs)
        .map(|(seq1, seq2)| (seq1.as_ref(), seq2.as_ref()))
        .collect()
}
