use alignkit_alignment_rs::pairwise::scoring::gaps::Affine;
use alignkit_alignment_rs::pairwise::scoring::matrices::blosum62;
use alignkit_alignment_rs::pairwise::scoring::symbols::Equality;
use alignkit_alignment_rs::pairwise::{self, Aligner, Config, EndGap, EndGaps};
use alignkit_core_rs::alignment::Alignable;
use eyre::Result;

use super::{all_pairs, exhaustive, Score, DNA, PROTEIN};

type Engine = Aligner<Equality<Score>>;

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    score: Score,
}

fn ensure(aligner: &mut Engine, w: Workload<'_>) -> Result<()> {
    for (seq1, seq2) in [(w.seq1, w.seq2), (w.seq2, w.seq1)] {
        let outcome = aligner.align(&seq1, &seq2)?;
        assert_eq!(*outcome.score(), w.score, "{seq1:?} vs {seq2:?}");
    }
    Ok(())
}

fn engine(config: Config) -> Result<Engine> {
    Aligner::new(Equality::new(4, -5), Affine::new(-10, -1)?, config)
}

/// Same policy with the roles of the two sequences exchanged.
fn swapped(end_gaps: EndGaps) -> EndGaps {
    let (seq1_leading, seq1_trailing, seq2_leading, seq2_trailing) = end_gaps.dissolve();
    EndGaps::new(seq2_leading, seq2_trailing, seq1_leading, seq1_trailing)
}

#[test]
fn test_scenarios() -> Result<()> {
    let mut aligner = engine(Config::global())?;
    let workload = vec![
        Workload {
            seq1: b"ACGTGACTGACACTACGACT",
            seq2: b"ACGTGACTGACACTACGACT",
            score: 80,
        },
        Workload {
            seq1: b"AAAAAAAAAA",
            seq2: b"TTTTTTTTTT",
            score: -40,
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"",
            score: -14,
        },
        Workload {
            seq1: b"",
            seq2: b"",
            score: 0,
        },
        Workload {
            seq1: b"ACGTACGT",
            seq2: b"ACGTTACGT",
            score: 21,
        },
    ];
    for w in workload {
        ensure(&mut aligner, w)?;
    }

    let protein = b"ACKLMNPQRRTVWYNMPQHIK";
    let outcome = pairwise::align(
        &protein,
        &protein,
        blosum62::<Score>()?,
        Affine::new(-11, -1)?,
        Config::global(),
    )?;
    assert_eq!(*outcome.score(), 122);
    assert_eq!(*outcome.end(), (21, 21));
    Ok(())
}

#[test]
fn test_symmetry() -> Result<()> {
    let seqs = exhaustive(3);
    let mut pairs = all_pairs(&seqs);
    pairs.extend(all_pairs(DNA));

    for end_gaps in [EndGaps::penalized(), EndGaps::semi_global(), EndGaps::overlap()] {
        let mut forward = engine(Config::global().with_end_gaps(end_gaps))?;
        let mut backward = engine(Config::global().with_end_gaps(swapped(end_gaps)))?;
        for (seq1, seq2) in &pairs {
            let expected = forward.align(seq1, seq2)?;
            let outcome = backward.align(seq2, seq1)?;
            assert_eq!(outcome.score(), expected.score(), "{seq1:?} vs {seq2:?}");
        }
    }

    let mut aligner = Aligner::<_>::new(blosum62()?, Affine::new(-11, -1)?, Config::global())?;
    for (seq1, seq2) in all_pairs(PROTEIN) {
        let expected = aligner.align(&seq1, &seq2)?;
        assert_eq!(aligner.align(&seq2, &seq1)?.score(), expected.score());
    }
    Ok(())
}

#[test]
fn test_reversal() -> Result<()> {
    let mut aligner = engine(Config::global())?;
    for (seq1, seq2) in all_pairs(DNA) {
        let expected = aligner.align(&seq1, &seq2)?;
        let outcome = aligner.align(&seq1.reversed(), &seq2.reversed())?;
        assert_eq!(outcome.score(), expected.score());
    }
    Ok(())
}

#[test]
fn test_identity() -> Result<()> {
    let mut aligner = engine(Config::global())?;
    for seq in DNA {
        let outcome = aligner.align(seq, seq)?;
        assert_eq!(*outcome.score(), 4 * seq.len() as Score);
        assert_eq!(*outcome.end(), (seq.len(), seq.len()));
    }
    Ok(())
}

#[test]
fn test_monotonic_worsening() -> Result<()> {
    let mut aligner = engine(Config::global())?;
    for seq in DNA.iter().map(|x| x.as_bytes()) {
        let identical = *aligner.align(&seq, &seq)?.score();
        for pos in 0..seq.len() {
            let mut edited = seq.to_vec();
            edited[pos] = if seq[pos] == b'A' { b'C' } else { b'A' };
            let score = *aligner.align(&seq, &edited)?.score();
            assert!(score < identical, "{pos}: {score} vs {identical}");

            let mut inserted = seq.to_vec();
            inserted.insert(pos, b'T');
            assert!(*aligner.align(&seq, &inserted)?.score() < identical);
        }
    }
    Ok(())
}

#[test]
fn test_free_ends_never_worse() -> Result<()> {
    let seqs = exhaustive(3);
    let mut pairs = all_pairs(&seqs);
    pairs.extend(all_pairs(DNA));

    let mut penalized = engine(Config::global())?;
    let policies = [
        EndGaps::new(EndGap::Penalized, EndGap::Free, EndGap::Penalized, EndGap::Penalized),
        EndGaps::new(EndGap::Penalized, EndGap::Penalized, EndGap::Penalized, EndGap::Free),
        EndGaps::semi_global(),
        EndGaps::overlap(),
    ];
    for end_gaps in policies {
        let mut free = engine(Config::global().with_end_gaps(end_gaps))?;
        for (seq1, seq2) in &pairs {
            let expected = *penalized.align(seq1, seq2)?.score();
            let score = *free.align(seq1, seq2)?.score();
            assert!(score >= expected, "{end_gaps:?}: {seq1:?} vs {seq2:?}");
        }
    }

    // Unaligned flanks of seq1 cost nothing
    let mut aligner = engine(Config::semi_global())?;
    let outcome = aligner.align(&b"TTTTTTTTACGTGACTGTTTTTTTT", &b"ACGTGACTG")?;
    assert_eq!(*outcome.score(), 36);
    assert_eq!(*outcome.end(), (17, 9));
    Ok(())
}

#[test]
fn test_terminal_vectors() -> Result<()> {
    let config = Config::global().with_vectors(true);
    let mut aligner = engine(config)?;

    for (seq1, seq2) in all_pairs(DNA) {
        let outcome = aligner.align(&seq1, &seq2)?;
        let (column, row) = (outcome.column().as_ref(), outcome.row().as_ref());
        let (column, row) = (column.unwrap(), row.unwrap());

        assert_eq!(column.len(), seq1.len() + 1);
        assert_eq!(row.len(), seq2.len() + 1);
        assert_eq!(column.last(), row.last());
        assert_eq!(column.last(), Some(outcome.score()));
    }
    Ok(())
}
