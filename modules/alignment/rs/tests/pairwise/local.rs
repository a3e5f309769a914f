use alignkit_alignment_rs::pairwise::scoring::gaps::Affine;
use alignkit_alignment_rs::pairwise::scoring::symbols::Equality;
use alignkit_alignment_rs::pairwise::{Aligner, Config, EndGaps};
use eyre::Result;

use super::{all_pairs, exhaustive, Score, DNA};

type Engine = Aligner<Equality<Score>, 4>;

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

fn engine(equal: Score, different: Score, open: Score, extend: Score) -> Result<Engine> {
    Aligner::new(
        Equality::new(equal, different),
        Affine::new(open, extend)?,
        Config::local(),
    )
}

#[test]
fn test_empty() -> Result<()> {
    let mut aligner = engine(4, -5, -10, -1)?;
    let empty: &[u8] = b"";
    for (seq1, seq2) in [(&b"ACGT"[..], empty), (empty, &b"ACGT"[..]), (empty, empty)] {
        let outcome = aligner.align(&seq1, &seq2)?;
        assert_eq!(*outcome.score(), Score::MIN);
        assert_eq!(*outcome.end(), (0, 0));
    }

    // Nothing in common, but every cell is floored at zero
    let outcome = aligner.align(&b"ACGT", &b"----")?;
    assert_eq!(*outcome.score(), 0);
    Ok(())
}

#[test]
fn test_no_gaps() -> Result<()> {
    let mut aligner = engine(4, -5, -10, -1)?;
    let outcome = aligner.align(&b"AAAAAAAAAAAAAAA", &b"AAAAAAAAAAAAAAA")?;
    assert_eq!(*outcome.score(), 60);

    let mut aligner = engine(1, -2, -4, -1)?;
    let workload = vec![
        Workload {
            seq1: b"AAGAA",
            seq2: b"AGA",
            score: 3,
        },
        Workload {
            seq1: b"AGTCCCGTGTCCCAGGGG",
            seq2: b"AGTC",
            score: 4,
        },
        Workload {
            seq1: b"CGCGCGCGTTT",
            seq2: b"CGTTT",
            score: 5,
        },
        Workload {
            seq1: b"AAAGGGAGGGTTTA",
            seq2: b"GGGGGGG",
            score: 4,
        },
        Workload {
            seq1: b"NNNN==*===*===*==",
            seq2: b"++++=============+++",
            score: 4,
        },
        Workload {
            seq1: b"NNNN===*===*===*===*===",
            seq2: b"===================",
            score: 7,
        },
        Workload {
            seq1: b"AGAAAAAAAGGAAAAAAAGGGGG",
            seq2: b"G",
            score: 1,
        },
    ];
    for w in workload {
        ensure(&mut aligner, w)?;
    }

    let outcome = aligner.align(&b"CGCGCGCGTTT", &b"CGTTT")?;
    assert_eq!(*outcome.end(), (11, 5));
    Ok(())
}

#[test]
fn test_affine_gaps() -> Result<()> {
    let mut aligner = engine(1, -2, -4, -1)?;
    let workload = vec![
        Workload {
            seq1: b"AAAAAAAAAAAAAAAA*********AAAAAAAAAAAAAAAA",
            seq2: b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
            score: 19,
        },
        Workload {
            seq1: b"ACGTACGTACGT****_________",
            seq2: b"****ACGTACGTACGT_________ACGT*****",
            score: 13,
        },
    ];
    for w in workload {
        ensure(&mut aligner, w)?;
    }

    // Opening a gap costs nothing beyond its length
    let mut aligner = engine(1, -2, 0, -1)?;
    let workload = vec![
        Workload {
            seq1: b"A***AAAAAAAA***AAAAAAAA***A",
            seq2: b"AAAAAAAAAAAAAAAA",
            score: 13,
        },
        Workload {
            seq1: b"AAAAAAA**AAAAA*****",
            seq2: b"___AAAAAAAAAAA",
            score: 9,
        },
    ];
    for w in workload {
        ensure(&mut aligner, w)?;
    }
    Ok(())
}

#[test]
fn test_floor_and_global_bound() -> Result<()> {
    let seqs = exhaustive(3);
    let mut pairs = all_pairs(&seqs);
    pairs.extend(all_pairs(DNA));

    let mut local = engine(4, -5, -10, -1)?;
    let mut overlap = Aligner::<_>::new(
        Equality::new(4, -5),
        Affine::new(-10, -1)?,
        Config::global().with_end_gaps(EndGaps::overlap()),
    )?;
    for (seq1, seq2) in pairs {
        let outcome = local.align(&seq1, &seq2)?;
        if seq1.is_empty() || seq2.is_empty() {
            assert_eq!(*outcome.score(), Score::MIN);
            continue;
        }
        assert!(*outcome.score() >= 0);
        assert!(*outcome.score() >= *overlap.align(&seq1, &seq2)?.score());

        let backward = local.align(&seq2, &seq1)?;
        assert_eq!(backward.score(), outcome.score());
    }
    Ok(())
}
