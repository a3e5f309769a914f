use alignkit_alignment_rs::pairwise::scoring::gaps::Affine;
use alignkit_alignment_rs::pairwise::scoring::matrices::blosum62;
use alignkit_alignment_rs::pairwise::scoring::profile::{Bulk, Profiled};
use alignkit_alignment_rs::pairwise::scoring::symbols::{Equality, Scorer};
use alignkit_alignment_rs::pairwise::{
    Aligner, BulkAligner, Config, EndGap, EndGaps, SaturatedAligner,
};
use eyre::Result;
use rayon::prelude::*;
use wide::{i16x16, i32x8, i8x16};

use super::{all_pairs, exhaustive, DNA, PROTEIN};

const LANES_PER_TASK: usize = 160;

fn configs() -> Vec<Config> {
    vec![
        Config::global(),
        Config::semi_global(),
        Config::overlap(),
        Config::global().with_end_gaps(EndGaps::new(
            EndGap::Free,
            EndGap::Penalized,
            EndGap::Penalized,
            EndGap::Free,
        )),
        Config::local(),
    ]
}

fn expected<Sc>(
    scorer: Sc,
    gaps: Affine<i32>,
    config: Config,
    pairs: &[(&[u8], &[u8])],
) -> Result<Vec<i32>>
where
    Sc: Scorer<Score = i32> + Profiled<i32, u8>,
{
    let mut aligner = Aligner::<_>::new(scorer, gaps, config)?;
    pairs
        .iter()
        .map(|(seq1, seq2)| Ok(*aligner.align(seq1, seq2)?.score()))
        .collect()
}

fn saturated<Sc: Bulk<i8x16>>(
    scorer: Sc,
    gaps: Affine<Sc::Score>,
    config: Config,
    pairs: &[(&[u8], &[u8])],
) -> Result<Vec<i32>> {
    SaturatedAligner::new(scorer, gaps, config)?.align_batch(pairs)
}

#[test]
fn test_bulk_equals_scalar() -> Result<()> {
    let seqs = exhaustive(3);
    let mut pairs = all_pairs(&seqs);
    pairs.extend(all_pairs(DNA));

    for config in configs() {
        let gaps = Affine::new(-10, -1)?;
        let scores = expected(Equality::new(4, -5), gaps, config, &pairs)?;

        let mut aligner = BulkAligner::<i32x8, _>::new(Equality::new(4, -5), gaps, config)?;
        assert_eq!(aligner.align_batch(&pairs)?, scores, "{config:?}");

        let mut aligner = BulkAligner::<i32x8, _, 1>::new(Equality::new(4, -5), gaps, config)?;
        assert_eq!(aligner.align_batch(&pairs)?, scores, "{config:?}");

        // 16-bit lanes report their own sentinel for empty local alignments
        let narrow = Affine::new(-10i16, -1)?;
        let mut aligner = BulkAligner::<i16x16, _, 5>::new(Equality::new(4i16, -5), narrow, config)?;
        let widened = aligner
            .align_batch(&pairs)?
            .into_iter()
            .map(|x| if x == i16::MIN { i32::MIN } else { x as i32 })
            .collect::<Vec<_>>();
        assert_eq!(widened, scores, "{config:?}");
    }
    Ok(())
}

#[test]
fn test_bulk_matrix_equals_scalar() -> Result<()> {
    let pairs = all_pairs(PROTEIN);
    for config in configs() {
        let gaps = Affine::new(-11, -1)?;
        let scores = expected(blosum62()?, gaps, config, &pairs)?;

        let mut aligner = BulkAligner::<i32x8, _>::new(blosum62()?, gaps, config)?;
        assert_eq!(aligner.align_batch(&pairs)?, scores, "{config:?}");

        let triangular = blosum62::<i32>()?.triangular()?;
        assert_eq!(expected(triangular.clone(), gaps, config, &pairs)?, scores);
        let mut aligner = BulkAligner::<i32x8, _, 3>::new(triangular, gaps, config)?;
        assert_eq!(aligner.align_batch(&pairs)?, scores, "{config:?}");
    }
    Ok(())
}

#[test]
fn test_saturated_equals_scalar() -> Result<()> {
    let seqs = exhaustive(3);
    let mut pairs = all_pairs(&seqs);
    pairs.extend(all_pairs(DNA));

    for config in configs() {
        for (open, extend) in [(-10, -1), (0, -1), (-3, -3)] {
            let gaps = Affine::new(open, extend)?;
            let scores = expected(Equality::new(4, -5), gaps, config, &pairs)?;
            let result = saturated(Equality::new(4, -5), gaps, config, &pairs)?;
            assert_eq!(result, scores, "{config:?}, {gaps:?}");
        }
    }
    Ok(())
}

#[test]
fn test_saturated_matrix_equals_scalar() -> Result<()> {
    // Scores of the longer proteins leave the 8-bit range
    let pairs = all_pairs(PROTEIN);
    for config in configs() {
        let gaps = Affine::new(-11, -1)?;
        let scores = expected(blosum62()?, gaps, config, &pairs)?;
        assert!(scores.iter().any(|x| *x > i8::MAX as i32));

        let result = saturated(blosum62::<i32>()?, gaps, config, &pairs)?;
        assert_eq!(result, scores, "{config:?}");
    }
    Ok(())
}

#[test]
fn test_saturated_configuration() -> Result<()> {
    // Substitution scores don't fit into 8 bits
    let aligner = SaturatedAligner::new(Equality::new(400, -5), Affine::new(-10, -1)?, Config::global());
    assert!(aligner.is_err());

    // Scores fit, but no block of rows can be processed without saturation
    let aligner = SaturatedAligner::new(Equality::new(60, -60), Affine::new(-60, -6)?, Config::global());
    assert!(aligner.is_err());

    let aligner = SaturatedAligner::new(Equality::new(4, -5), Affine::new(-10, -1)?, Config::local());
    assert_eq!(aligner?.block(), 5);
    Ok(())
}

#[test]
fn test_parallel_aligners() -> Result<()> {
    let seqs = exhaustive(4);
    let pairs = all_pairs(&seqs);
    let gaps = Affine::new(-10, -1)?;

    for config in configs() {
        let scores = expected(Equality::new(4, -5), gaps, config, &pairs)?;

        let parallel = pairs
            .par_chunks(1024)
            .map(|chunk| {
                let mut aligner = Aligner::<_>::new(Equality::new(4, -5), gaps, config)?;
                chunk
                    .iter()
                    .map(|(seq1, seq2)| Ok(*aligner.align(seq1, seq2)?.score()))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(parallel.concat(), scores);

        let batched = pairs
            .par_chunks(LANES_PER_TASK)
            .map(|chunk| {
                SaturatedAligner::new(Equality::new(4, -5), gaps, config)?.align_batch(chunk)
            })
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(batched.concat(), scores);
    }
    Ok(())
}
