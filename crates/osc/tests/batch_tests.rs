//! Batch Hermite path tests
//!
//! The batch kernel must agree with the per-sample Hermite kernel for
//! every phase, at every table boundary, for any batch length. Built with
//! the `avx2` feature these tests exercise the vectorized path; by
//! default they pin the scalar-backend batch to the reference kernel.

use saiph_math::{DefaultSimdVector, ScalarVector, SimdVector};
use saiph_osc::{Phase, Wavetable};

fn scattered_phases(count: usize) -> Vec<Phase> {
    // Deterministic spread touching every table region including both
    // wrap boundaries
    (0..count)
        .map(|i| {
            (i as Phase)
                .wrapping_mul(0x9E37_79B9_7F4A_7C15u64 as Phase)
                .wrapping_add(i as Phase)
        })
        .collect()
}

#[test]
fn batch_matches_scalar_kernel() {
    let table = Wavetable::<256>::sine();
    let phases = scattered_phases(64);
    let mut out = vec![0.0f32; phases.len()];

    table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut out);

    for (i, &phase) in phases.iter().enumerate() {
        let reference = table.lookup_hermite(phase);
        assert!(
            (out[i] - reference).abs() <= 1e-6,
            "phase {:#x}: batch {} vs scalar {}",
            phase,
            out[i],
            reference
        );
    }
}

#[test]
fn batch_of_identical_phases_is_uniform() {
    let table = Wavetable::<64>::sine();
    let phase = Phase::MAX / 3;
    let phases = vec![phase; 32];
    let mut out = vec![0.0f32; 32];

    table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut out);

    let reference = table.lookup_hermite(phase);
    for (i, &y) in out.iter().enumerate() {
        assert_eq!(y, out[0], "lane {} diverged within the batch", i);
        assert!((y - reference).abs() <= 1e-6);
    }
}

#[test]
fn batch_covers_table_wrap_boundaries() {
    // Phases whose slots sit at the ends of the table, where neighbor
    // masking matters most
    let table = Wavetable::<8>::from_samples([0.0, 0.5, 1.0, 0.5, 0.0, -0.5, -1.0, -0.5]);
    let stride = 1usize << table.layout().fraction_bits();
    let phases: Vec<Phase> = vec![
        0,
        stride / 2,
        7 * stride,
        7 * stride + stride / 2,
        Phase::MAX,
        6 * stride + stride / 3,
        stride,
        Phase::MAX - 1,
    ];
    let mut out = vec![0.0f32; phases.len()];

    table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut out);

    for (i, &phase) in phases.iter().enumerate() {
        let reference = table.lookup_hermite(phase);
        assert!(
            (out[i] - reference).abs() <= 1e-6,
            "boundary phase {:#x}: batch {} vs scalar {}",
            phase,
            out[i],
            reference
        );
    }
}

#[test]
fn remainder_elements_take_the_scalar_fallback() {
    // 19 is not a multiple of any backend's lane count; the tail behind
    // the last full group must still be filled
    let table = Wavetable::<64>::sine();
    let phases = scattered_phases(19);
    let mut out = vec![f32::NAN; 19];

    table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut out);

    for (i, &phase) in phases.iter().enumerate() {
        assert!(out[i].is_finite(), "slot {} never written", i);
        assert!((out[i] - table.lookup_hermite(phase)).abs() <= 1e-6);
    }
}

#[test]
fn output_length_always_equals_input_length() {
    let table = Wavetable::<64>::sine();
    for len in [0usize, 1, 7, 8, 9, 16, 33] {
        let phases = scattered_phases(len);
        let mut out = vec![f32::NAN; len];
        table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut out);
        assert!(out.iter().all(|y| y.is_finite()), "length {}", len);
    }
}

#[test]
fn scalar_backend_batch_is_bit_exact() {
    let table = Wavetable::<256>::sine();
    let phases = scattered_phases(48);
    let mut out = vec![0.0f32; phases.len()];

    table.lookup_hermite_batch::<ScalarVector<f32>>(&phases, &mut out);

    for (i, &phase) in phases.iter().enumerate() {
        assert_eq!(
            out[i],
            table.lookup_hermite(phase),
            "scalar-backend batch must be bit-identical at {:#x}",
            phase
        );
    }
}

#[test]
#[should_panic(expected = "does not match input length")]
fn mismatched_lengths_are_a_precondition_failure() {
    let table = Wavetable::<64>::sine();
    let phases = scattered_phases(8);
    let mut out = vec![0.0f32; 7];
    table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut out);
}

// Exercised only when the vector backend is wider than one lane: the
// vectorized and scalar-fallback regions of one call must agree.
#[test]
fn vector_and_fallback_regions_agree() {
    if DefaultSimdVector::LANES == 1 {
        return;
    }
    let table = Wavetable::<128>::sine();
    let phase = 0x0123_4567_89AB_CDEFu64 as Phase;
    let len = DefaultSimdVector::LANES + 3;
    let phases = vec![phase; len];
    let mut out = vec![0.0f32; len];

    table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut out);

    let from_vector_region = out[0];
    let from_fallback_region = out[len - 1];
    assert!((from_vector_region - from_fallback_region).abs() <= 1e-6);
}
