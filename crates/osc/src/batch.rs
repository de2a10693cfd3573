//! Vectorized batch Hermite lookup
//!
//! Processes a slice of phases against one shared table, V::LANES phases
//! per group. Index and fraction come from the same `PhaseLayout` bit
//! split as the per-sample kernel and neighbor indices wrap with the same
//! `N - 1` mask, so the batch path cannot diverge from the scalar path at
//! table boundaries. The polynomial runs in lockstep across lanes in the
//! exact operation order of `hermite_4pt`; with add/sub/mul each costing
//! one IEEE 754 rounding per lane on every backend, the output matches
//! the per-sample kernel bit-for-bit.

use crate::phase::Phase;
use crate::wavetable::Wavetable;
use saiph_math::SimdVector;

/// Widest lane count any backend exposes.
const MAX_LANES: usize = 16;

impl<const N: usize> Wavetable<N> {
    /// Hermite-interpolated lookup for a batch of phases.
    ///
    /// Writes one sample per input phase into `output`. Full groups of
    /// `V::LANES` phases take the vectorized path (gathered neighbor
    /// loads, lockstep polynomial); remainder elements at the tail fall
    /// back to the per-sample `lookup_hermite` kernel, so any batch
    /// length is accepted and output length always equals input length.
    ///
    /// Groups are independent: they read only the immutable table and
    /// their own input slots, and write disjoint output slots.
    ///
    /// # Example
    ///
    /// ```rust
    /// use saiph_osc::{Phase, Wavetable};
    /// use saiph_math::DefaultSimdVector;
    ///
    /// let table = Wavetable::<64>::sine();
    /// let phases = [0 as Phase; 32];
    /// let mut block = [0.0f32; 32];
    /// table.lookup_hermite_batch::<DefaultSimdVector>(&phases, &mut block);
    /// assert_eq!(block[0], table.lookup_hermite(0));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `phases` and `output` differ in length.
    pub fn lookup_hermite_batch<V: SimdVector<Scalar = f32>>(
        &self,
        phases: &[Phase],
        output: &mut [f32],
    ) {
        assert!(
            phases.len() == output.len(),
            "batch output length {} does not match input length {}",
            output.len(),
            phases.len()
        );
        assert!(V::LANES <= MAX_LANES, "unsupported SIMD lane count");

        let mask = N - 1;
        let layout = *self.layout();

        let mut fracs = [0.0f32; MAX_LANES];
        let mut idx_m1 = [0u32; MAX_LANES];
        let mut idx_0 = [0u32; MAX_LANES];
        let mut idx_p1 = [0u32; MAX_LANES];
        let mut idx_p2 = [0u32; MAX_LANES];

        let full = phases.len() - phases.len() % V::LANES;
        let half = V::splat(0.5);

        let groups = phases[..full]
            .chunks_exact(V::LANES)
            .zip(output[..full].chunks_exact_mut(V::LANES));
        for (group, out) in groups {
            for (lane, &phase) in group.iter().enumerate() {
                let i0 = layout.index(phase);
                fracs[lane] = layout.fraction(phase);
                idx_m1[lane] = (i0.wrapping_sub(1) & mask) as u32;
                idx_0[lane] = i0 as u32;
                idx_p1[lane] = ((i0 + 1) & mask) as u32;
                idx_p2[lane] = ((i0 + 2) & mask) as u32;
            }

            let f = V::from_slice(&fracs);
            let xm1 = V::gather(self.samples(), &idx_m1);
            let x0 = V::gather(self.samples(), &idx_0);
            let x1 = V::gather(self.samples(), &idx_p1);
            let x2 = V::gather(self.samples(), &idx_p2);

            // Same expression, same order as hermite_4pt
            let c = x1.sub(xm1).mul(half);
            let v = x0.sub(x1);
            let w = c.add(v);
            let a = w.add(v).add(x2.sub(x0).mul(half));
            let b = w.add(a);
            let y = a.mul(f).sub(b).mul(f).add(c).mul(f).add(x0);

            y.to_slice(out);
        }

        for (&phase, out) in phases[full..].iter().zip(output[full..].iter_mut()) {
            *out = self.lookup_hermite(phase);
        }
    }
}
