//! Message-schedule expansion and the compression loop (FIPS 180-4 §6).

use shs_types::CryptoError;

use super::padding::pad_message;
use super::params::VariantParams;
use super::word::Word;

/// Expand one block's 16 native words into the full round schedule.
pub(crate) fn expand_schedule<W: Word>(block: &[u8], params: &VariantParams<W>) -> Vec<W> {
    let mut w = Vec::with_capacity(params.rounds);
    for chunk in block.chunks_exact(W::BYTES) {
        w.push(W::from_be_slice(chunk));
    }
    let [r0, r1, sh0] = params.sigma0;
    let [r2, r3, sh1] = params.sigma1;
    for c in 16..params.rounds {
        let s0 = w[c - 15].rotate_right(r0) ^ w[c - 15].rotate_right(r1) ^ w[c - 15].shift_right(sh0);
        let s1 = w[c - 2].rotate_right(r2) ^ w[c - 2].rotate_right(r3) ^ w[c - 2].shift_right(sh1);
        w.push(w[c - 16].wrapping_add(s0).wrapping_add(w[c - 7]).wrapping_add(s1));
    }
    w
}

/// Run the round function over one schedule and fold the final registers
/// back into the running state.
///
/// All eight registers are folded for every variant. SHA-224 and SHA-384
/// are full-state chains with distinct initial vectors; their shorter
/// output comes from truncation at rendering time, not from a shortened
/// register set.
pub(crate) fn compress<W: Word>(state: &mut [W; 8], schedule: &[W], params: &VariantParams<W>) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    let [a0, a1, a2] = params.big_sigma0;
    let [e0, e1, e2] = params.big_sigma1;

    for j in 0..params.rounds {
        let s1 = e.rotate_right(e0) ^ e.rotate_right(e1) ^ e.rotate_right(e2);
        let ch = (e & f) ^ (!e & g);
        let t0 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(params.k[j])
            .wrapping_add(schedule[j]);
        let s0 = a.rotate_right(a0) ^ a.rotate_right(a1) ^ a.rotate_right(a2);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t1 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t0);
        d = c;
        c = b;
        b = a;
        a = t0.wrapping_add(t1);
    }

    for (s, r) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(r);
    }
}

/// Hash a whole message: pad, then chain the compression over the blocks
/// in order, starting from the variant's initial hash vector.
pub(crate) fn digest_state<W: Word>(
    msg: &[u8],
    params: &VariantParams<W>,
) -> Result<[W; 8], CryptoError> {
    let padded = pad_message::<W>(msg)?;
    let mut state = params.iv;
    for block in padded.chunks_exact(VariantParams::<W>::BLOCK_BYTES) {
        let schedule = expand_schedule(block, params);
        compress(&mut state, &schedule, params);
    }
    Ok(state)
}

/// Serialize the truncated digest; `out` must be `output_bytes()` long.
pub(crate) fn write_digest<W: Word>(state: &[W; 8], params: &VariantParams<W>, out: &mut [u8]) {
    for (chunk, w) in out.chunks_exact_mut(W::BYTES).zip(&state[..params.output_words]) {
        w.write_be(chunk);
    }
}
