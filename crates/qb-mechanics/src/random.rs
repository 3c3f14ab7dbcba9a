//! Unbiased random draws over a byte generator.
//!
//! The host supplies uniformly distributed bytes. [`next_below`] turns them
//! into uniform integers in `0..n` by rejection sampling, and
//! [`percent_chance`] builds weighted yes/no draws on top of it.

use rand::RngCore;

use crate::error::{MechError, MechResult};

/// Rejected draws tolerated before giving up. Only debug builds bound the
/// retry loop; release builds keep drawing until a byte is accepted.
pub const DEFAULT_RETRY_CAP: Option<u32> = if cfg!(debug_assertions) {
    Some(10_000)
} else {
    None
};

/// A generator of uniformly distributed bytes.
pub trait ByteSource {
    /// Draw the next byte.
    fn next_byte(&mut self) -> u8;
}

impl<R: RngCore + ?Sized> ByteSource for R {
    fn next_byte(&mut self) -> u8 {
        (self.next_u32() & 0xFF) as u8
    }
}

/// Replays a fixed byte sequence, cycling when it runs out.
///
/// Useful for reproducing a recorded session or pinning exact draws in tests.
#[derive(Debug, Clone)]
pub struct ScriptedBytes {
    bytes: Vec<u8>,
    pos: usize,
}

impl ScriptedBytes {
    /// Create a source that yields `bytes` in order, then starts over.
    /// An empty script yields zeros.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
        }
    }

    /// Number of bytes drawn so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl ByteSource for ScriptedBytes {
    fn next_byte(&mut self) -> u8 {
        if self.bytes.is_empty() {
            return 0;
        }
        let byte = self.bytes[self.pos % self.bytes.len()];
        self.pos += 1;
        byte
    }
}

/// Draw a uniform integer in `0..n` for `n` in `1..=255`.
pub fn next_below<B: ByteSource + ?Sized>(src: &mut B, n: u32) -> MechResult<u8> {
    next_below_with_cap(src, n, DEFAULT_RETRY_CAP)
}

/// [`next_below`] with an explicit bound on consecutive rejected draws.
///
/// Bytes above `255 - ((255 mod n) + 1)` are rejected so every residue is hit
/// equally often by the accepted range.
pub fn next_below_with_cap<B: ByteSource + ?Sized>(
    src: &mut B,
    n: u32,
    cap: Option<u32>,
) -> MechResult<u8> {
    if n == 0 || n > 255 {
        return Err(MechError::InvalidArgument(format!(
            "draw bound must be in 1..=255, got {n}"
        )));
    }
    let excess = (255 % n) + 1;
    let limit = 255 - excess;

    let mut attempts: u32 = 0;
    loop {
        let byte = u32::from(src.next_byte());
        if byte <= limit {
            return Ok((byte % n) as u8);
        }
        attempts = attempts.saturating_add(1);
        if cap.is_some_and(|cap| attempts >= cap) {
            return Err(MechError::SourceExhausted { attempts });
        }
    }
}

/// Weighted yes/no draw: true with `p` percent probability.
///
/// `p <= 0` never draws and is always false; `p >= 100` never draws and is
/// always true. Otherwise a draw below 100 is compared with `draw < p`.
pub fn percent_chance<B: ByteSource + ?Sized>(src: &mut B, p: i32) -> bool {
    if p <= 0 {
        return false;
    }
    if p >= 100 {
        return true;
    }
    match next_below(src, 100) {
        Ok(draw) => i32::from(draw) < p,
        Err(err) => {
            tracing::warn!(%err, percent = p, "percent draw failed, treating as a miss");
            false
        }
    }
}

/// Index of the largest key. Ties go to the earliest key; an empty slice yields 0.
pub fn argmax_first(keys: &[u8]) -> usize {
    let mut best = 0;
    for (i, &key) in keys.iter().enumerate().skip(1) {
        if key > keys[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_zero_and_oversized_bounds() {
        let mut src = ScriptedBytes::new([1]);
        assert!(matches!(
            next_below(&mut src, 0),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(matches!(
            next_below(&mut src, 256),
            Err(MechError::InvalidArgument(_))
        ));
        assert_eq!(src.consumed(), 0);
    }

    #[test]
    fn skips_bytes_above_limit() {
        // n = 2: excess 2, limit 253; 254 and 255 are rejected.
        let mut src = ScriptedBytes::new([255, 254, 253]);
        assert_eq!(next_below(&mut src, 2).unwrap(), 1);
        assert_eq!(src.consumed(), 3);

        // n = 3: 255 mod 3 == 0, limit 254.
        let mut src = ScriptedBytes::new([255, 254]);
        assert_eq!(next_below(&mut src, 3).unwrap(), 254 % 3);
        assert_eq!(src.consumed(), 2);
    }

    #[test]
    fn accepts_in_range_bytes_directly() {
        let mut src = ScriptedBytes::new([0, 99, 100, 199]);
        assert_eq!(next_below(&mut src, 100).unwrap(), 0);
        assert_eq!(next_below(&mut src, 100).unwrap(), 99);
        assert_eq!(next_below(&mut src, 100).unwrap(), 0);
        assert_eq!(next_below(&mut src, 100).unwrap(), 99);
    }

    #[test]
    fn bound_of_one_always_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert_eq!(next_below(&mut rng, 1).unwrap(), 0);
        }
    }

    #[test]
    fn stuck_source_hits_retry_cap() {
        let mut src = ScriptedBytes::new([255]);
        let err = next_below_with_cap(&mut src, 2, Some(50)).unwrap_err();
        assert_eq!(err, MechError::SourceExhausted { attempts: 50 });
        assert_eq!(src.consumed(), 50);
    }

    // release builds keep drawing, so a stuck source never returns there
    #[cfg(debug_assertions)]
    #[test]
    fn exhausted_source_counts_as_a_miss() {
        let mut src = ScriptedBytes::new([255]);
        assert!(!percent_chance(&mut src, 99));
        assert_eq!(src.consumed(), 10_000);
    }

    #[test]
    fn draws_are_unbiased() {
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 100_000;
        for n in [2u32, 3, 4, 7, 10] {
            let mut counts = vec![0u32; n as usize];
            for _ in 0..trials {
                counts[next_below(&mut rng, n).unwrap() as usize] += 1;
            }
            let expected = 1.0 / f64::from(n);
            for (residue, &count) in counts.iter().enumerate() {
                let freq = f64::from(count) / f64::from(trials);
                assert!(
                    (freq - expected).abs() < 0.02,
                    "n={n} residue={residue}: {freq:.4} vs {expected:.4}"
                );
            }
        }
    }

    #[test]
    fn percent_chance_zero_never_hits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(!percent_chance(&mut rng, 0));
            assert!(!percent_chance(&mut rng, -5));
        }
    }

    #[test]
    fn percent_chance_hundred_always_hits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(percent_chance(&mut rng, 100));
            assert!(percent_chance(&mut rng, 150));
        }
    }

    #[test]
    fn percent_chance_boundaries_consume_nothing() {
        let mut src = ScriptedBytes::new([0]);
        percent_chance(&mut src, 0);
        percent_chance(&mut src, 100);
        assert_eq!(src.consumed(), 0);
    }

    #[test]
    fn percent_chance_is_half_open() {
        // draw 49 < 50 hits, draw 50 misses
        let mut src = ScriptedBytes::new([49, 50]);
        assert!(percent_chance(&mut src, 50));
        assert!(!percent_chance(&mut src, 50));
        // draw 0 hits at p = 1
        let mut src = ScriptedBytes::new([0, 1]);
        assert!(percent_chance(&mut src, 1));
        assert!(!percent_chance(&mut src, 1));
    }

    #[test]
    fn percent_chance_fifty_is_balanced() {
        let mut rng = StdRng::seed_from_u64(1234);
        let trials = 100_000;
        let hits = (0..trials).filter(|_| percent_chance(&mut rng, 50)).count();
        let rate = hits as f64 / f64::from(trials);
        assert!((0.48..=0.52).contains(&rate), "rate {rate}");
    }

    #[test]
    fn argmax_ties_go_to_first() {
        assert_eq!(argmax_first(&[3, 9, 9, 1]), 1);
        assert_eq!(argmax_first(&[5, 5, 5]), 0);
        assert_eq!(argmax_first(&[0, 1]), 1);
        assert_eq!(argmax_first(&[]), 0);
    }

    #[test]
    fn scripted_bytes_cycle() {
        let mut src = ScriptedBytes::new([1, 2]);
        let drawn: Vec<u8> = (0..5).map(|_| src.next_byte()).collect();
        assert_eq!(drawn, vec![1, 2, 1, 2, 1]);
        assert_eq!(ScriptedBytes::new(Vec::new()).next_byte(), 0);
    }
}
