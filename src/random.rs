use anyhow::Result;
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use zeroize::Zeroizing;

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 1024;

/// A source of uniformly distributed indices.
///
/// Implementations used for real passwords must be cryptographically secure.
pub trait IndexSource {
    /// Returns an index uniformly distributed over `0..bound`.
    fn next_index(&mut self, bound: usize) -> Result<usize>;
}

/// ChaCha20 keystream keyed from the operating system CSPRNG.
///
/// Indices are taken by unbiased rejection sampling, so every value below
/// `bound` is equally likely. Key and buffered keystream are wiped on drop.
pub struct SecureRng {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl SecureRng {
    pub fn new() -> Result<Self> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        getrandom::fill(&mut key[..])
            .map_err(|err| anyhow::anyhow!("Failed to read OS random source: {}", err))?;

        Ok(Self::from_key(&key))
    }

    pub(crate) fn from_key(key: &[u8; KEY_LEN]) -> Self {
        let mut cipher = ChaCha20::new(key.into(), &[0u8; 12].into());

        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }

    fn next_byte(&mut self) -> u8 {
        if self.pos >= self.buffer.len() {
            self.refill();
        }

        let byte = self.buffer[self.pos];
        self.pos += 1;
        byte
    }

    fn next_u32(&mut self) -> u32 {
        u32::from_le_bytes([
            self.next_byte(),
            self.next_byte(),
            self.next_byte(),
            self.next_byte(),
        ])
    }
}

impl IndexSource for SecureRng {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            anyhow::bail!("Cannot draw an index from an empty range");
        }

        if bound <= 256 {
            let rejection_threshold = 256 - (256 % bound);
            loop {
                let random_byte = self.next_byte() as usize;
                if random_byte < rejection_threshold {
                    return Ok(random_byte % bound);
                }
            }
        }

        let range = 1u64 << 32;
        let bound = u64::try_from(bound)?;
        if bound > range {
            anyhow::bail!("Index bound {} exceeds 32-bit sampling range", bound);
        }

        let rejection_threshold = range - (range % bound);
        loop {
            let random_u32 = u64::from(self.next_u32());
            if random_u32 < rejection_threshold {
                return Ok(usize::try_from(random_u32 % bound)?);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_stream_is_deterministic() {
        let key = [42u8; 32];
        let mut a = SecureRng::from_key(&key);
        let mut b = SecureRng::from_key(&key);

        for _ in 0..64 {
            assert_eq!(a.next_index(89).unwrap(), b.next_index(89).unwrap());
        }
    }

    #[test]
    fn test_os_keyed_streams_differ() {
        let mut a = SecureRng::new().unwrap();
        let mut b = SecureRng::new().unwrap();

        let draws_a: Vec<usize> = (0..32).map(|_| a.next_index(256).unwrap()).collect();
        let draws_b: Vec<usize> = (0..32).map(|_| b.next_index(256).unwrap()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_index_within_bound() {
        let mut rng = SecureRng::from_key(&[7u8; 32]);

        for bound in [1, 2, 3, 10, 89, 255, 256, 257, 1000, 70_000] {
            for _ in 0..200 {
                let index = rng.next_index(bound).unwrap();
                assert!(index < bound, "Index {} out of bound {}", index, bound);
            }
        }
    }

    #[test]
    fn test_zero_bound_is_rejected() {
        let mut rng = SecureRng::from_key(&[7u8; 32]);
        assert!(rng.next_index(0).is_err());
    }

    #[test]
    fn test_refill_past_buffer() {
        let mut rng = SecureRng::from_key(&[1u8; 32]);

        for _ in 0..(BUFFER_LEN * 3) {
            rng.next_index(256).unwrap();
        }
        assert!(rng.pos <= BUFFER_LEN);
    }

    #[test]
    fn test_rejection_threshold() {
        let bound = 89;
        let threshold = 256 - (256 % bound);
        assert_eq!(threshold, 178);
        assert_eq!(threshold % bound, 0);
    }
}
