use zeroize::{Zeroize, ZeroizeOnDrop};

/// Simple trait used throughout the codebase to provide
/// portable array operations
///
/// Every key, ciphertext and shared secret handled by this crate has a size
/// fixed by its algorithm, so all of them live in statically sized arrays.
pub trait ByteArray: Sized + Zeroize {
    fn new_zero() -> Self;
    fn new_with(_: u8) -> Self;
    /// Build from a slice
    ///
    /// # Panics
    /// If `data.len() != Self::len()`. Callers validate lengths first.
    fn from_slice(_: &[u8]) -> Self;
    fn len() -> usize;
    fn as_slice(&self) -> &[u8];
    fn as_mut(&mut self) -> &mut [u8];
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

/// Encapsulation for all [`ByteArray`] types that is automatically zeroized on drop.
#[derive(ZeroizeOnDrop, Zeroize, Clone)]
pub struct SensitiveByteArray<A: ByteArray>(A);

impl<A: ByteArray> SensitiveByteArray<A> {
    pub fn new(a: A) -> SensitiveByteArray<A> {
        Self(a)
    }
}

impl<A: ByteArray> core::ops::Deref for SensitiveByteArray<A> {
    type Target = A;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<A: ByteArray> core::ops::DerefMut for SensitiveByteArray<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<A: ByteArray> core::fmt::Debug for SensitiveByteArray<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SensitiveByteArray<{}>(..)", A::len())
    }
}

impl<A: ByteArray> ByteArray for SensitiveByteArray<A> {
    fn new_zero() -> Self {
        Self::new(A::new_zero())
    }

    fn new_with(a: u8) -> Self {
        Self::new(A::new_with(a))
    }

    fn from_slice(s: &[u8]) -> Self {
        Self::new(A::from_slice(s))
    }

    fn len() -> usize {
        A::len()
    }

    fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    fn as_mut(&mut self) -> &mut [u8] {
        self.0.as_mut()
    }
}

macro_rules! impl_array {
    ($array:ty, $w:expr) => {
        impl $array for [u8; $w] {
            fn new_zero() -> Self {
                [0u8; $w]
            }
            fn new_with(x: u8) -> Self {
                [x; $w]
            }
            fn from_slice(data: &[u8]) -> Self {
                let mut a = [0u8; $w];
                a.copy_from_slice(data);
                a
            }
            fn len() -> usize {
                $w
            }
            fn as_slice(&self) -> &[u8] {
                self
            }
            fn as_mut(&mut self) -> &mut [u8] {
                self
            }
        }
    };
}

// Null HFS
impl_array!(ByteArray, 0);

// Shared secrets
impl_array!(ByteArray, 32);

// Kyber / ML-KEM public keys, ciphertexts and secret keys
impl_array!(ByteArray, 768);
impl_array!(ByteArray, 800);
impl_array!(ByteArray, 1088);
impl_array!(ByteArray, 1184);
impl_array!(ByteArray, 1568);
impl_array!(ByteArray, 1632);
impl_array!(ByteArray, 2400);
impl_array!(ByteArray, 3168);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_array_zeroizes() {
        let mut a = SensitiveByteArray::new([0xaau8; 32]);
        assert!(a.as_slice().iter().all(|b| *b == 0xaa));
        a.zeroize();
        assert!(a.as_slice().iter().all(|b| *b == 0));
    }

    #[test]
    fn null_array_is_empty() {
        assert_eq!(<[u8; 0] as ByteArray>::len(), 0);
        assert!(<[u8; 0] as ByteArray>::new_zero().as_slice().is_empty());
    }
}
