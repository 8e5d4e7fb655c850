//! # lib.rs
//!
//! Bit twiddling helpers shared by every bitboard width.
//!
//! This crate provides the `Bits` trait, a small common surface over `u64`
//! and the wide `bnum` integers used as bitboards. Board code is written once
//! against this trait and works for any board size the engine supports.
//!
//! # Author
//! Alden Luthfi

use bnum::types::{U256, U1024, U4096};

pub trait Bits: Copy + Eq + std::fmt::Debug {
    const WIDTH: u32;

    fn zero() -> Self;
    fn get_bit(&self, i: u32) -> bool;
    fn set_bit(&mut self, i: u32);
    fn clear_bit(&mut self, i: u32);
    fn count_bits(&self) -> u32;
    fn lsb(&self) -> u32;
    fn is_empty(&self) -> bool;

    /// Clears and returns the index of the least significant set bit.
    fn pop_lsb(&mut self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        let i = self.lsb();
        self.clear_bit(i);
        Some(i)
    }

    /// Indices of all set bits, lowest first.
    fn bit_indices(&self) -> Vec<u32> {
        let mut rest = *self;
        let mut indices = Vec::with_capacity(self.count_bits() as usize);
        while let Some(i) = rest.pop_lsb() {
            indices.push(i);
        }
        indices
    }
}

impl Bits for u64 {
    const WIDTH: u32 = 64;

    fn zero() -> Self {
        0
    }

    fn get_bit(&self, i: u32) -> bool {
        (self >> i) & 1 == 1
    }

    fn set_bit(&mut self, i: u32) {
        *self |= 1u64 << i;
    }

    fn clear_bit(&mut self, i: u32) {
        *self &= !(1u64 << i);
    }

    fn count_bits(&self) -> u32 {
        self.count_ones()
    }

    fn lsb(&self) -> u32 {
        self.trailing_zeros()
    }

    fn is_empty(&self) -> bool {
        *self == 0
    }
}

macro_rules! impl_wide_bits {
    ($t:ty, $width:expr) => {
        impl Bits for $t {
            const WIDTH: u32 = $width;

            fn zero() -> Self {
                <$t>::ZERO
            }

            fn get_bit(&self, i: u32) -> bool {
                self.bit(i)
            }

            fn set_bit(&mut self, i: u32) {
                <$t>::set_bit(self, i, true);
            }

            fn clear_bit(&mut self, i: u32) {
                <$t>::set_bit(self, i, false);
            }

            fn count_bits(&self) -> u32 {
                self.count_ones()
            }

            fn lsb(&self) -> u32 {
                self.trailing_zeros()
            }

            fn is_empty(&self) -> bool {
                *self == <$t>::ZERO
            }
        }
    };
}

impl_wide_bits!(U256, 256);
impl_wide_bits!(U1024, 1024);
impl_wide_bits!(U4096, 4096);
