// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Encoder backends: an owned buffer that grows, and a caller-supplied slice that doesn't.
use core::ops::Range;

use crate::error::BufferError;
use crate::traits::EncodeBuffer;

pub const DEFAULT_INITIAL_CAPACITY: usize = 256;
pub const DEFAULT_GROWTH_FACTOR: usize = 4;

/// How a [`GrowableBuffer`] sizes its first allocation and each reallocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    pub initial_capacity: usize,
    /// Multiplier applied per growth step. Values below 2 are treated as 2.
    pub factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl GrowthPolicy {
    /// Smallest capacity reachable from `current` by repeated growth steps
    /// that holds `required` bytes.
    pub fn next_capacity(&self, current: usize, required: usize) -> Result<usize, BufferError> {
        let factor = self.factor.max(2);
        let mut capacity = if current == 0 {
            self.initial_capacity.max(1)
        } else {
            current
        };

        while capacity < required {
            capacity = capacity
                .checked_mul(factor)
                .ok_or(BufferError::CapacityOverflow)?;
        }

        Ok(capacity)
    }
}

/// Owned, regrowable encoder storage.
///
/// Growth reallocates: any view obtained before a write may point at the old
/// allocation, which is why views are only handed out as borrows.
#[derive(Debug, Clone, Default)]
pub struct GrowableBuffer {
    bytes: Vec<u8>,
    policy: GrowthPolicy,
}

impl GrowableBuffer {
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            bytes: vec![0; policy.initial_capacity],
            policy,
        }
    }

    /// Adopts `bytes` as storage. Its current length becomes the capacity and
    /// its contents are kept.
    pub fn from_vec(bytes: Vec<u8>, policy: GrowthPolicy) -> Self {
        Self { bytes, policy }
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }
}

impl EncodeBuffer for GrowableBuffer {
    type Output = Vec<u8>;

    #[inline(always)]
    fn capacity(&self) -> usize {
        self.bytes.len()
    }

    fn ensure_capacity(&mut self, required: usize) -> Result<(), BufferError> {
        let current = self.bytes.len();

        if required <= current {
            return Ok(());
        }

        let capacity = self.policy.next_capacity(current, required)?;
        tracing::trace!(from = current, to = capacity, "growing encode buffer");

        // Vec::resize copies the old contents over on reallocation.
        self.bytes.resize(capacity, 0);

        Ok(())
    }

    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    fn into_region(mut self, region: Range<usize>) -> Vec<u8> {
        self.bytes.truncate(region.end);
        self.bytes.drain(..region.start.min(region.end));
        self.bytes
    }
}

/// Caller-supplied storage with fixed capacity.
impl<'a> EncodeBuffer for &'a mut [u8] {
    type Output = &'a mut [u8];

    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }

    fn ensure_capacity(&mut self, required: usize) -> Result<(), BufferError> {
        if required > self.len() {
            return Err(BufferError::CapacityExceeded {
                required,
                capacity: self.len(),
            });
        }

        Ok(())
    }

    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }

    fn into_region(self, region: Range<usize>) -> &'a mut [u8] {
        match self.get_mut(region) {
            Some(region) => region,
            None => &mut [],
        }
    }
}
