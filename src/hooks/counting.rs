//! Invocation counters for any backend
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::hooks::{ArithmeticHook, TrigHook};

/// Wraps a [`TrigHook`] and counts how often it is called.
#[derive(Debug, Default)]
pub struct CountingTrig<H> {
    inner: H,
    calls: AtomicUsize,
}

impl<H> CountingTrig<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<T, H: TrigHook<T>> TrigHook<T> for CountingTrig<H> {
    #[inline]
    fn sin_cos(&self, arg: T) -> (T, T) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.sin_cos(arg)
    }
}

/// Snapshot of the operations performed through a [`CountingArithmetic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub adds: usize,
    pub subs: usize,
    pub muls: usize,
}

impl OpCounts {
    pub fn total(&self) -> usize {
        self.adds + self.subs + self.muls
    }
}

/// Wraps an [`ArithmeticHook`] and counts each kind of operation.
#[derive(Debug, Default)]
pub struct CountingArithmetic<A> {
    inner: A,
    adds: AtomicUsize,
    subs: AtomicUsize,
    muls: AtomicUsize,
}

impl<A> CountingArithmetic<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            adds: AtomicUsize::new(0),
            subs: AtomicUsize::new(0),
            muls: AtomicUsize::new(0),
        }
    }

    pub fn counts(&self) -> OpCounts {
        OpCounts {
            adds: self.adds.load(Ordering::Relaxed),
            subs: self.subs.load(Ordering::Relaxed),
            muls: self.muls.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.adds.store(0, Ordering::Relaxed);
        self.subs.store(0, Ordering::Relaxed);
        self.muls.store(0, Ordering::Relaxed);
    }
}

impl<T, A: ArithmeticHook<T>> ArithmeticHook<T> for CountingArithmetic<A> {
    #[inline]
    fn add(&self, a: T, b: T) -> T {
        self.adds.fetch_add(1, Ordering::Relaxed);
        self.inner.add(a, b)
    }

    #[inline]
    fn sub(&self, a: T, b: T) -> T {
        self.subs.fetch_add(1, Ordering::Relaxed);
        self.inner.sub(a, b)
    }

    #[inline]
    fn mul(&self, a: T, b: T) -> T {
        self.muls.fetch_add(1, Ordering::Relaxed);
        self.inner.mul(a, b)
    }
}
