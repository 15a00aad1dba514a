//! Deterministic pseudorandom stream.
//!
//! Every draw made while encoding comes from one generator instance,
//! threaded by `&mut` through selection and shuffling. The [`Draw`] trait is
//! the seam between the algorithms and the concrete generator.

mod xorshift;

pub use xorshift::Xorshift32;

#[cfg(test)]
pub(crate) use scripted::ScriptedDraw;

/// A source of bounded integer draws.
pub trait Draw {
    /// Returns an integer in `[0, bound)`.
    ///
    /// Implementations may panic when `bound` is zero; callers must only
    /// draw from non-empty ranges.
    fn draw(&mut self, bound: usize) -> usize;
}

impl<D: Draw + ?Sized> Draw for &mut D {
    fn draw(&mut self, bound: usize) -> usize {
        (**self).draw(bound)
    }
}

#[cfg(test)]
mod scripted {
    use super::Draw;

    /// Replays fixed draws and records every requested bound.
    pub(crate) struct ScriptedDraw {
        values: Vec<usize>,
        pub(crate) bounds: Vec<usize>,
    }

    impl ScriptedDraw {
        pub(crate) fn new(values: Vec<usize>) -> Self {
            Self {
                values,
                bounds: Vec::new(),
            }
        }
    }

    impl Draw for ScriptedDraw {
        fn draw(&mut self, bound: usize) -> usize {
            let value = self.values[self.bounds.len()] % bound;
            self.bounds.push(bound);
            value
        }
    }
}
