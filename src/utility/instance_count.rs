//! Live-instance counting for tests and diagnostics.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::sync::atomic::{AtomicUsize, Ordering};

/// A type with a process-wide instance counter.
///
/// Implement with [`instance_counted!`](crate::instance_counted).
pub trait Counted: 'static {
    /// The counter shared by every instance of `Self`.
    fn counter() -> &'static AtomicUsize;
}

/// Embed in a type to count its live instances.
///
/// Constructing or cloning an `InstanceCount<T>` adds one to `T`'s counter;
/// dropping it subtracts one. Every `InstanceCount` compares equal, so it does
/// not disturb derived comparisons of the type it is embedded in.
///
/// ```rust
/// use etl::utility::InstanceCount;
///
/// #[derive(Clone, Default)]
/// struct Sensor {
///     id: u8,
///     _count: InstanceCount<Sensor>,
/// }
/// etl::instance_counted!(Sensor);
///
/// let a = Sensor::default();
/// let b = a.clone();
/// assert_eq!(InstanceCount::<Sensor>::count(), 2);
/// drop((a, b));
/// assert_eq!(InstanceCount::<Sensor>::count(), 0);
/// ```
pub struct InstanceCount<T: Counted> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Counted> InstanceCount<T> {
    /// Registers one more live instance.
    pub fn new() -> Self {
        T::counter().fetch_add(1, Ordering::Relaxed);
        Self {
            _marker: PhantomData,
        }
    }

    /// Number of live instances.
    pub fn count() -> usize {
        T::counter().load(Ordering::Relaxed)
    }

    /// Sets the count to zero.
    ///
    /// Instances alive at the time no longer count; dropping them later does
    /// not take the counter below zero.
    pub fn reset() {
        T::counter().store(0, Ordering::Relaxed);
    }
}

impl<T: Counted> Default for InstanceCount<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Counted> Clone for InstanceCount<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Counted> Drop for InstanceCount<T> {
    fn drop(&mut self) {
        // Saturating: a `reset` may already have discounted this instance.
        let _ = T::counter().fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
            count.checked_sub(1)
        });
    }
}

impl<T: Counted> PartialEq for InstanceCount<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: Counted> Eq for InstanceCount<T> {}

impl<T: Counted> Hash for InstanceCount<T> {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<T: Counted> fmt::Debug for InstanceCount<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceCount")
            .field("live", &Self::count())
            .finish()
    }
}

/// Implements [`Counted`](crate::utility::Counted) for a type, giving it its
/// own counter.
#[macro_export]
macro_rules! instance_counted {
    ($ty:ty) => {
        impl $crate::utility::Counted for $ty {
            fn counter() -> &'static ::core::sync::atomic::AtomicUsize {
                static COUNT: ::core::sync::atomic::AtomicUsize =
                    ::core::sync::atomic::AtomicUsize::new(0);
                &COUNT
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default, PartialEq, Debug)]
    struct Tracked {
        value: u32,
        count: InstanceCount<Tracked>,
    }
    crate::instance_counted!(Tracked);

    #[test]
    fn test_counts_constructions_clones_and_drops() {
        let first = Tracked::default();
        let copies = [first.clone(), first.clone()];
        assert_eq!(InstanceCount::<Tracked>::count(), 3);
        assert_eq!(copies[0], first);

        drop(copies);
        assert_eq!(InstanceCount::<Tracked>::count(), 1);

        InstanceCount::<Tracked>::reset();
        drop(first);
        assert_eq!(InstanceCount::<Tracked>::count(), 0);
    }
}
