//! Strongly typed integer wrappers.

/// Declares a `#[repr(transparent)]` integer newtype that does not mix with
/// its underlying type or with other newtypes by accident.
///
/// The generated type has `new`, `get`, `get_mut`, conversions to and from
/// the underlying integer, arithmetic, bitwise and shift operators (against
/// itself and against the underlying type), their compound-assignment forms,
/// and `increment`/`decrement`.
///
/// ```rust
/// etl::user_type! {
///     /// Milliseconds since boot.
///     pub struct Millis(u32);
/// }
///
/// let mut t = Millis::new(10);
/// t += 5;
/// t.increment();
/// assert_eq!(t.get(), 16);
/// assert_eq!(t + Millis::new(4), Millis::new(20));
/// assert_eq!(u32::from(t >> 1), 8);
/// ```
#[macro_export]
macro_rules! user_type {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($repr:ty);) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
        $vis struct $name($repr);

        impl $name {
            /// Wraps `value`.
            #[inline]
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            /// The underlying value.
            #[inline]
            pub const fn get(self) -> $repr {
                self.0
            }

            /// The underlying value, mutably.
            #[inline]
            pub fn get_mut(&mut self) -> &mut $repr {
                &mut self.0
            }

            /// Adds one and returns the new value.
            #[inline]
            pub fn increment(&mut self) -> Self {
                self.0 += 1;
                *self
            }

            /// Subtracts one and returns the new value.
            #[inline]
            pub fn decrement(&mut self) -> Self {
                self.0 -= 1;
                *self
            }
        }

        impl ::core::convert::From<$repr> for $name {
            #[inline]
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for $repr {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::ops::Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        $crate::user_type!(@binary $name, $repr, Add, add, AddAssign, add_assign, +);
        $crate::user_type!(@binary $name, $repr, Sub, sub, SubAssign, sub_assign, -);
        $crate::user_type!(@binary $name, $repr, Mul, mul, MulAssign, mul_assign, *);
        $crate::user_type!(@binary $name, $repr, Div, div, DivAssign, div_assign, /);
        $crate::user_type!(@binary $name, $repr, Rem, rem, RemAssign, rem_assign, %);
        $crate::user_type!(@binary $name, $repr, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        $crate::user_type!(@binary $name, $repr, BitOr, bitor, BitOrAssign, bitor_assign, |);
        $crate::user_type!(@binary $name, $repr, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
        $crate::user_type!(@shift $name, Shl, shl, ShlAssign, shl_assign, <<);
        $crate::user_type!(@shift $name, Shr, shr, ShrAssign, shr_assign, >>);
    };

    (@binary $name:ident, $repr:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt) => {
        impl ::core::ops::$op for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $sym rhs.0)
            }
        }

        impl ::core::ops::$op<$repr> for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: $repr) -> Self {
                Self(self.0 $sym rhs)
            }
        }

        impl ::core::ops::$op_assign for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = Self(self.0 $sym rhs.0);
            }
        }

        impl ::core::ops::$op_assign<$repr> for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: $repr) {
                *self = Self(self.0 $sym rhs);
            }
        }
    };

    (@shift $name:ident, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt) => {
        impl ::core::ops::$op<u32> for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: u32) -> Self {
                Self(self.0 $sym rhs)
            }
        }

        impl ::core::ops::$op_assign<u32> for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: u32) {
                *self = Self(self.0 $sym rhs);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::user_type! {
        struct Channel(u8);
    }

    crate::user_type! {
        struct Offset(i32);
    }

    #[test]
    fn test_operators() {
        let mut channel = Channel::new(0b1010);
        assert_eq!(channel & 0b0011, Channel::new(0b0010));
        assert_eq!(channel | Channel::new(1), Channel::new(0b1011));
        assert_eq!((channel << 1).get(), 0b10100);
        channel ^= 0b1111;
        assert_eq!(channel.get(), 0b0101);
        assert_eq!(!Channel::new(0), Channel::new(u8::MAX));
    }

    #[test]
    fn test_increment_decrement() {
        let mut offset = Offset::default();
        assert_eq!(offset.decrement(), Offset::new(-1));
        offset.increment();
        offset.increment();
        assert_eq!(i32::from(offset), 1);
        *offset.get_mut() *= 10;
        assert_eq!(offset.to_string(), "10");
    }

    #[test]
    fn test_ordering() {
        assert!(Offset::new(-3) < Offset::new(2));
        assert_eq!(Offset::from(7) % 4, Offset::new(3));
    }
}
