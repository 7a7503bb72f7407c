//! `core::ops` on [`Integer`], panicking where the `try_*` methods fail.

use core::ops::{
    Add, AddAssign,
    Div, DivAssign,
    Mul, MulAssign,
    Neg,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Sub, SubAssign,
};

use crate::{Integer, Result, Word};

#[track_caller]
fn or_panic(result: Result<()>) {
    if let Err(error) = result {
        panic!("{}", error);
    }
}

/// `Op<&Integer>`, `Op<Integer>` for owned and borrowed left-hand sides, plus `OpAssign`,
/// all delegating to `$try`.
macro_rules! integer_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try:ident) => {
        impl $OpAssign<&Integer> for Integer {
            #[track_caller]
            fn $op_assign(&mut self, rhs: &Integer) {
                or_panic(self.$try(rhs));
            }
        }

        impl $OpAssign for Integer {
            #[track_caller]
            fn $op_assign(&mut self, rhs: Integer) {
                or_panic(self.$try(&rhs));
            }
        }

        impl $Op<&Integer> for &Integer {
            type Output = Integer;

            #[track_caller]
            fn $op(self, rhs: &Integer) -> Self::Output {
                let mut result = self.clone();
                or_panic(result.$try(rhs));
                result
            }
        }

        impl $Op<&Integer> for Integer {
            type Output = Integer;

            #[track_caller]
            fn $op(mut self, rhs: &Integer) -> Self::Output {
                or_panic(self.$try(rhs));
                self
            }
        }

        impl $Op for Integer {
            type Output = Integer;

            #[track_caller]
            fn $op(mut self, rhs: Integer) -> Self::Output {
                or_panic(self.$try(&rhs));
                self
            }
        }
    };
}

/// Same as `integer_binop`, with a single word on the right-hand side.
macro_rules! word_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try:ident) => {
        impl $OpAssign<Word> for Integer {
            #[track_caller]
            fn $op_assign(&mut self, rhs: Word) {
                or_panic(self.$try(rhs));
            }
        }

        impl $Op<Word> for &Integer {
            type Output = Integer;

            #[track_caller]
            fn $op(self, rhs: Word) -> Self::Output {
                let mut result = self.clone();
                or_panic(result.$try(rhs));
                result
            }
        }

        impl $Op<Word> for Integer {
            type Output = Integer;

            #[track_caller]
            fn $op(mut self, rhs: Word) -> Self::Output {
                or_panic(self.$try(rhs));
                self
            }
        }
    };
}

integer_binop!(Add, add, AddAssign, add_assign, try_add);
integer_binop!(Sub, sub, SubAssign, sub_assign, try_sub);
integer_binop!(Mul, mul, MulAssign, mul_assign, try_mul);
integer_binop!(Div, div, DivAssign, div_assign, try_div);
integer_binop!(Rem, rem, RemAssign, rem_assign, try_rem);
integer_binop!(Shl, shl, ShlAssign, shl_assign, try_shl_by);
integer_binop!(Shr, shr, ShrAssign, shr_assign, try_shr_by);

word_binop!(Add, add, AddAssign, add_assign, try_add_word);
word_binop!(Sub, sub, SubAssign, sub_assign, try_sub_word);
word_binop!(Mul, mul, MulAssign, mul_assign, try_mul_word);
word_binop!(Div, div, DivAssign, div_assign, try_div_word);
word_binop!(Rem, rem, RemAssign, rem_assign, try_rem_word);
word_binop!(Shl, shl, ShlAssign, shl_assign, try_shl);
word_binop!(Shr, shr, ShrAssign, shr_assign, try_shr);

impl Integer {
    fn try_mul_word(&mut self, rhs: Word) -> Result<()> {
        self.mul_word(rhs);
        Ok(())
    }
}

/// Flips the sign; zero stays non-negative.
impl Neg for Integer {
    type Output = Integer;

    fn neg(mut self) -> Self::Output {
        self.sign = !self.sign;
        self.normalize();
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
