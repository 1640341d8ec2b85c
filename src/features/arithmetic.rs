use crate::{
    feature::{Features, True},
    strong_type::StrongType,
};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! binary_operator {
    ($($can:ident => $op:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {
        $(
            impl<T, Tag, F> $op for StrongType<T, Tag, F>
            where
                T: $op<Output = T>,
                F: Features<$can = True>,
            {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Self::new(self.into_inner().$method(rhs.into_inner()))
                }
            }

            impl<T, Tag, F> $assign for StrongType<T, Tag, F>
            where
                T: $assign,
                F: Features<$can = True>,
            {
                fn $assign_method(&mut self, rhs: Self) {
                    self.get_mut().$assign_method(rhs.into_inner());
                }
            }
        )*
    };
}

binary_operator! {
    CanAdd => Add::add, AddAssign::add_assign;
    CanSub => Sub::sub, SubAssign::sub_assign;
    CanMul => Mul::mul, MulAssign::mul_assign;
    CanDiv => Div::div, DivAssign::div_assign;
}

impl<T, Tag, F> Neg for StrongType<T, Tag, F>
where
    T: Neg<Output = T>,
    F: Features<CanNeg = True>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.into_inner())
    }
}
