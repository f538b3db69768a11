use crate::{Introspect, Shape};

impl<T: Introspect + ?Sized> Introspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}
