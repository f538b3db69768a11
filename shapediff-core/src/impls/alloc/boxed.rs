use crate::{Introspect, Shape};

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}
