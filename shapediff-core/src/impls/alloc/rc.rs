use std::rc::Rc;

use crate::{Introspect, Shape};

impl<T: Introspect + ?Sized> Introspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}
