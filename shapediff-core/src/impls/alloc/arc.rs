use std::sync::Arc;

use crate::{Introspect, Shape};

impl<T: Introspect + ?Sized> Introspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}
