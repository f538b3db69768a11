use std::collections::HashSet;

use crate::{Introspect, Shape};

impl<T: Introspect, S> Introspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Set(self.iter().map(|e| e as &dyn Introspect).collect())
    }
}
