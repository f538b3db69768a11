use std::collections::BTreeSet;

use crate::{Introspect, Shape};

impl<T: Introspect> Introspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Set(self.iter().map(|e| e as &dyn Introspect).collect())
    }
}
