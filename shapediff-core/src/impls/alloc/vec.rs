use std::collections::VecDeque;

use crate::{Introspect, Shape};

impl<T: Introspect> Introspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|e| e as &dyn Introspect).collect())
    }
}

impl<T: Introspect> Introspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|e| e as &dyn Introspect).collect())
    }
}
