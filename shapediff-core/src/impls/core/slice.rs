use crate::{Introspect, Shape};

impl<T: Introspect> Introspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|e| e as &dyn Introspect).collect())
    }
}
