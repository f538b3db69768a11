use crate::{Introspect, Shape};

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|e| e as &dyn Introspect).collect())
    }
}
