use crate::{Introspect, Shape};

impl<T: Introspect> Introspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|v| v as &dyn Introspect))
    }
}
