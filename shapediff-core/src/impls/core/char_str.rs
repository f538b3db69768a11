use crate::{Introspect, Scalar, Shape};

impl Introspect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Primitive(Scalar::Char(*self))
    }
}

impl Introspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Primitive(Scalar::Text(self))
    }
}
