use crate::{Introspect, Scalar, Shape};

impl Introspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Primitive(Scalar::Text(self))
    }
}
