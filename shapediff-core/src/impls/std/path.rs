use std::path::PathBuf;

use crate::{Introspect, Scalar, Shape};

impl Introspect for PathBuf {
    fn shape(&self) -> Shape<'_> {
        match self.to_str() {
            Some(text) => Shape::Primitive(Scalar::Text(text)),
            None => Shape::Primitive(Scalar::Other(self)),
        }
    }
}
