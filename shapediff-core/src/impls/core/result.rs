use crate::{Field, Introspect, Shape, Union};

impl<T: Introspect, E: Introspect> Introspect for Result<T, E> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Ok(value) => Shape::Union(Union::new("Result", "Ok", vec![Field::positional(value)])),
            Err(error) => Shape::Union(Union::new("Result", "Err", vec![Field::positional(error)])),
        }
    }
}
