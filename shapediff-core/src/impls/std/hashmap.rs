use std::collections::HashMap;

use crate::{Introspect, Shape};

impl<K: Introspect, V: Introspect, S> Introspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Introspect, v as &dyn Introspect))
                .collect(),
        )
    }
}
