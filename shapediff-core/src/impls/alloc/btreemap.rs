use std::collections::BTreeMap;

use crate::{Introspect, Shape};

impl<K: Introspect, V: Introspect> Introspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(
            self.iter()
                .map(|(k, v)| (k as &dyn Introspect, v as &dyn Introspect))
                .collect(),
        )
    }
}
