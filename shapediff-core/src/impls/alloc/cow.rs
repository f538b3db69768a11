use std::borrow::Cow;

use crate::{Introspect, Shape};

impl<B> Introspect for Cow<'_, B>
where
    B: Introspect + ToOwned + ?Sized,
{
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}
