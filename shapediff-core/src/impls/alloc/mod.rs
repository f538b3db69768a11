mod string;
mod vec;

mod btreemap;
mod btreeset;

mod boxed;
mod cow;
mod rc;
mod arc;
