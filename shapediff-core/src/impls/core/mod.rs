mod char_str;
mod scalar;

mod array;
mod slice;
mod tuple;

mod reference;

mod option;
mod result;
