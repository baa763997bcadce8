pub(crate) mod button;
pub(crate) mod quote_mark;
pub(crate) mod shapes;
