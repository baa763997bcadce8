pub(crate) mod bitmap;
pub(crate) mod book;
pub(crate) mod font;
pub(crate) mod metrics;
pub(crate) mod place;
pub(crate) mod wrap;
