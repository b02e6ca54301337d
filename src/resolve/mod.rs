pub(crate) mod hints;
pub(crate) mod resolver;
