pub(crate) mod css;
