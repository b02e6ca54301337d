pub(crate) mod breakpoints;
pub(crate) mod dimensions;
pub(crate) mod sizes;
