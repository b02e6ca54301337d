pub(crate) mod breakpoint;
pub(crate) mod local;
pub(crate) mod remote;
