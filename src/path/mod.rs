pub(crate) mod arclen;
pub(crate) mod segment;
