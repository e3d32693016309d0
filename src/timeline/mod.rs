pub(crate) mod duration;
pub(crate) mod lookup;
pub(crate) mod timings;
