pub(crate) mod adjust;
pub(crate) mod blur;
pub(crate) mod post;
