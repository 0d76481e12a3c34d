pub(crate) mod bitmap;
pub(crate) mod blend;
pub(crate) mod cache;
pub(crate) mod composite;
pub(crate) mod mask;
pub(crate) mod place;
pub(crate) mod raster;
