//! Filesystem adapters for uploaded photos.

mod cap_std_photo_store;

pub use cap_std_photo_store::CapStdPhotoStore;
