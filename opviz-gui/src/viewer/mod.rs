//! Depiction image decoding and texture caching.

mod texture;

pub use texture::TextureCache;
