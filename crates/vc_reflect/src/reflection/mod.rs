mod reflect;

pub use reflect::Reflect;
