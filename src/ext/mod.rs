mod name_ext;

pub use name_ext::NameExt;
