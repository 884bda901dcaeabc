mod string_ops;

pub use string_ops::{common_prefix, indent_of, is_empty, replace_at, split_indent, trim};
