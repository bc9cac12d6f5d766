pub mod text;

pub use text::{is_code_fence, is_list_or_quote, make_anchor};
