//! # Lexical Kinds
//!
//! Each construct the scanner recognizes owns its delimiter constants here.
//! Recognizers refer to these constants; they never hardcode `<!--`, `\` or
//! `$` themselves.
//!
//! - **`Comment`**: `<!--` … `-->`, passed through (and used to hide macros)
//! - **`DropBlock`**: `<![CDATA[` … `]]>`, removed from output entirely
//! - **`Macro`**: `\name{args}[args]` commands and `\begin` … `\end` blocks
//! - **`InlineMath`**: `$` delimiters and the `•` alternate marker
//! - **`NonBreakingSpace`**: `~`, replaced by a comment marker

pub mod comment;
pub mod drop_block;
pub mod inline_math;
pub mod macros;
pub mod non_breaking_space;

pub use comment::Comment;
pub use drop_block::DropBlock;
pub use inline_math::InlineMath;
pub use macros::Macro;
pub use non_breaking_space::NonBreakingSpace;
