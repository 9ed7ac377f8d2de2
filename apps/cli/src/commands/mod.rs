//! One module per subcommand.

pub mod check;
pub mod isbn;
pub mod list;
pub mod path;
pub mod range;
