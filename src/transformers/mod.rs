//! Text transformation functions
//!
//! Every tool in the catalog is backed by a plain function in one of these
//! modules. They take the input text plus their options and return a new
//! value; nothing here touches the clipboard, the network or the disk.

pub mod analysis;
pub mod case;
pub mod color;
pub mod convert;
pub mod encoding;
pub mod extract;
pub mod format;
pub mod generate;
pub mod lines;
pub mod time;

pub use analysis::*;
pub use case::*;
pub use color::{Color, Hsl, Rgb};
pub use convert::*;
pub use encoding::*;
pub use extract::*;
pub use format::*;
pub use generate::*;
pub use lines::*;
pub use time::*;
