//! Line-oriented front end for the shortlink store.
//!
//! Everything the store deliberately leaves out lives here: turning bare
//! tokens into displayable links and back, reading TTLs in hours,
//! formatting timestamps and presenting errors.

pub mod command;
pub mod link;
pub mod session;

pub use command::{Command, CommandError};
pub use link::LinkFormatter;
pub use session::{OutputFormat, Session, Step};
