mod args;
mod exit_status;
mod printer;

pub use self::{
    args::{Args, ColorConfig},
    exit_status::ExitStatus,
};
pub(crate) use self::printer::Printer;
