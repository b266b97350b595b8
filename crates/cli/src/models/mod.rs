mod cli_args;
mod cli_error;
mod multi_send_args;
mod multi_send_parameters;

pub use cli_args::*;
pub use cli_error::*;
pub use multi_send_args::*;
pub use multi_send_parameters::*;
