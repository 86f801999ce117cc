//! Library side of the `dbc` command line tool.

pub mod logging;
pub mod pipeline;
