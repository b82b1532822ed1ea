mod action_id;
mod command_table;

pub use {
    action_id::ActionId,
    command_table::{CommandHandler, CommandOutcome, CommandTable},
};
