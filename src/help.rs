use clap::{Command, CommandFactory};

use crate::cli::Cli;
use crate::commands::FILE_CHECKOUT;

/// A declared option flag, rendered the way it appears in help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub option: String,
    pub description: String,
}

fn checkout_command() -> Option<Command> {
    let root = Cli::command();
    let checkout = root.find_subcommand("file")?.find_subcommand("checkout")?;
    Some(checkout.clone().bin_name(FILE_CHECKOUT))
}

/// Options declared by `spo file checkout`, e.g. `-u, --webUrl <webUrl>`.
pub fn options() -> Vec<CommandOption> {
    let Some(command) = checkout_command() else {
        return Vec::new();
    };

    command
        .get_arguments()
        .filter(|arg| arg.get_id() != "help")
        .map(|arg| {
            let mut flags = Vec::new();
            if let Some(short) = arg.get_short() {
                flags.push(format!("-{short}"));
            }
            if let Some(long) = arg.get_long() {
                flags.push(format!("--{long}"));
            }

            let mut option = flags.join(", ");
            if arg.get_action().takes_values() {
                for name in arg.get_value_names().unwrap_or_default() {
                    option.push_str(&format!(" <{name}>"));
                }
            }

            CommandOption {
                option,
                description: arg.get_help().map(ToString::to_string).unwrap_or_default(),
            }
        })
        .collect()
}

/// Full help text for `spo file checkout`, examples included.
pub fn help() -> String {
    checkout_command()
        .map(|mut command| command.render_long_help().to_string())
        .unwrap_or_default()
}
