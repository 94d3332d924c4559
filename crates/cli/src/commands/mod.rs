pub mod history;
pub mod list;

use clap::Subcommand;
pub use history::HistoryArgs;
pub use list::ListArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a directory, folders first.
    ///
    /// Example:
    ///   dirtab list ~/projects
    ///   dirtab list --flat --desc -n 20 /var/log
    List(ListArgs),

    /// Show recently listed directories.
    History(HistoryArgs),
}
