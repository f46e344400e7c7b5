use crate::{
    db::store::Store,
    libs::{messages::Message, view::View},
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// List name
    #[arg(required = true)]
    list: String,
}

pub fn cmd<S: Store>(args: TasksArgs, mut store: S) -> Result<()> {
    if store.find_list(&args.list)?.is_none() {
        msg_error!(Message::ListNotFound(args.list));
        return Ok(());
    }

    let tasks = store.tasks(&args.list)?;
    msg_print!(Message::TasksHeader(args.list), true);
    View::tasks(&tasks);
    Ok(())
}
