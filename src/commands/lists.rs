use crate::{
    db::store::Store,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd<S: Store>(mut store: S) -> Result<()> {
    let lists = store.lists()?;

    if lists.is_empty() {
        msg_info!(Message::NoListsFound);
        return Ok(());
    }

    msg_print!(Message::ListsHeader, true);
    View::lists(&lists, None);
    Ok(())
}
