//! Handlers that drive native dialogs and feed their results back as
//! messages.

mod browse;
mod dialogs;
mod save;
